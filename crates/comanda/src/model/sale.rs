//! A completed sale, appended once per delivered order.

use crate::model::{OrderId, PaymentMethod};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for sales.
    SaleId,
    "sale"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub order_id: OrderId,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub order_id: OrderId,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
}

/// Sum of the sale totals, or `None` if it does not fit in a `Decimal`.
pub fn sales_total<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Option<Decimal> {
    sales
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, sale| sum.checked_add(sale.total))
}
