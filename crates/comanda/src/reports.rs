//! # Statistics
//!
//! Dashboard figures computed from snapshots of the registries. Everything here is a
//! pure function; the caller passes `now` so "today" is explicit.

use crate::model::{sales_total, InventoryItem, MenuItem, Order, OrderStatus, Sale, Table};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Admin dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Sales recorded on the UTC day of `now`.
    pub sales_today: usize,
    /// Saturates at `Decimal::MAX`.
    pub revenue_today: Decimal,
    pub active_orders: usize,
    pub occupied_tables: usize,
    pub unavailable_dishes: usize,
    /// Inventory items at or below their minimum.
    pub low_inventory: usize,
}

/// Floor and kitchen status right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStatus {
    /// Confirmed or preparing.
    pub orders_in_kitchen: usize,
    pub orders_ready: usize,
    pub occupied_tables: usize,
    /// Mean time from starting to finishing an item, over every finished item.
    pub average_preparation_minutes: Option<f64>,
}

pub fn daily_stats(
    now: DateTime<Utc>,
    sales: &[Sale],
    orders: &[Order],
    tables: &[Table],
    menu: &[MenuItem],
    inventory: &[InventoryItem],
) -> DailyStats {
    let today = now.date_naive();
    let todays_sales: Vec<&Sale> = sales
        .iter()
        .filter(|sale| sale.recorded_at.date_naive() == today)
        .collect();

    DailyStats {
        sales_today: todays_sales.len(),
        revenue_today: sales_total(todays_sales.iter().copied()).unwrap_or(Decimal::MAX),
        active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
        occupied_tables: tables.iter().filter(|t| t.is_occupied()).count(),
        unavailable_dishes: menu.iter().filter(|dish| !dish.available).count(),
        low_inventory: inventory.iter().filter(|item| item.is_low_stock()).count(),
    }
}

pub fn live_status(orders: &[Order], tables: &[Table]) -> LiveStatus {
    LiveStatus {
        orders_in_kitchen: orders.iter().filter(|o| o.status.is_in_kitchen()).count(),
        orders_ready: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Ready)
            .count(),
        occupied_tables: tables.iter().filter(|t| t.is_occupied()).count(),
        average_preparation_minutes: average_preparation_minutes(orders),
    }
}

/// `None` until at least one item has both timestamps.
pub fn average_preparation_minutes(orders: &[Order]) -> Option<f64> {
    let durations: Vec<f64> = orders
        .iter()
        .flat_map(|order| &order.items)
        .filter_map(|item| match (item.started_at, item.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds() as f64 / 60.0),
            _ => None,
        })
        .collect();

    if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        KitchenStatus, MenuItemId, OrderId, OrderItem, PaymentMethod, SaleId, TableId,
        TableStatus,
    };
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn sale(id: u32, total: i64, at: DateTime<Utc>) -> Sale {
        Sale {
            id: SaleId(id),
            order_id: OrderId(id),
            total: Decimal::from(total),
            payment_method: PaymentMethod::Yape,
            recorded_at: at,
        }
    }

    fn order(status: OrderStatus, cooked_minutes: &[i64]) -> Order {
        let start = noon();
        Order {
            id: OrderId(1),
            table_id: TableId(1),
            table_number: 1,
            customer_id: "cust_1".into(),
            waiter_id: None,
            items: cooked_minutes
                .iter()
                .map(|&minutes| OrderItem {
                    menu_item_id: MenuItemId(1),
                    name: "Causa".into(),
                    quantity: 1,
                    unit_price: Decimal::ONE,
                    note: None,
                    kitchen_status: KitchenStatus::Ready,
                    started_at: Some(start),
                    finished_at: Some(start + Duration::minutes(minutes)),
                })
                .collect(),
            total: Decimal::ONE,
            status,
            payment_method: PaymentMethod::Card,
            payment_validated: true,
            note: None,
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn test_daily_stats_only_counts_todays_sales() {
        let sales = [
            sale(1, 20, noon()),
            sale(2, 15, noon() - Duration::hours(11)),
            sale(3, 99, noon() - Duration::days(1)),
        ];
        let orders = [
            order(OrderStatus::Preparing, &[]),
            order(OrderStatus::CourierEnRoute, &[]),
            order(OrderStatus::Delivered, &[]),
            order(OrderStatus::Cancelled, &[]),
        ];
        let mut busy = Table::new(TableId(1), 1, 4, None);
        busy.status = TableStatus::Occupied;
        let tables = [busy, Table::new(TableId(2), 2, 4, None)];

        let stats = daily_stats(noon(), &sales, &orders, &tables, &[], &[]);
        assert_eq!(stats.sales_today, 2);
        assert_eq!(stats.revenue_today, Decimal::from(35));
        assert_eq!(stats.active_orders, 2);
        assert_eq!(stats.occupied_tables, 1);
    }

    #[test]
    fn test_daily_revenue_saturates_instead_of_overflowing() {
        let sales = [sale(1, 0, noon()), sale(2, 0, noon())].map(|mut sale| {
            sale.total = Decimal::MAX;
            sale
        });
        let stats = daily_stats(noon(), &sales, &[], &[], &[], &[]);
        assert_eq!(stats.sales_today, 2);
        assert_eq!(stats.revenue_today, Decimal::MAX);
    }

    #[test]
    fn test_average_preparation_time() {
        assert_eq!(average_preparation_minutes(&[order(OrderStatus::Ready, &[])]), None);

        let orders = [
            order(OrderStatus::Ready, &[10, 20]),
            order(OrderStatus::Billed, &[30]),
        ];
        assert_eq!(average_preparation_minutes(&orders), Some(20.0));

        let live = live_status(&orders, &[]);
        assert_eq!(live.orders_ready, 1);
        assert_eq!(live.orders_in_kitchen, 0);
    }
}
