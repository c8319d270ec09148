//! # Sale Client

use crate::model::{sales_total, Sale, SaleCreate, SaleId};
use crate::sale_actor::SaleError;
use async_trait::async_trait;
use chrono::NaiveDate;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::instrument;

#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn record(&self, params: SaleCreate) -> Result<SaleId, SaleError> {
        self.inner.create(params).await.map_err(SaleError::from)
    }

    /// Sales recorded on `day` (UTC).
    #[instrument(skip(self))]
    pub async fn on_day(&self, day: NaiveDate) -> Result<Vec<Sale>, SaleError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|sale| sale.recorded_at.date_naive() == day)
            .collect())
    }

    /// Sum of every recorded sale.
    #[instrument(skip(self))]
    pub async fn revenue(&self) -> Result<Decimal, SaleError> {
        sales_total(&self.list().await?)
            .ok_or_else(|| SaleError::ValidationError("Revenue does not fit in a decimal".into()))
    }
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SaleError::from(e)
    }
}
