//! [`ActorEntity`] implementation for [`Sale`].

use super::error::SaleError;
use crate::model::{Sale, SaleCreate, SaleId};
use async_trait::async_trait;
use chrono::Utc;
use comanda_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = SaleError;

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, SaleError> {
        if params.total.is_sign_negative() {
            return Err(SaleError::ValidationError(format!(
                "sale for {} has a negative total",
                params.order_id
            )));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            total: params.total,
            payment_method: params.payment_method,
            recorded_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), SaleError> {
        Err(SaleError::Immutable(self.id.to_string()))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), SaleError> {
        Err(SaleError::Immutable(self.id.to_string()))
    }
}
