//! # Employee Client

use crate::employee_actor::{EmployeeAction, EmployeeError};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate, Role};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn hire(&self, params: EmployeeCreate) -> Result<EmployeeId, EmployeeError> {
        self.inner.create(params).await.map_err(EmployeeError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        self.inner
            .update(id, update)
            .await
            .map_err(EmployeeError::from)
    }

    /// Returns whether the employee is active afterwards.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: EmployeeId) -> Result<bool, EmployeeError> {
        self.inner
            .perform_action(id, EmployeeAction::ToggleActive)
            .await
            .map_err(EmployeeError::from)
    }

    #[instrument(skip(self))]
    pub async fn set_online(&self, id: EmployeeId, online: bool) -> Result<bool, EmployeeError> {
        self.inner
            .perform_action(id, EmployeeAction::SetOnline(online))
            .await
            .map_err(EmployeeError::from)
    }

    #[instrument(skip(self))]
    pub async fn with_role(&self, role: Role) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|employee| employee.role == role)
            .collect())
    }

    /// The earliest-hired (by id) waiter who is active and online.
    #[instrument(skip(self))]
    pub async fn first_available_waiter(&self) -> Result<Option<Employee>, EmployeeError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(Employee::is_available_waiter))
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        EmployeeError::from(e)
    }
}
