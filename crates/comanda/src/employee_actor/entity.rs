//! [`ActorEntity`] implementation for [`Employee`].

use super::actions::EmployeeAction;
use super::error::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use comanda_actor::ActorEntity;

fn check_email(email: &str) -> Result<(), EmployeeError> {
    if !email.contains('@') {
        return Err(EmployeeError::ValidationError(format!(
            "invalid email: {email}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = EmployeeAction;
    type ActionResult = bool;
    type Context = ();
    type Error = EmployeeError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, EmployeeError> {
        if params.name.trim().is_empty() {
            return Err(EmployeeError::ValidationError("name is empty".into()));
        }
        check_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            role: params.role,
            email: params.email,
            phone: params.phone,
            hired_on: params.hired_on,
            active: true,
            shift: params.shift,
            online: false,
        })
    }

    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &()) -> Result<(), EmployeeError> {
        if let Some(email) = update.email {
            check_email(&email)?;
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(shift) = update.shift {
            self.shift = Some(shift);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: EmployeeAction,
        _ctx: &(),
    ) -> Result<bool, EmployeeError> {
        match action {
            EmployeeAction::ToggleActive => {
                self.active = !self.active;
                if !self.active {
                    self.online = false;
                }
                Ok(self.active)
            }
            EmployeeAction::SetOnline(online) => {
                if online && !self.active {
                    return Err(EmployeeError::Inactive(self.id.to_string()));
                }
                self.online = online;
                Ok(self.online)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use chrono::NaiveDate;

    fn rosa() -> Employee {
        Employee::from_create_params(
            EmployeeId(1),
            EmployeeCreate {
                name: "Rosa".into(),
                role: Role::Waiter,
                email: "rosa@comanda.pe".into(),
                phone: None,
                hired_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                shift: Some("evening".into()),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_only_active_online_waiters_are_available() {
        let mut rosa = rosa();
        assert!(!rosa.is_available_waiter());

        rosa.handle_action(EmployeeAction::SetOnline(true), &())
            .await
            .unwrap();
        assert!(rosa.is_available_waiter());

        assert!(!rosa
            .handle_action(EmployeeAction::ToggleActive, &())
            .await
            .unwrap());
        assert!(!rosa.online);
        assert!(matches!(
            rosa.handle_action(EmployeeAction::SetOnline(true), &()).await,
            Err(EmployeeError::Inactive(_))
        ));
    }

    #[test]
    fn test_email_must_look_like_one() {
        let mut params = EmployeeCreate {
            name: "Luis".into(),
            role: Role::Kitchen,
            email: "luis".into(),
            phone: None,
            hired_on: NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
            shift: None,
        };
        assert!(Employee::from_create_params(EmployeeId(2), params.clone()).is_err());
        params.email = "luis@comanda.pe".into();
        assert!(Employee::from_create_params(EmployeeId(2), params).is_ok());
    }
}
