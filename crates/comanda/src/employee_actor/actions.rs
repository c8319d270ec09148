//! Custom actions for the Employee actor.

#[derive(Debug, Clone)]
pub enum EmployeeAction {
    /// Flip `active`; returns the new value. Deactivating also takes the employee offline.
    ToggleActive,
    /// Log in (`true`) or out (`false`); returns the new value.
    SetOnline(bool),
}
