//! Custom actions for the Menu actor.

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Flip `available`; returns the new value.
    ToggleAvailability,
}
