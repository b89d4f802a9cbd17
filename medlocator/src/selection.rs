//! Selection state - the chosen hospital and the latest user fix.
//!
//! One explicit state object instead of ambient globals: the controller owns
//! a single instance and presentation components read through it.

use crate::location::UserFix;
use crate::registry::HospitalRecord;

/// Tracks the currently chosen hospital and the most recent user location.
///
/// Invariant: navigation is permitted only when both fields are present
/// ([`SelectionState::can_navigate`]), regardless of the order in which they
/// were set.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<HospitalRecord>,
    user_fix: Option<UserFix>,
}

impl SelectionState {
    /// Create an empty selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected hospital, if any.
    pub fn selected(&self) -> Option<&HospitalRecord> {
        self.selected.as_ref()
    }

    /// The most recent user fix, if any.
    pub fn user_fix(&self) -> Option<&UserFix> {
        self.user_fix.as_ref()
    }

    /// Set the selected hospital, replacing any prior selection.
    pub fn select(&mut self, record: HospitalRecord) {
        self.selected = Some(record);
    }

    /// Clear the hospital selection, keeping the user fix.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the user fix wholesale (no history retained).
    pub fn set_fix(&mut self, fix: UserFix) {
        self.user_fix = Some(fix);
    }

    /// Drop the stored user fix.
    pub fn clear_fix(&mut self) {
        self.user_fix = None;
    }

    /// Clear both fields (reset action).
    pub fn clear_all(&mut self) {
        self.selected = None;
        self.user_fix = None;
    }

    /// True iff both a hospital and a user fix are present.
    pub fn can_navigate(&self) -> bool {
        self.selected.is_some() && self.user_fix.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn mulago() -> HospitalRecord {
        Registry::builtin()
            .get("Mulago National Referral Hospital")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_empty_state_cannot_navigate() {
        let state = SelectionState::new();
        assert!(state.selected().is_none());
        assert!(state.user_fix().is_none());
        assert!(!state.can_navigate());
    }

    #[test]
    fn test_can_navigate_requires_both_either_order() {
        // Hospital first
        let mut state = SelectionState::new();
        state.select(mulago());
        assert!(!state.can_navigate());
        state.set_fix(UserFix::new(0.3135, 32.5811, 25.0));
        assert!(state.can_navigate());

        // Fix first
        let mut state = SelectionState::new();
        state.set_fix(UserFix::new(0.3135, 32.5811, 25.0));
        assert!(!state.can_navigate());
        state.select(mulago());
        assert!(state.can_navigate());
    }

    #[test]
    fn test_clear_selection_keeps_fix() {
        let mut state = SelectionState::new();
        state.select(mulago());
        state.set_fix(UserFix::new(0.3135, 32.5811, 25.0));

        state.clear_selection();
        assert!(state.selected().is_none());
        assert!(state.user_fix().is_some());
        assert!(!state.can_navigate());
    }

    #[test]
    fn test_fix_replaced_wholesale() {
        let mut state = SelectionState::new();
        state.set_fix(UserFix::new(0.1, 32.0, 100.0));
        state.set_fix(UserFix::new(0.2, 32.1, 10.0));

        let fix = state.user_fix().unwrap();
        assert_eq!(fix.coords(), (0.2, 32.1));
        assert_eq!(fix.accuracy_m, 10.0);
    }

    #[test]
    fn test_clear_all() {
        let mut state = SelectionState::new();
        state.select(mulago());
        state.set_fix(UserFix::new(0.3135, 32.5811, 25.0));

        state.clear_all();
        assert!(state.selected().is_none());
        assert!(state.user_fix().is_none());
    }
}
