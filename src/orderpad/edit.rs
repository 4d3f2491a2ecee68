//! The inline-edit state machine.
//!
//! Exactly one field may be edited at a time. Instead of a nullable
//! "currently editing" reference, the state is a sum type: either `Idle` or
//! `Editing` with the active cell's coordinates, so two simultaneous edits
//! are unrepresentable.
//!
//! The controller owns no storage. A successful commit yields the validated
//! [`FieldChange`]; the caller applies it to the book and persists. A failed
//! commit keeps the session alive with an inline error, mirroring the
//! stay-and-show-error behavior of the original form.

use crate::model::{Column, FieldChange, Order};
use crate::validate::parse_field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEdit {
    pub order_id: u64,
    pub column: Column,
    /// Display text at the moment the edit began; restored on cancel.
    pub original: String,
    /// Inline validation message from the last rejected commit, if any.
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(ActiveEdit),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Input validated; apply the change and persist. The session is over.
    Committed(FieldChange),
    /// Input rejected; the session stays active with this message shown.
    Rejected(&'static str),
    /// There was no active session to commit.
    NotEditing,
}

#[derive(Debug, Default)]
pub struct EditController {
    state: EditState,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActiveEdit> {
        match &self.state {
            EditState::Editing(active) => Some(active),
            EditState::Idle => None,
        }
    }

    /// Enter edit mode on one cell. Returns `false` without changing state
    /// when a session is already active (only one concurrent edit) or the
    /// column is not editable for this record.
    pub fn begin(&mut self, order: &Order, column: Column) -> bool {
        if matches!(self.state, EditState::Editing(_)) {
            return false;
        }
        self.state = EditState::Editing(ActiveEdit {
            order_id: order.id,
            column,
            original: order.field_text(column),
            error: None,
        });
        true
    }

    /// Validate the input against the active column and either finish the
    /// session with a typed change or stay editing with an inline error.
    pub fn commit(&mut self, input: &str) -> CommitOutcome {
        let active = match &mut self.state {
            EditState::Editing(active) => active,
            EditState::Idle => return CommitOutcome::NotEditing,
        };

        match parse_field(active.column, input) {
            Ok(change) => {
                self.state = EditState::Idle;
                CommitOutcome::Committed(change)
            }
            Err(message) => {
                active.error = Some(message);
                CommitOutcome::Rejected(message)
            }
        }
    }

    /// Discard the pending edit without validating or saving.
    /// Returns `true` if a session was actually abandoned.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            EditState::Editing(_) => {
                self.state = EditState::Idle;
                true
            }
            EditState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Warehouse;

    fn order() -> Order {
        Order {
            id: 3,
            product: "Bolts".into(),
            quantity: 10,
            warehouse: Warehouse::Primary,
        }
    }

    #[test]
    fn begin_captures_the_cell() {
        let mut ctrl = EditController::new();
        assert!(ctrl.begin(&order(), Column::Quantity));
        let active = ctrl.active().unwrap();
        assert_eq!(active.order_id, 3);
        assert_eq!(active.column, Column::Quantity);
        assert_eq!(active.original, "10");
        assert!(active.error.is_none());
    }

    #[test]
    fn second_begin_is_a_noop_while_editing() {
        let mut ctrl = EditController::new();
        assert!(ctrl.begin(&order(), Column::Product));
        assert!(!ctrl.begin(&order(), Column::Quantity));
        assert_eq!(ctrl.active().unwrap().column, Column::Product);
    }

    #[test]
    fn valid_commit_yields_trimmed_change_and_idles() {
        let mut ctrl = EditController::new();
        ctrl.begin(&order(), Column::Product);
        assert_eq!(
            ctrl.commit("  Washers "),
            CommitOutcome::Committed(FieldChange::Product("Washers".into()))
        );
        assert_eq!(ctrl.state(), &EditState::Idle);
    }

    #[test]
    fn invalid_commit_stays_editing_with_error() {
        let mut ctrl = EditController::new();
        ctrl.begin(&order(), Column::Quantity);

        for bad in ["0", "abc", "3.5", "-1"] {
            match ctrl.commit(bad) {
                CommitOutcome::Rejected(msg) => {
                    assert_eq!(ctrl.active().unwrap().error, Some(msg));
                }
                other => panic!("expected rejection for {:?}, got {:?}", bad, other),
            }
        }

        // The session recovers once the input is fixed.
        assert_eq!(
            ctrl.commit("7"),
            CommitOutcome::Committed(FieldChange::Quantity(7))
        );
    }

    #[test]
    fn cancel_discards_without_validating() {
        let mut ctrl = EditController::new();
        ctrl.begin(&order(), Column::Warehouse);
        assert!(ctrl.cancel());
        assert_eq!(ctrl.state(), &EditState::Idle);
        // A new session can start immediately after.
        assert!(ctrl.begin(&order(), Column::Product));
    }

    #[test]
    fn commit_without_session_reports_not_editing() {
        let mut ctrl = EditController::new();
        assert_eq!(ctrl.commit("anything"), CommitOutcome::NotEditing);
        assert!(!ctrl.cancel());
    }
}
