use crate::board::{PlaceError, SlotRef, ValidationSummary};
use crate::cards::CardId;
use crate::session::AttemptRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameAction {
    DragStart { card: CardId },
    DragMove { hover: Option<SlotRef> },
    DragEnd { card: CardId, target: Option<SlotRef> },
    CheckAnswers { now_ms: f64 },
    Reset,
    NewGame { seed: Option<u32> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Moved {
        card: CardId,
        to: SlotRef,
        displaced: Option<CardId>,
    },
    Released {
        card: CardId,
    },
    Rejected {
        card: CardId,
        to: SlotRef,
        reason: PlaceError,
    },
    Checked {
        summary: ValidationSummary,
        record: AttemptRecord,
    },
    Celebrate,
    Cleared,
    Dealt {
        seed: u32,
    },
}
