pub mod action;
pub mod board;
pub mod cards;
pub mod catalog;
pub mod session;
pub mod snapshot;

pub use action::{GameAction, GameEvent};
pub use board::{
    Board, PlaceError, Placement, SlotRef, SlotState, ValidationSummary, SLOTS_PER_ROW,
};
pub use cards::{
    deal_cards, fresh_seed, split_clause, Card, CardId, CardKind, CardPools, FUNCTION_LABEL,
    JOINT_LABEL,
};
pub use catalog::{default_rows, muscle_by_id, MuscleCatalogEntry, PuzzleRow, MUSCLE_CATALOG};
pub use session::{format_score, AttemptRecord, GameSession};
pub use snapshot::{CardView, GameSnapshot, SlotView, GAME_SNAPSHOT_VERSION};
