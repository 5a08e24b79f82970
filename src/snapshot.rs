use serde::{Deserialize, Serialize};

use crate::board::SlotRef;
use crate::cards::{Card, CardId, CardKind};
use crate::session::{AttemptRecord, GameSession};

pub const GAME_SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub text: String,
    pub kind: CardKind,
}

impl CardView {
    fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            text: card.text.clone(),
            kind: card.kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub row_id: String,
    pub muscle: String,
    pub kind: CardKind,
    pub occupant: Option<CardView>,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub slots: Vec<SlotView>,
    pub joint_tray: Vec<CardView>,
    pub function_tray: Vec<CardView>,
    pub score: u32,
    pub attempt_number: u32,
    pub history: Vec<AttemptRecord>,
    pub completed: bool,
    pub dragging: Option<CardId>,
    pub hovered: Option<SlotRef>,
}

impl GameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let board = session.board();
        let mut slots = Vec::with_capacity(board.slot_count());
        for (row, entry) in session.rows().iter().enumerate() {
            for kind in [CardKind::Joint, CardKind::Function] {
                let at = SlotRef::new(row, kind);
                let state = board.slot(at).copied().unwrap_or_default();
                slots.push(SlotView {
                    row_id: entry.id.clone(),
                    muscle: entry.muscle.clone(),
                    kind,
                    occupant: state
                        .occupant
                        .and_then(|id| board.card(id))
                        .map(CardView::from_card),
                    locked: state.locked,
                });
            }
        }
        GameSnapshot {
            version: GAME_SNAPSHOT_VERSION,
            slots,
            joint_tray: tray_views(session, session.joint_order()),
            function_tray: tray_views(session, session.function_order()),
            score: session.score_percentage(),
            attempt_number: session.attempt_number(),
            history: session.history().to_vec(),
            completed: session.is_completed(),
            dragging: session.dragging(),
            hovered: session.hovered(),
        }
    }
}

// Trays keep the shuffled deal order, minus whatever sits on the board.
fn tray_views(session: &GameSession, order: &[CardId]) -> Vec<CardView> {
    let board = session.board();
    order
        .iter()
        .filter(|id| board.location_of(**id).is_none())
        .filter_map(|id| board.card(*id))
        .map(CardView::from_card)
        .collect()
}
