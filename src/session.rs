use serde::{Deserialize, Serialize};

use crate::action::{GameAction, GameEvent};
use crate::board::{Board, PlaceError, Placement, SlotRef};
use crate::cards::{deal_cards, fresh_seed, CardId};
use crate::catalog::{default_rows, PuzzleRow};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt: u32,
    pub percentage: u32,
    pub timestamp_ms: f64,
}

pub fn format_score(percentage: u32) -> String {
    format!("{percentage}%")
}

#[derive(Clone, Debug)]
pub struct GameSession {
    rows: Vec<PuzzleRow>,
    board: Board,
    joint_order: Vec<CardId>,
    function_order: Vec<CardId>,
    seed: u32,
    attempt_number: u32,
    history: Vec<AttemptRecord>,
    completed: bool,
    dragging: Option<CardId>,
    hovered: Option<SlotRef>,
}

impl GameSession {
    pub fn new(rows: Vec<PuzzleRow>, seed: u32) -> Self {
        let mut session = Self {
            rows,
            board: Board::new(0, Vec::new()),
            joint_order: Vec::new(),
            function_order: Vec::new(),
            seed,
            attempt_number: 1,
            history: Vec::new(),
            completed: false,
            dragging: None,
            hovered: None,
        };
        session.deal(seed);
        session
    }

    pub fn with_default_rows(seed: u32) -> Self {
        Self::new(default_rows(), seed)
    }

    pub fn rows(&self) -> &[PuzzleRow] {
        &self.rows
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn joint_order(&self) -> &[CardId] {
        &self.joint_order
    }

    pub fn function_order(&self) -> &[CardId] {
        &self.function_order
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn attempt_number(&self) -> u32 {
        self.attempt_number
    }

    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn dragging(&self) -> Option<CardId> {
        self.dragging
    }

    pub fn hovered(&self) -> Option<SlotRef> {
        self.hovered
    }

    pub fn score_percentage(&self) -> u32 {
        let total = self.board.slot_count();
        if total == 0 {
            return 0;
        }
        let locked = self.board.locked_count();
        (100.0 * locked as f64 / total as f64).round() as u32
    }

    pub fn apply(&mut self, action: GameAction) -> Vec<GameEvent> {
        match action {
            GameAction::DragStart { card } => {
                if self.board.card(card).is_none() {
                    log::warn!("drag start for unknown card {card}");
                    return Vec::new();
                }
                self.dragging = Some(card);
                Vec::new()
            }
            GameAction::DragMove { hover } => {
                self.hovered = hover.filter(|at| self.board.slot(*at).is_some());
                Vec::new()
            }
            GameAction::DragEnd { card, target } => self.drag_end(card, target),
            GameAction::CheckAnswers { now_ms } => self.check_answers(now_ms),
            GameAction::Reset => {
                self.board.reset();
                self.completed = false;
                self.dragging = None;
                self.hovered = None;
                log::debug!("board cleared (seed {:#010x})", self.seed);
                vec![GameEvent::Cleared]
            }
            GameAction::NewGame { seed } => {
                let seed = seed.unwrap_or_else(fresh_seed);
                self.deal(seed);
                vec![GameEvent::Dealt { seed }]
            }
        }
    }

    // The remove intent, for adapters whose tray is itself a drop target.
    pub fn remove_card(&mut self, target: SlotRef) -> Result<Option<CardId>, PlaceError> {
        self.board.remove(target)
    }

    fn drag_end(&mut self, card: CardId, target: Option<SlotRef>) -> Vec<GameEvent> {
        self.dragging = None;
        self.hovered = None;
        let target = match target {
            Some(target) => target,
            // Ended outside every drop target: the board stays untouched.
            None => return vec![GameEvent::Released { card }],
        };
        match self.board.place(card, target) {
            Ok(Placement::AlreadyThere) => vec![GameEvent::Moved {
                card,
                to: target,
                displaced: None,
            }],
            Ok(Placement::Moved { displaced, .. }) => vec![GameEvent::Moved {
                card,
                to: target,
                displaced,
            }],
            Err(reason) => {
                // Gesture layers can deliver stale ids after a re-deal
                // mid-gesture; reject without touching the board.
                if matches!(reason, PlaceError::UnknownCard | PlaceError::UnknownSlot) {
                    log::warn!("drag end rejected: {reason} (card {card})");
                }
                vec![GameEvent::Rejected {
                    card,
                    to: target,
                    reason,
                }]
            }
        }
    }

    fn check_answers(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let summary = self.board.validate_and_lock();
        let record = AttemptRecord {
            attempt: self.attempt_number,
            percentage: self.score_percentage(),
            timestamp_ms: now_ms,
        };
        self.history.push(record);
        self.attempt_number += 1;
        let mut events = vec![GameEvent::Checked { summary, record }];
        if self.board.is_complete() && !self.completed {
            self.completed = true;
            events.push(GameEvent::Celebrate);
        }
        events
    }

    fn deal(&mut self, seed: u32) {
        let pools = deal_cards(&self.rows, seed);
        self.joint_order = pools.joints.iter().map(|card| card.id).collect();
        self.function_order = pools.functions.iter().map(|card| card.id).collect();
        self.board = Board::new(self.rows.len(), pools.into_cards());
        self.seed = seed;
        self.attempt_number = 1;
        self.history.clear();
        self.completed = false;
        self.dragging = None;
        self.hovered = None;
        log::debug!(
            "dealt {} cards over {} rows (seed {seed:#010x})",
            self.board.cards().len(),
            self.rows.len(),
        );
    }
}
