use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind};

pub const SLOTS_PER_ROW: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub row: usize,
    pub kind: CardKind,
}

impl SlotRef {
    pub fn new(row: usize, kind: CardKind) -> Self {
        Self { row, kind }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotState {
    pub occupant: Option<CardId>,
    pub locked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    AlreadyThere,
    Moved {
        from: Option<SlotRef>,
        displaced: Option<CardId>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total_slots: usize,
    pub locked_total: usize,
    pub newly_correct: usize,
    pub newly_incorrect: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    LockedTarget,
    KindMismatch,
    UnknownCard,
    UnknownSlot,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::LockedTarget => write!(f, "slot is locked"),
            PlaceError::KindMismatch => write!(f, "card kind does not match slot kind"),
            PlaceError::UnknownCard => write!(f, "card id not recognized"),
            PlaceError::UnknownSlot => write!(f, "slot not recognized"),
        }
    }
}

impl std::error::Error for PlaceError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    row_count: usize,
    cards: Vec<Card>,
    slots: Vec<SlotState>,
}

impl Board {
    // Cards must come in with dense ids (0..2n); CardPools::into_cards
    // produces exactly that.
    pub fn new(row_count: usize, cards: Vec<Card>) -> Self {
        Self {
            row_count,
            cards,
            slots: vec![SlotState::default(); row_count * SLOTS_PER_ROW],
        }
    }

    fn index_of(&self, at: SlotRef) -> Option<usize> {
        if at.row >= self.row_count {
            return None;
        }
        Some(at.row * SLOTS_PER_ROW + at.kind.slot_offset())
    }

    fn ref_of(&self, index: usize) -> SlotRef {
        let kind = if index % SLOTS_PER_ROW == 0 {
            CardKind::Joint
        } else {
            CardKind::Function
        };
        SlotRef::new(index / SLOTS_PER_ROW, kind)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn slot(&self, at: SlotRef) -> Option<&SlotState> {
        self.index_of(at).and_then(|index| self.slots.get(index))
    }

    pub fn location_of(&self, card: CardId) -> Option<SlotRef> {
        self.slots
            .iter()
            .position(|slot| slot.occupant == Some(card))
            .map(|index| self.ref_of(index))
    }

    pub fn locked_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.locked).count()
    }

    pub fn place(&mut self, card: CardId, target: SlotRef) -> Result<Placement, PlaceError> {
        let target_index = self.index_of(target).ok_or(PlaceError::UnknownSlot)?;
        let kind = self
            .cards
            .get(card)
            .map(|card| card.kind)
            .ok_or(PlaceError::UnknownCard)?;
        if self.slots[target_index].locked {
            return Err(PlaceError::LockedTarget);
        }
        if kind != target.kind {
            return Err(PlaceError::KindMismatch);
        }
        if self.slots[target_index].occupant == Some(card) {
            return Ok(Placement::AlreadyThere);
        }
        let source_index = self
            .slots
            .iter()
            .position(|slot| slot.occupant == Some(card));
        if let Some(index) = source_index {
            // A locked occupant is confirmed correct and never moves again.
            if self.slots[index].locked {
                return Err(PlaceError::LockedTarget);
            }
        }
        if let Some(index) = source_index {
            self.slots[index].occupant = None;
        }
        let displaced = self.slots[target_index].occupant.take();
        self.slots[target_index].occupant = Some(card);
        Ok(Placement::Moved {
            from: source_index.map(|index| self.ref_of(index)),
            displaced,
        })
    }

    pub fn remove(&mut self, target: SlotRef) -> Result<Option<CardId>, PlaceError> {
        let index = self.index_of(target).ok_or(PlaceError::UnknownSlot)?;
        if self.slots[index].locked {
            return Err(PlaceError::LockedTarget);
        }
        Ok(self.slots[index].occupant.take())
    }

    pub fn validate_and_lock(&mut self) -> ValidationSummary {
        let mut newly_correct = 0;
        let mut newly_incorrect = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.locked {
                continue;
            }
            let occupant = match slot.occupant {
                Some(card) => card,
                None => continue,
            };
            let owner = self.cards.get(occupant).map(|card| card.owner);
            if owner == Some(index / SLOTS_PER_ROW) {
                slot.locked = true;
                newly_correct += 1;
            } else {
                newly_incorrect += 1;
            }
        }
        ValidationSummary {
            total_slots: self.slots.len(),
            locked_total: self.locked_count(),
            newly_correct,
            newly_incorrect,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| slot.locked)
    }

    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = SlotState::default();
        }
    }
}
