use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::PuzzleRow;

pub const JOINT_LABEL: &str = "Gewricht";
pub const FUNCTION_LABEL: &str = "Functie";

const JOINT_SHUFFLE_SALT: u32 = 0x0DE0_u32;
const FUNCTION_SHUFFLE_SALT: u32 = 0xF0DE_u32;

pub type CardId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Joint,
    Function,
}

impl CardKind {
    pub fn display_label(self) -> &'static str {
        match self {
            CardKind::Joint => JOINT_LABEL,
            CardKind::Function => FUNCTION_LABEL,
        }
    }

    pub(crate) fn slot_offset(self) -> usize {
        match self {
            CardKind::Joint => 0,
            CardKind::Function => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub kind: CardKind,
    pub owner: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPools {
    pub joints: Vec<Card>,
    pub functions: Vec<Card>,
}

impl CardPools {
    // Joint ids 0..n and function ids n..2n, so sorting by id yields a
    // dense index the board can address cards by.
    pub fn into_cards(self) -> Vec<Card> {
        let mut cards = self.joints;
        cards.extend(self.functions);
        cards.sort_unstable_by_key(|card| card.id);
        cards
    }
}

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn fresh_seed() -> u32 {
    rand::rng().random()
}

fn shuffle(cards: &mut [Card], seed: u32, salt_base: u32) {
    for i in (1..cards.len()).rev() {
        let salt = salt_base + i as u32;
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        cards.swap(i, j);
    }
}

pub fn deal_cards(rows: &[PuzzleRow], seed: u32) -> CardPools {
    let total = rows.len();
    let mut joints = Vec::with_capacity(total);
    let mut functions = Vec::with_capacity(total);
    for (owner, row) in rows.iter().enumerate() {
        joints.push(Card {
            id: owner,
            text: row.joint.clone(),
            kind: CardKind::Joint,
            owner,
        });
        functions.push(Card {
            id: total + owner,
            text: row.function.clone(),
            kind: CardKind::Function,
            owner,
        });
    }
    shuffle(&mut joints, seed, JOINT_SHUFFLE_SALT);
    shuffle(&mut functions, seed, FUNCTION_SHUFFLE_SALT);
    CardPools { joints, functions }
}

// Card texts carry an optional trailing parenthetical clause that renders
// as secondary text, e.g. "Ellebooggewricht (art. cubiti)".
pub fn split_clause(text: &str) -> (&str, Option<&str>) {
    if !text.ends_with(')') {
        return (text, None);
    }
    match text.find('(') {
        Some(0) | None => (text, None),
        Some(idx) => (text[..idx].trim_end(), Some(&text[idx..])),
    }
}
