use spierpuzzel_core::{
    deal_cards, Board, CardId, CardKind, PlaceError, Placement, PuzzleRow, SlotRef,
};

fn build_rows(count: usize) -> Vec<PuzzleRow> {
    (0..count)
        .map(|index| PuzzleRow {
            id: format!("row-{index}"),
            muscle: format!("Muscle {index}"),
            joint: format!("Joint {index} (j{index})"),
            function: format!("Function {index} (f{index})"),
        })
        .collect()
}

fn build_board(count: usize, seed: u32) -> Board {
    let rows = build_rows(count);
    Board::new(count, deal_cards(&rows, seed).into_cards())
}

fn card_of(board: &Board, kind: CardKind, owner: usize) -> CardId {
    board
        .cards()
        .iter()
        .find(|card| card.kind == kind && card.owner == owner)
        .map(|card| card.id)
        .expect("one card per row per kind")
}

fn occurrences(board: &Board, card: CardId) -> usize {
    let mut seen = 0;
    for row in 0..board.row_count() {
        for kind in [CardKind::Joint, CardKind::Function] {
            let slot = board.slot(SlotRef::new(row, kind)).expect("slot exists");
            if slot.occupant == Some(card) {
                seen += 1;
            }
        }
    }
    seen
}

#[test]
fn deal_emits_one_card_per_row_per_kind() {
    let rows = build_rows(4);
    let pools = deal_cards(&rows, 7);
    assert_eq!(pools.joints.len(), 4);
    assert_eq!(pools.functions.len(), 4);
    for (owner, row) in rows.iter().enumerate() {
        assert!(pools
            .joints
            .iter()
            .any(|card| card.owner == owner
                && card.kind == CardKind::Joint
                && card.text == row.joint));
        assert!(pools
            .functions
            .iter()
            .any(|card| card.owner == owner
                && card.kind == CardKind::Function
                && card.text == row.function));
    }
    let mut ids: Vec<CardId> = pools
        .joints
        .iter()
        .chain(pools.functions.iter())
        .map(|card| card.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[test]
fn deal_is_reproducible_per_seed() {
    let rows = build_rows(6);
    let first = deal_cards(&rows, 0x5EED);
    let second = deal_cards(&rows, 0x5EED);
    assert_eq!(first, second);
}

#[test]
fn deals_with_different_seeds_are_permutations() {
    let rows = build_rows(6);
    let order = |seed: u32| -> Vec<CardId> {
        deal_cards(&rows, seed)
            .joints
            .iter()
            .map(|card| card.id)
            .collect()
    };
    let base = order(0);
    let mut saw_different = false;
    for seed in 1..=10 {
        let other = order(seed);
        let mut sorted = other.clone();
        sorted.sort_unstable();
        let mut base_sorted = base.clone();
        base_sorted.sort_unstable();
        assert_eq!(sorted, base_sorted);
        if other != base {
            saw_different = true;
        }
    }
    assert!(saw_different);
}

#[test]
fn place_then_remove_returns_slot_to_empty() {
    let mut board = build_board(3, 1);
    let card = card_of(&board, CardKind::Joint, 1);
    let slot = SlotRef::new(2, CardKind::Joint);
    assert_eq!(
        board.place(card, slot),
        Ok(Placement::Moved {
            from: None,
            displaced: None,
        })
    );
    assert_eq!(board.slot(slot).expect("slot").occupant, Some(card));
    assert_eq!(board.remove(slot), Ok(Some(card)));
    assert_eq!(board.slot(slot).expect("slot").occupant, None);
    assert_eq!(board.remove(slot), Ok(None));
}

#[test]
fn moving_a_card_vacates_its_old_slot() {
    let mut board = build_board(3, 1);
    let card = card_of(&board, CardKind::Function, 0);
    let first = SlotRef::new(0, CardKind::Function);
    let second = SlotRef::new(1, CardKind::Function);
    board.place(card, first).expect("first placement");
    let placement = board.place(card, second).expect("move");
    assert_eq!(
        placement,
        Placement::Moved {
            from: Some(first),
            displaced: None,
        }
    );
    assert_eq!(board.slot(first).expect("slot").occupant, None);
    assert_eq!(board.slot(second).expect("slot").occupant, Some(card));
    assert_eq!(occurrences(&board, card), 1);
}

#[test]
fn placing_onto_an_occupied_slot_displaces_the_occupant() {
    let mut board = build_board(2, 3);
    let first = card_of(&board, CardKind::Joint, 0);
    let second = card_of(&board, CardKind::Joint, 1);
    let slot = SlotRef::new(0, CardKind::Joint);
    board.place(first, slot).expect("first placement");
    let placement = board.place(second, slot).expect("replacement");
    assert_eq!(
        placement,
        Placement::Moved {
            from: None,
            displaced: Some(first),
        }
    );
    assert_eq!(board.location_of(first), None);
    assert_eq!(board.slot(slot).expect("slot").occupant, Some(second));
}

#[test]
fn placing_onto_the_same_slot_is_a_successful_noop() {
    let mut board = build_board(2, 3);
    let card = card_of(&board, CardKind::Joint, 0);
    let slot = SlotRef::new(1, CardKind::Joint);
    board.place(card, slot).expect("placement");
    assert_eq!(board.place(card, slot), Ok(Placement::AlreadyThere));
    assert_eq!(board.slot(slot).expect("slot").occupant, Some(card));
    assert_eq!(occurrences(&board, card), 1);
}

#[test]
fn kind_mismatch_is_always_rejected() {
    let mut board = build_board(2, 9);
    let function_card = card_of(&board, CardKind::Function, 0);
    let joint_slot = SlotRef::new(0, CardKind::Joint);
    assert_eq!(
        board.place(function_card, joint_slot),
        Err(PlaceError::KindMismatch)
    );
    assert_eq!(board.slot(joint_slot).expect("slot").occupant, None);
    assert_eq!(board.location_of(function_card), None);
}

#[test]
fn locked_slots_reject_place_and_remove() {
    let mut board = build_board(2, 4);
    let card = card_of(&board, CardKind::Joint, 0);
    let slot = SlotRef::new(0, CardKind::Joint);
    board.place(card, slot).expect("placement");
    let summary = board.validate_and_lock();
    assert_eq!(summary.newly_correct, 1);
    assert!(board.slot(slot).expect("slot").locked);

    let other = card_of(&board, CardKind::Joint, 1);
    assert_eq!(board.place(other, slot), Err(PlaceError::LockedTarget));
    assert_eq!(board.remove(slot), Err(PlaceError::LockedTarget));
    let state = board.slot(slot).expect("slot");
    assert_eq!(state.occupant, Some(card));
    assert!(state.locked);
}

#[test]
fn locked_occupant_cannot_be_moved_out() {
    let mut board = build_board(2, 4);
    let card = card_of(&board, CardKind::Joint, 0);
    let home = SlotRef::new(0, CardKind::Joint);
    board.place(card, home).expect("placement");
    board.validate_and_lock();

    let elsewhere = SlotRef::new(1, CardKind::Joint);
    assert_eq!(board.place(card, elsewhere), Err(PlaceError::LockedTarget));
    assert_eq!(board.slot(home).expect("slot").occupant, Some(card));
    assert_eq!(board.slot(elsewhere).expect("slot").occupant, None);
}

#[test]
fn validate_and_lock_is_idempotent() {
    let mut board = build_board(2, 5);
    let correct = card_of(&board, CardKind::Joint, 0);
    let misplaced = card_of(&board, CardKind::Function, 1);
    board
        .place(correct, SlotRef::new(0, CardKind::Joint))
        .expect("correct placement");
    board
        .place(misplaced, SlotRef::new(0, CardKind::Function))
        .expect("wrong placement");

    let first = board.validate_and_lock();
    assert_eq!(first.total_slots, 4);
    assert_eq!(first.newly_correct, 1);
    assert_eq!(first.newly_incorrect, 1);
    assert_eq!(first.locked_total, 1);

    let second = board.validate_and_lock();
    assert_eq!(second.newly_correct, 0);
    assert_eq!(second.newly_incorrect, 1);
    assert_eq!(second.locked_total, 1);
    assert!(board.slot(SlotRef::new(0, CardKind::Joint)).expect("slot").locked);
    assert!(!board.slot(SlotRef::new(0, CardKind::Function)).expect("slot").locked);
}

#[test]
fn unknown_ids_are_rejected_without_effect() {
    let mut board = build_board(2, 2);
    assert_eq!(
        board.place(99, SlotRef::new(0, CardKind::Joint)),
        Err(PlaceError::UnknownCard)
    );
    assert_eq!(
        board.place(0, SlotRef::new(7, CardKind::Joint)),
        Err(PlaceError::UnknownSlot)
    );
    assert_eq!(
        board.remove(SlotRef::new(7, CardKind::Function)),
        Err(PlaceError::UnknownSlot)
    );
    for row in 0..2 {
        for kind in [CardKind::Joint, CardKind::Function] {
            assert_eq!(
                board.slot(SlotRef::new(row, kind)).expect("slot").occupant,
                None
            );
        }
    }
}

#[test]
fn reset_clears_occupants_and_locks() {
    let mut board = build_board(2, 6);
    let correct = card_of(&board, CardKind::Joint, 0);
    let wrong = card_of(&board, CardKind::Function, 1);
    board
        .place(correct, SlotRef::new(0, CardKind::Joint))
        .expect("placement");
    board
        .place(wrong, SlotRef::new(0, CardKind::Function))
        .expect("placement");
    board.validate_and_lock();
    assert_eq!(board.locked_count(), 1);

    board.reset();
    assert_eq!(board.locked_count(), 0);
    assert!(!board.is_complete());
    for row in 0..2 {
        for kind in [CardKind::Joint, CardKind::Function] {
            let state = board.slot(SlotRef::new(row, kind)).expect("slot");
            assert_eq!(state.occupant, None);
            assert!(!state.locked);
        }
    }
}

#[test]
fn all_slots_locked_means_complete() {
    let mut board = build_board(2, 8);
    for owner in 0..2 {
        let joint = card_of(&board, CardKind::Joint, owner);
        let function = card_of(&board, CardKind::Function, owner);
        board
            .place(joint, SlotRef::new(owner, CardKind::Joint))
            .expect("joint placement");
        board
            .place(function, SlotRef::new(owner, CardKind::Function))
            .expect("function placement");
    }
    assert!(!board.is_complete());
    let summary = board.validate_and_lock();
    assert_eq!(summary.newly_correct, 4);
    assert_eq!(summary.locked_total, 4);
    assert!(board.is_complete());
}

#[test]
fn empty_board_is_never_complete() {
    let board = Board::new(0, Vec::new());
    assert!(!board.is_complete());
}
