//! Property tests for board geometry and card zones.

use proptest::prelude::*;

use politics_ccg::board::{Board, Lane, Position, COLUMNS};
use politics_ccg::cards::{Card, CardInfo, PoliticianCard};
use politics_ccg::core::{GameError, GameRng};
use politics_ccg::zones::{CardZone, Deck};

fn card(power: i32) -> Card {
    Card::politician(CardInfo::new("delegate", "Delegate"), PoliticianCard::new(power))
}

fn expected_lane(row: u8, column: u8) -> Lane {
    match (row, column) {
        (1, 1..=3) | (2, 7..=9) => Lane::Left,
        (_, 4..=6) => Lane::Center,
        _ => Lane::Right,
    }
}

#[test]
fn test_fresh_board_lanes() {
    let board = Board::new();
    assert_eq!(board.slots().count(), 18);
    for slot in board.slots() {
        assert_eq!(slot.lane(), expected_lane(slot.row(), slot.column()));
        assert!(slot.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_lane_mapping(row in 1u8..=2, column in 1u8..=9) {
        let board = Board::new();
        prop_assert_eq!(board.slot(row, column).unwrap().lane(), expected_lane(row, column));
    }

    #[test]
    fn prop_off_board_rejected(row in 0u8..10, column in 0u8..20) {
        prop_assume!(!(1..=2).contains(&row) || !(1..=9).contains(&column));
        let board = Board::new();
        prop_assert_eq!(
            board.slot(row, column).unwrap_err(),
            GameError::InvalidPosition { row, column }
        );
    }

    #[test]
    fn prop_neighbors_clamp(row in 1u8..=2, column in 1u8..=9) {
        let board = Board::new();

        let friendly = board.get_friendly_neighbors(row, column).unwrap();
        let expected = usize::from(column > 1) + usize::from(column < COLUMNS);
        prop_assert_eq!(friendly.len(), expected);
        for slot in &friendly {
            prop_assert_eq!(slot.row(), row);
            prop_assert_eq!(slot.column().abs_diff(column), 1);
        }

        let opponent = board.get_opponent_neighbors(row, column).unwrap();
        prop_assert_eq!(opponent.len(), 1);
        prop_assert_eq!(opponent[0].row(), 3 - row);
        prop_assert_eq!(opponent[0].column(), column);

        let all = board.get_neighbors(row, column).unwrap();
        prop_assert_eq!(all.len(), expected + 1);
    }

    #[test]
    fn prop_add_then_remove(row in 1u8..=2, column in 1u8..=9, power in -5i32..10) {
        let mut board = Board::new();
        let placed = card(power);
        let id = placed.id();

        board.add_card(row, column, placed).unwrap();
        prop_assert!(!board.is_available(row, column));
        prop_assert_eq!(board.find_card(id), Some(Position::new(row, column).unwrap()));
        prop_assert_eq!(
            board.add_card(row, column, card(1)).unwrap_err(),
            GameError::SlotOccupied { row, column }
        );

        prop_assert_eq!(board.remove_card(row, column).unwrap().id(), id);
        prop_assert!(board.is_available(row, column));
        prop_assert_eq!(
            board.remove_card(row, column).unwrap_err(),
            GameError::SlotEmpty { row, column }
        );
    }

    #[test]
    fn prop_shuffle_is_permutation(size in 0usize..40, seed in any::<u64>()) {
        let mut deck: Deck = (0..size).map(|_| card(1)).collect();
        let mut before = deck.card_ids();

        deck.shuffle(&mut GameRng::new(seed));
        let mut after = deck.card_ids();

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_same_seed_same_order(seed in any::<u64>()) {
        let cards: Vec<Card> = (0..12).map(card).collect();
        let mut a = Deck::from(cards.clone());
        let mut b = Deck::from(cards);

        a.shuffle(&mut GameRng::new(seed));
        b.shuffle(&mut GameRng::new(seed));
        prop_assert_eq!(a.card_ids(), b.card_ids());
    }
}

#[test]
fn test_change_slot_value() {
    let mut board = Board::new();
    board.change_slot_value(2, 2, "Center").unwrap();
    assert_eq!(board.slot(2, 2).unwrap().lane(), Lane::Center);

    assert_eq!(
        board.change_slot_value(2, 2, "Middle").unwrap_err(),
        GameError::InvalidLane("Middle".to_string())
    );
    assert_eq!(board.slot(2, 2).unwrap().lane(), Lane::Center);
}
