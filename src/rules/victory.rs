//! Round scoring and match decisions.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameConfig, Seat, SeatMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner(seat) => Some(*seat),
            GameResult::Draw => None,
        }
    }
}

/// Outcome of one scored round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,

    /// Row score of each seat.
    pub scores: SeatMap<i64>,

    /// `None` on a tie.
    pub winner: Option<Seat>,
}

/// Total scoring power in `seat`'s row. Operatives count zero.
#[must_use]
pub fn row_score(board: &Board, seat: Seat) -> i64 {
    board.row_power(seat.row())
}

/// Row scores for both seats.
#[must_use]
pub fn score_rows(board: &Board) -> SeatMap<i64> {
    SeatMap::new(|seat| row_score(board, seat))
}

/// The seat with the strictly higher score, or `None` on a tie.
#[must_use]
pub fn round_winner(scores: &SeatMap<i64>) -> Option<Seat> {
    match scores[Seat::One].cmp(&scores[Seat::Two]) {
        std::cmp::Ordering::Greater => Some(Seat::One),
        std::cmp::Ordering::Less => Some(Seat::Two),
        std::cmp::Ordering::Equal => None,
    }
}

/// Whoever holds more round wins; equal counts are a draw.
#[must_use]
pub fn by_round_wins(round_wins: &SeatMap<u32>) -> GameResult {
    match round_winner(&SeatMap::new(|seat| i64::from(round_wins[seat]))) {
        Some(seat) => GameResult::Winner(seat),
        None => GameResult::Draw,
    }
}

/// Decide the match, or `None` if it goes on.
///
/// Reaching `rounds_to_win` wins; both seats reaching it together is a draw.
/// Once `max_rounds` rounds are played the round-win count decides.
#[must_use]
pub fn decide(round_wins: &SeatMap<u32>, rounds_played: u32, config: &GameConfig) -> Option<GameResult> {
    let reached = |seat: Seat| round_wins[seat] >= config.rounds_to_win;
    match (reached(Seat::One), reached(Seat::Two)) {
        (true, true) => Some(GameResult::Draw),
        (true, false) => Some(GameResult::Winner(Seat::One)),
        (false, true) => Some(GameResult::Winner(Seat::Two)),
        (false, false) if rounds_played >= config.max_rounds => Some(by_round_wins(round_wins)),
        (false, false) => None,
    }
}
