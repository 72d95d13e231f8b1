//! Scoring and victory rules.
//!
//! A round is scored by summing the power of every non-operative politician
//! in each player's row. The higher row wins the round; a tie counts as a
//! win for both. The match goes to the first player to reach the configured
//! number of round wins.

pub mod victory;

pub use victory::{by_round_wins, decide, round_winner, row_score, score_rows, GameResult, RoundResult};
