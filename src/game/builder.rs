//! Fluent setup of a game before it starts.

use crate::core::{GameConfig, Result, Seat, SeatMap};
use crate::zones::Deck;

use super::engine::Game;

/// Builds a `Game` with names, decks, and config in one expression.
///
/// ```
/// use politics_ccg::cards::{CardInfo, CardKind, CardLibrary, CardSpec, PoliticianCard};
/// use politics_ccg::core::{GameConfig, Seat};
/// use politics_ccg::game::GameBuilder;
///
/// let mut library = CardLibrary::new();
/// library.register(CardSpec::new(
///     CardInfo::new("mayor", "The Mayor"),
///     CardKind::Politician(PoliticianCard::new(2)),
/// )).unwrap();
///
/// let mut game = GameBuilder::new()
///     .player(Seat::One, "Alice", library.build_deck(&[("mayor", 10)]).unwrap())
///     .player(Seat::Two, "Bob", library.build_deck(&[("mayor", 10)]).unwrap())
///     .config(GameConfig::default().with_seed(7))
///     .build()
///     .unwrap();
///
/// game.start().unwrap();
/// assert_eq!(game.player(Seat::Two).name(), "Bob");
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: SeatMap<String>,
    decks: SeatMap<Deck>,
    config: GameConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: SeatMap::new(|seat| format!("Player {}", seat.number())),
            decks: SeatMap::default(),
            config: GameConfig::default(),
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and deck for one seat.
    #[must_use]
    pub fn player(mut self, seat: Seat, name: impl Into<String>, deck: Deck) -> Self {
        self.names[seat] = name.into();
        self.decks[seat] = deck;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Create the game in the setup phase.
    pub fn build(self) -> Result<Game> {
        let Self {
            names,
            decks,
            config,
        } = self;
        let [one, two] = names.into_inner();
        let mut game = Game::new(one, two, config)?;
        let [deck_one, deck_two] = decks.into_inner();
        *game.player_mut(Seat::One).deck_mut() = deck_one;
        *game.player_mut(Seat::Two).deck_mut() = deck_two;
        Ok(game)
    }
}
