//! Game flow tests.
//!
//! These tests drive whole games through `Game::play_turn`:
//! - Starting hands, turn order and passing
//! - Round scoring, run-again politicians and round openers
//! - Match results, early endings and deterministic replay

use politics_ccg::board::Position;
use politics_ccg::cards::{Card, CardInfo, CardLibrary, HookKind, PoliticianCard};
use politics_ccg::core::{GameConfig, GameError, Seat, TurnAction};
use politics_ccg::effects::{Effect, Target};
use politics_ccg::game::{Game, GameBuilder, Phase};
use politics_ccg::rules::GameResult;
use politics_ccg::zones::CardZone;

const CONTENT: &str = r#"[
    {"type": "politician", "name": "senator", "print_name": "Senator", "power": 3,
     "factions": ["democrats"]},
    {"type": "politician", "name": "organizer", "print_name": "Organizer", "power": 1,
     "momentum": 2, "run_again": true},
    {"type": "politician", "name": "spin_doctor", "print_name": "Spin Doctor", "power": 0,
     "operative": true,
     "hooks": {"permanent": {"modify_power": {"target": "friendly_neighbors", "delta": 1}}}},
    {"type": "politician", "name": "centrist", "print_name": "Centrist", "power": 2,
     "allowed_positions": ["Center"]},
    {"type": "action", "name": "attack_ad", "print_name": "Attack Ad",
     "effect": {"modify_power": {"target": "opponent_row", "delta": -1}}}
]"#;

const DECK: &[(&str, usize)] = &[
    ("senator", 4),
    ("organizer", 3),
    ("spin_doctor", 2),
    ("centrist", 3),
    ("attack_ad", 3),
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_game(seed: u64) -> Game {
    let library = CardLibrary::from_json(CONTENT).unwrap();
    GameBuilder::new()
        .player(Seat::One, "Alice", library.build_deck(DECK).unwrap())
        .player(Seat::Two, "Bob", library.build_deck(DECK).unwrap())
        .config(GameConfig::default().with_seed(seed))
        .build()
        .unwrap()
}

fn empty_game(seed: u64) -> Game {
    let config = GameConfig::default().with_seed(seed).with_starting_hand_size(0);
    let mut game = Game::new("Alice", "Bob", config).unwrap();
    game.start().unwrap();
    game
}

fn politician(name: &str, politician: PoliticianCard) -> Card {
    Card::politician(CardInfo::new(name.to_lowercase(), name), politician)
}

/// Pick the next action: play an action card, else place the first
/// politician that fits a free slot, else pass. Passes after six actions in
/// a round so every round ends.
fn choose_action(game: &Game) -> TurnAction {
    let seat = game.active_player();
    let player = game.player(seat);

    let acted = game
        .history()
        .iter()
        .filter(|r| r.seat == seat && r.round == game.round())
        .count();
    if acted >= 6 {
        return TurnAction::Pass;
    }

    for card in player.hand().cards() {
        let Some(politician) = card.as_politician() else {
            return TurnAction::play(card.id());
        };
        let free = game
            .board()
            .row_slots(seat.row())
            .find(|slot| slot.is_empty() && politician.can_occupy(slot.lane()));
        if let Some(slot) = free {
            return TurnAction::play_at(card.id(), slot.position());
        }
    }
    TurnAction::Pass
}

fn play_out(game: &mut Game) -> usize {
    let mut turns = 0;
    while !game.is_over() {
        let seat = game.active_player();
        let action = choose_action(game);
        game.play_turn(seat, action).unwrap();
        turns += 1;
        assert!(turns < 500, "game did not terminate");
    }
    turns
}

#[test]
fn test_start_deals_hands() {
    init_tracing();
    let mut game = build_game(1);
    assert_eq!(game.phase(), Phase::Setup);

    game.start().unwrap();

    let active = game.active_player();
    // The active player has already drawn for their first turn.
    assert_eq!(game.player(active).hand().count(), 6);
    assert_eq!(game.player(active.opponent()).hand().count(), 5);
    assert_eq!(game.player(active).deck().count(), 9);
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn test_full_game_reaches_result() {
    init_tracing();
    let mut game = build_game(2024);
    game.start().unwrap();

    let turns = play_out(&mut game);

    assert!(turns > 2);
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.history().len(), turns);
    let rounds = game.round_results().len();
    assert!((2..=3).contains(&rounds));

    let result = game.result().unwrap();
    assert_eq!(game.check_victory(), Some(result));
    if let GameResult::Winner(seat) = result {
        assert!(game.round_wins(seat) > game.round_wins(seat.opponent()));
    }
    assert_eq!(game.play_turn(game.active_player(), TurnAction::Pass).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_same_seed_replays_game() {
    let mut a = build_game(77);
    let mut b = build_game(77);
    a.start().unwrap();
    b.start().unwrap();

    let turns_a = play_out(&mut a);
    let turns_b = play_out(&mut b);

    assert_eq!(turns_a, turns_b);
    assert_eq!(a.round_results(), b.round_results());
    assert_eq!(a.result(), b.result());
    let names = |game: &Game, seat: Seat| -> Vec<String> {
        game.player(seat)
            .hand()
            .cards()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    };
    assert_eq!(names(&a, Seat::One), names(&b, Seat::One));
    assert_eq!(names(&a, Seat::Two), names(&b, Seat::Two));
}

#[test]
fn test_round_scoring_and_run_again() {
    let mut game = empty_game(5);
    let organizer = politician("Organizer", PoliticianCard::new(1).with_momentum(2).with_run_again(true));
    let organizer_id = organizer.id();
    let senator = politician("Senator", PoliticianCard::new(3));
    let senator_id = senator.id();
    game.board_mut().add_card(1, 1, organizer).unwrap();
    game.board_mut().add_card(2, 5, senator).unwrap();

    let first = game.active_player();
    game.play_turn(first, TurnAction::Pass).unwrap();
    let outcome = game.play_turn(first.opponent(), TurnAction::Pass).unwrap();

    let round = outcome.round_result.unwrap();
    assert_eq!(round.scores[Seat::One], 1);
    assert_eq!(round.scores[Seat::Two], 3);
    assert_eq!(round.winner, Some(Seat::Two));
    assert_eq!(game.round_wins(Seat::Two), 1);

    // The organizer runs again with its momentum added.
    let stayed = game.board().slot(1, 1).unwrap().card().unwrap();
    assert_eq!(stayed.id(), organizer_id);
    assert_eq!(stayed.as_politician().unwrap().power, 3);
    assert!(game.player(Seat::Two).retirement_area().contains(senator_id));

    // The round loser opens the next round.
    assert_eq!(outcome.next_player, Some(Seat::One));
    assert_eq!(game.round(), 2);
}

#[test]
fn test_ties_award_both_and_can_draw() {
    let mut game = empty_game(9);
    let opener = game.active_player();

    game.play_turn(opener, TurnAction::Pass).unwrap();
    let outcome = game.play_turn(opener.opponent(), TurnAction::Pass).unwrap();
    assert_eq!(outcome.round_result.unwrap().winner, None);
    assert_eq!(game.round_wins(Seat::One), 1);
    assert_eq!(game.round_wins(Seat::Two), 1);

    // After a tie the seat that did not open starts.
    let second_opener = outcome.next_player.unwrap();
    assert_eq!(second_opener, opener.opponent());

    game.play_turn(second_opener, TurnAction::Pass).unwrap();
    let outcome = game.play_turn(opener, TurnAction::Pass).unwrap();

    assert_eq!(outcome.game_result, Some(GameResult::Draw));
    assert_eq!(outcome.next_player, None);
    assert!(game.is_over());
}

#[test]
fn test_end_game_early() {
    let mut game = empty_game(3);
    assert_eq!(game.end_game(), GameResult::Draw);
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.start().unwrap_err(), GameError::GameOver);

    let mut game = empty_game(3);
    game.board_mut().add_card(2, 2, politician("Mayor", PoliticianCard::new(1))).unwrap();
    let first = game.active_player();
    game.play_turn(first, TurnAction::Pass).unwrap();
    game.play_turn(first.opponent(), TurnAction::Pass).unwrap();

    assert_eq!(game.check_victory(), None);
    assert_eq!(game.end_game(), GameResult::Winner(Seat::Two));
    assert_eq!(game.end_game(), GameResult::Winner(Seat::Two));
}

#[test]
fn test_permanent_hook_fires_at_turn_start() {
    let mut game = empty_game(12);
    let first = game.active_player();
    let second = first.opponent();
    let row = second.row();

    let doctor = politician(
        "Spin Doctor",
        PoliticianCard::new(0)
            .with_operative(true)
            .with_hook(HookKind::Permanent, Effect::modify_power(Target::FriendlyNeighbors, 1)),
    );
    game.board_mut().add_card(row, 2, doctor).unwrap();
    game.board_mut().add_card(row, 1, politician("Friend", PoliticianCard::new(1))).unwrap();

    game.play_turn(first, TurnAction::Pass).unwrap();

    let friend = game.board().slot(row, 1).unwrap().card().unwrap();
    assert_eq!(friend.as_politician().unwrap().power, 2);
}

#[test]
fn test_end_of_turn_hook_can_defeat() {
    let config = GameConfig::default().with_seed(4).with_starting_hand_size(0);
    let mut game = Game::new("Alice", "Bob", config).unwrap();
    let seat = game.active_player();
    let burnout = politician(
        "Burnout",
        PoliticianCard::new(1).with_hook(HookKind::EndOfTurn, Effect::modify_power(Target::Source, -2)),
    );
    let id = burnout.id();
    game.player_mut(seat).deck_mut().add_card(burnout);
    game.start().unwrap();
    assert!(game.player(seat).hand().contains(id));

    let position = Position::new(seat.row(), 5).unwrap();
    game.play_turn(seat, TurnAction::play_at(id, position)).unwrap();

    assert!(game.board().is_available(seat.row(), 5));
    assert!(game.player(seat).retirement_area().contains(id));
}

#[test]
fn test_illegal_turns_change_nothing() {
    let mut game = build_game(6);
    let seat = game.active_player();
    assert_eq!(game.play_turn(seat, TurnAction::Pass).unwrap_err(), GameError::GameNotStarted);
    game.start().unwrap();

    let other = seat.opponent();
    let their_card = game.player(other).hand().card_ids()[0];
    assert_eq!(
        game.play_turn(other, TurnAction::retire(their_card)).unwrap_err(),
        GameError::NotYourTurn(other)
    );
    assert_eq!(
        game.play_turn(seat, TurnAction::retire(their_card)).unwrap_err(),
        GameError::CardNotInHand(their_card)
    );
    assert!(game.history().is_empty());
    assert_eq!(game.turn(), 1);
    assert_eq!(game.active_player(), seat);
}

#[test]
fn test_game_snapshot_round_trip() {
    let mut game = build_game(31);
    game.start().unwrap();
    for _ in 0..4 {
        let seat = game.active_player();
        let action = choose_action(&game);
        game.play_turn(seat, action).unwrap();
    }

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.active_player(), game.active_player());
    assert_eq!(restored.history(), game.history());
    assert_eq!(
        restored.player(Seat::One).hand().card_ids(),
        game.player(Seat::One).hand().card_ids()
    );
}
