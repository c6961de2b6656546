//! Shared helpers for integration tests.
#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use aces_up::core::standard_cards;
use aces_up::{
    AcesUpRules, Card, GameConfig, GameController, ManualClock, RecordingView, Table, STACK_COUNT,
};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once. Level from `TEST_LOG`, then
/// `RUST_LOG`, default `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Look up a standard card by its short code, e.g. "10H" or "AS".
pub fn card(code: &str) -> Card {
    standard_cards()
        .into_iter()
        .find(|c| c.to_string() == code)
        .unwrap_or_else(|| panic!("no card {code}"))
}

/// Build a full 52-card position.
///
/// `stacks` and `deck` are bottom to top. Every card not named goes to the
/// discard pile, or to the bottom of the deck when `fill_deck` is set.
pub fn position(stacks: [&[&str]; STACK_COUNT], deck: &[&str], fill_deck: bool) -> Table {
    let piles = stacks.map(|codes| codes.iter().map(|c| card(c)).collect::<Vec<_>>());
    let mut deck: Vec<Card> = deck.iter().map(|c| card(c)).collect();

    let named: Vec<Card> = piles.iter().flatten().chain(deck.iter()).copied().collect();
    let rest: Vec<Card> = standard_cards()
        .into_iter()
        .filter(|c| !named.iter().any(|n| n.same_card(c)))
        .collect();

    let discard = if fill_deck {
        let mut full = rest;
        full.extend(deck);
        deck = full;
        Vec::new()
    } else {
        rest
    };

    Table::from_piles(piles, deck, discard).expect("position must hold 52 cards")
}

pub type TestGame = GameController<RecordingView, ManualClock>;

/// Seeded game with a recording view and a manual clock.
pub fn seeded_game(seed: u64) -> (TestGame, ManualClock) {
    init_logging();
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(seed);
    let game = GameController::new(config, RecordingView::new(), clock.clone()).unwrap();
    (game, clock)
}

/// Game starting from `table`.
pub fn game_at(table: Table) -> (TestGame, ManualClock) {
    init_logging();
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(1).with_hint_duration_ms(1000);
    let game = GameController::with_position(
        config,
        AcesUpRules,
        table,
        RecordingView::new(),
        clock.clone(),
    )
    .unwrap();
    (game, clock)
}

/// Top card code of each stack ("-" when empty).
pub fn tops(game: &TestGame) -> Vec<String> {
    (0..STACK_COUNT)
        .map(|i| {
            game.table()
                .tableau
                .top(i)
                .map_or_else(|| "-".to_string(), ToString::to_string)
        })
        .collect()
}
