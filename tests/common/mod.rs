//! Shared helpers for integration tests.
//!
//! - `init_logging`: idempotent tracing setup (`TEST_LOG`, then `RUST_LOG`, default `warn`)
//! - Position builders: lay out the piles you care about, the rest of the
//!   deck goes face-down into the stock

#![allow(dead_code)]

use klondike_engine::cards::standard_deck;
use klondike_engine::core::{Card, CardId, GameState, Rank, Suit};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests. Safe to call from every test.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
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

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Face-up foundation pile from Ace through `rank`.
pub fn foundation_through(suit: Suit, rank: Rank) -> Vec<Card> {
    Rank::ALL[..=rank.index()]
        .iter()
        .map(|&r| up(suit, r))
        .collect()
}

/// Build a legal position.
///
/// Every card not placed in `tableau`, `waste` or `foundations` ends up
/// face-down in the stock in suit-major order (so the stock top is the
/// highest remaining spade).
pub fn position(
    tableau: [Vec<Card>; 7],
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
) -> GameState {
    let used: FxHashSet<CardId> = tableau
        .iter()
        .flatten()
        .chain(waste.iter())
        .chain(foundations.iter().flatten())
        .map(Card::id)
        .collect();

    let stock: Vec<Card> = standard_deck()
        .into_iter()
        .filter(|c| !used.contains(&c.id()))
        .collect();

    GameState::from_piles(stock, waste, foundations, tableau).expect("fixture must hold 52 cards")
}

/// Position with only the tableau laid out.
pub fn tableau_position(tableau: [Vec<Card>; 7]) -> GameState {
    position(tableau, Vec::new(), Default::default())
}

/// Position one move from winning: every foundation complete except the
/// King of spades, which sits face-up alone in column 0.
pub fn one_move_from_win() -> GameState {
    let foundations = [
        foundation_through(Suit::Hearts, Rank::King),
        foundation_through(Suit::Diamonds, Rank::King),
        foundation_through(Suit::Clubs, Rank::King),
        foundation_through(Suit::Spades, Rank::Queen),
    ];
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0].push(up(Suit::Spades, Rank::King));
    position(tableau, Vec::new(), foundations)
}

/// Every card id across all piles, sorted.
pub fn all_ids(state: &GameState) -> Vec<CardId> {
    let mut ids: Vec<CardId> = state.all_cards().map(Card::id).collect();
    ids.sort_unstable();
    ids
}
