//! The game engine: canonical state plus the command surface.
//!
//! ## Phases
//!
//! `Dealing` (only inside `init`) → `Playing` → `Won`. Once won, every
//! command except `init` is refused and `tick` stops counting.
//!
//! ## Commands
//!
//! - `init` / `init_with_seed`: shuffle, deal, reset counters and history
//! - `draw`: stock to waste, or recycle the waste when the stock is empty
//! - `move_cards` / `move_card`: validated transfer between piles
//! - `undo`: restore the state before the last applied command
//! - `tick`: one second of play time
//!
//! Every applied command snapshots the prior state first, re-checks the
//! 52-card invariant in debug builds, and notifies observers.
//!
//! ## Draw guard
//!
//! A successful draw raises a debounce flag. While it is up, further
//! draws are dropped. The caller's timer lowers it with
//! `release_draw_guard` after `EngineConfig::draw_debounce`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, error, info};

use crate::cards::DeckFactory;
use crate::core::{
    Card, CardId, CardLocation, Destination, EngineConfig, EngineError, GameState, MoveRequest,
    Source,
};
use crate::history::HistoryManager;
use crate::rules::{self, RejectReason};
use crate::scoring::{ScoreDisplay, ScoringService};

use super::observer::GameObserver;
use super::view::{EngineStatus, RenderSnapshot};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Dealing,
    Playing,
    Won,
}

/// Result of `draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A card moved from the stock to the waste.
    Drew(CardId),
    /// The waste was turned over into an empty stock.
    Recycled { cards: usize },
    /// Stock and waste are both empty; nothing happened.
    Empty,
    /// Dropped: the draw guard is up.
    Busy,
    /// Refused: the game is won.
    GameOver,
}

impl DrawOutcome {
    /// Whether the state changed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, DrawOutcome::Drew(_) | DrawOutcome::Recycled { .. })
    }
}

/// Result of a move command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Applied {
        /// Raw points earned by this move.
        points: u32,
        /// Tableau card flipped face-up by the move.
        revealed: Option<CardId>,
        /// This move completed the foundations.
        won: bool,
    },
    Rejected(RejectReason),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Result of `undo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoOutcome {
    Restored,
    NothingToUndo,
    GameOver,
}

/// Authoritative Klondike game.
///
/// ```
/// use klondike_engine::{DrawOutcome, EngineConfig, GameEngine, GamePhase};
///
/// let mut engine = GameEngine::new(EngineConfig::default().with_seed(7));
/// assert_eq!(engine.phase(), GamePhase::Playing);
/// assert_eq!(engine.state().stock().len(), 24);
///
/// assert!(matches!(engine.draw(), DrawOutcome::Drew(_)));
/// assert_eq!(engine.draw(), DrawOutcome::Busy);
///
/// engine.release_draw_guard();
/// assert!(engine.draw().is_applied());
/// ```
pub struct GameEngine {
    config: EngineConfig,
    deck: DeckFactory,
    scoring: ScoringService,
    state: GameState,
    history: HistoryManager,
    phase: GamePhase,
    busy: bool,
    /// Cards turned face-up by the last applied command.
    revealed: SmallVec<[CardId; 2]>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine and deal the first game.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut deck = match config.seed {
            Some(seed) => DeckFactory::new(seed),
            None => DeckFactory::from_entropy(),
        };
        let state = deal(&mut deck);
        let mut engine = Self::assemble(config, deck, state, GamePhase::Playing);
        engine.log_deal();
        engine
    }

    /// Create an engine that continues from an existing position.
    ///
    /// Counters are kept as they are in `state`. The history starts empty.
    /// A position with complete foundations starts in `Won`.
    pub fn from_state(state: GameState, config: EngineConfig) -> Result<Self, EngineError> {
        state.check_integrity()?;
        let deck = match config.seed {
            Some(seed) => DeckFactory::new(seed),
            None => DeckFactory::from_entropy(),
        };
        let phase = if rules::is_won(&state) {
            GamePhase::Won
        } else {
            GamePhase::Playing
        };
        Ok(Self::assemble(config, deck, state, phase))
    }

    fn assemble(config: EngineConfig, deck: DeckFactory, state: GameState, phase: GamePhase) -> Self {
        Self {
            scoring: ScoringService::new(config.scoring),
            config,
            deck,
            state,
            history: HistoryManager::new(),
            phase,
            busy: false,
            revealed: SmallVec::new(),
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the deal sequence. Replaying it with `init_with_seed`
    /// reproduces the first deal made from it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    /// Whether the draw guard is up.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.phase == GamePhase::Playing && !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cards turned face-up by the last applied command.
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    #[must_use]
    pub fn score_display(&self) -> ScoreDisplay {
        self.scoring.project(&self.state)
    }

    /// Build the view projection of the current state.
    #[must_use]
    pub fn render(&self) -> RenderSnapshot {
        let status = EngineStatus {
            revealed: &self.revealed,
            phase: self.phase,
            can_undo: self.can_undo(),
            busy: self.busy,
            waste_display_count: self.config.waste_display_count,
        };
        RenderSnapshot::build(&self.state, self.score_display(), status)
    }

    /// Every move currently legal. Empty once the game is won.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        rules::legal_moves(&self.state)
    }

    /// Register an observer for state changes.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: GameObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    // === Commands ===

    /// Shuffle and deal a new game, discarding the current one.
    pub fn init(&mut self) {
        self.phase = GamePhase::Dealing;
        self.state = deal(&mut self.deck);
        self.history.clear();
        self.revealed.clear();
        self.busy = false;
        self.phase = GamePhase::Playing;
        self.log_deal();
        self.commit();
    }

    /// Reseed the deal sequence, then `init`.
    pub fn init_with_seed(&mut self, seed: u64) {
        self.deck.reseed(seed);
        self.init();
    }

    /// Turn over the next stock card, or recycle the waste.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.phase != GamePhase::Playing {
            return DrawOutcome::GameOver;
        }
        if self.busy {
            debug!("draw dropped: draw guard is up");
            return DrawOutcome::Busy;
        }

        let outcome = if let Some(card) = self.state.stock().back().copied() {
            self.history.save(&self.state);
            self.revealed.clear();
            self.state.stock_mut().pop_back();
            self.state.waste_mut().push_back(card.turned_up());
            self.revealed.push(card.id());
            DrawOutcome::Drew(card.id())
        } else if !self.state.waste().is_empty() {
            self.history.save(&self.state);
            self.revealed.clear();
            let recycled: im::Vector<Card> =
                self.state.waste().iter().rev().map(|c| c.turned_down()).collect();
            let cards = recycled.len();
            *self.state.stock_mut() = recycled;
            self.state.waste_mut().clear();
            self.state.recycle_count += 1;
            DrawOutcome::Recycled { cards }
        } else {
            return DrawOutcome::Empty;
        };

        self.busy = true;
        debug!(?outcome, stock = self.state.stock().len(), waste = self.state.waste().len(), "draw");
        self.commit();
        outcome
    }

    /// Lower the draw guard.
    pub fn release_draw_guard(&mut self) {
        self.busy = false;
    }

    /// Validate and apply a move.
    pub fn move_cards(&mut self, request: MoveRequest) -> MoveOutcome {
        if self.phase != GamePhase::Playing {
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        let lift = match rules::validate(&self.state, &request) {
            Ok(lift) => lift,
            Err(reason) => {
                debug!(%request, %reason, "move rejected");
                return MoveOutcome::Rejected(reason);
            }
        };

        self.history.save(&self.state);
        self.revealed.clear();

        let mut flipped = None;
        match request.source {
            Source::Waste => {
                self.state.waste_mut().pop_back();
            }
            Source::Tableau { column, depth } => {
                if let Some(pile) = self.state.tableau_mut(column) {
                    pile.truncate(depth);
                    if let Some(top) = pile.back_mut() {
                        if !top.face_up {
                            top.face_up = true;
                            flipped = Some(top.id());
                        }
                    }
                }
            }
        }

        match request.destination {
            Destination::Tableau(column) => {
                if let Some(pile) = self.state.tableau_mut(column) {
                    pile.extend(lift.cards.iter().copied());
                }
            }
            Destination::Foundation(suit) => {
                self.state.foundation_mut(suit).push_back(*lift.lead());
            }
        }

        let points = self
            .scoring
            .move_points(request.is_from_waste(), flipped.is_some(), request.is_to_foundation());
        self.state.score += points;
        self.revealed.extend(flipped);

        let won = request.is_to_foundation() && rules::is_won(&self.state);
        if won {
            self.phase = GamePhase::Won;
            info!(
                score = self.score_display().score,
                elapsed_seconds = self.state.elapsed_seconds,
                "game won"
            );
        }

        debug!(%request, cards = lift.cards.len(), points, "move applied");
        self.commit();
        MoveOutcome::Applied {
            points,
            revealed: flipped,
            won,
        }
    }

    /// Move the card `id` (and any cards above it) to `destination`.
    ///
    /// Only the waste top and face-up tableau cards are playable; other
    /// locations are rejected with `NotPlayable`. Fails if `id` does not
    /// name one of the 52 cards.
    pub fn move_card(
        &mut self,
        id: CardId,
        destination: Destination,
    ) -> Result<MoveOutcome, EngineError> {
        if !id.is_valid() {
            return Err(EngineError::UnknownCard(id));
        }
        let location = self
            .state
            .locate(id)
            .ok_or(EngineError::MissingCard { card: id })?;

        let source = match location {
            CardLocation::Waste { index } if index + 1 == self.state.waste().len() => Source::Waste,
            CardLocation::Tableau { column, index } => Source::Tableau {
                column,
                depth: index,
            },
            _ => {
                debug!(card = %id, ?location, "move rejected: card not playable");
                return Ok(MoveOutcome::Rejected(RejectReason::NotPlayable));
            }
        };
        Ok(self.move_cards(MoveRequest::new(source, destination)))
    }

    /// Restore the state before the last applied command.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.phase != GamePhase::Playing {
            return UndoOutcome::GameOver;
        }
        match self.history.undo() {
            Some(previous) => {
                self.state = previous;
                self.revealed.clear();
                debug!(remaining = self.history.len(), "undo");
                self.commit();
                UndoOutcome::Restored
            }
            None => {
                debug!("nothing to undo");
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Count one second of play. Ignored unless `Playing`.
    ///
    /// Returns whether the second was counted.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.revealed.clear();
        self.state.elapsed_seconds += 1;
        self.commit();
        true
    }

    // === Internals ===

    fn log_deal(&self) {
        info!(seed = self.deck.seed(), "new deal");
    }

    /// Check the card invariant (debug builds) and notify observers.
    fn commit(&mut self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.state.check_integrity() {
                invariant_violated(err);
            }
        }
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.render();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}

fn deal(deck: &mut DeckFactory) -> GameState {
    GameState::deal(deck.create_deck()).unwrap_or_else(|err| invariant_violated(err))
}

fn invariant_violated(err: EngineError) -> ! {
    error!(%err, "engine invariant violated");
    panic!("{err}");
}
