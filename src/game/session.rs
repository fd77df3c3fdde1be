//! The turn/card coordinator.
//!
//! `Game` owns the board, the dragons and the chit cards, and turns card
//! reveals into movements. Per reveal:
//!
//! 1. the card is flipped face up;
//! 2. the current player's dragons standing on a matching animal are
//!    collected (pirate and spirit cards match every dragon);
//! 3. with no eligible dragon the turn ends; otherwise a [`DragonPicker`]
//!    chooses one and the card's rule is resolved and executed;
//! 4. a win stops the game, and an ended turn, or a table with every card
//!    face up, passes play to the next seat with all cards turned back down.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::picker::{DragonPicker, FirstEligible};
use crate::board::{home_cave, Board, Dragon, DragonId, Position};
use crate::cards::{shuffled_deck, ChitCard};
use crate::core::{ConfigError, GameConfig, GameError, PlayerId, PlayerMap};
use crate::movement::{MoveOutcome, Movement};

/// Dragons eligible for a card. Players rarely own more than a few.
pub type Eligible = SmallVec<[DragonId; 4]>;

/// Result of revealing one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Who revealed the card.
    pub player: PlayerId,
    pub card_index: usize,
    pub card: ChitCard,
    /// The executed movement, or `None` when no dragon could act.
    pub movement: Option<MoveOutcome>,
    pub turn_ended: bool,
    pub game_ended: bool,
    /// Whose turn it is after this reveal.
    pub next_player: PlayerId,
}

impl TurnOutcome {
    /// The dragon that acted, if any.
    #[must_use]
    pub fn dragon(&self) -> Option<DragonId> {
        self.movement.map(|m| m.dragon)
    }

    #[must_use]
    pub fn from(&self) -> Option<Position> {
        self.movement.and_then(|m| m.from)
    }

    /// Where the acting dragon ended up; `None` when nothing moved.
    #[must_use]
    pub fn destination(&self) -> Option<Position> {
        self.movement.and_then(|m| m.destination)
    }
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) dragons: Vec<Dragon>,
    pub(super) seats: PlayerMap<SmallVec<[DragonId; 2]>>,
    pub(super) cards: Vec<ChitCard>,
    pub(super) current_player: PlayerId,
    pub(super) cards_revealed: usize,
    pub(super) winner: Option<DragonId>,
    pub(super) history: Vector<TurnOutcome>,
}

impl Game {
    /// Validate `config`, lay out the board and deck, and put every dragon
    /// in its home cave.
    #[instrument(skip(config), fields(seed = config.seed, players = config.player_count))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Board::new(&config)?;

        let dragon_count = config.dragon_count();
        let mut dragons = Vec::with_capacity(dragon_count);
        let seats: PlayerMap<SmallVec<[DragonId; 2]>> = PlayerMap::new(config.player_count, |seat| {
            (0..config.dragons_per_player)
                .map(|k| DragonId((seat.index() * config.dragons_per_player + k) as u32))
                .collect()
        });
        for (seat, ids) in seats.iter() {
            for &id in ids {
                let home = home_cave(id.index(), &config);
                let mut dragon = Dragon::new(id, seat, home, config.initial_remaining_steps());
                dragon.move_to(Position::Cave(home), &mut board);
                dragons.push(dragon);
            }
        }

        let cards = shuffled_deck(config.seed);
        info!(dragons = dragon_count, caves = board.caves().len(), "game created");

        Ok(Self {
            config,
            board,
            dragons,
            seats,
            cards,
            current_player: PlayerId(0),
            cards_revealed: 0,
            winner: None,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dragons(&self) -> &[Dragon] {
        &self.dragons
    }

    #[must_use]
    pub fn dragon(&self, id: DragonId) -> Option<&Dragon> {
        self.dragons.get(id.index())
    }

    /// Dragons owned by `player`.
    #[must_use]
    pub fn player_dragons(&self, player: PlayerId) -> &[DragonId] {
        &self.seats[player]
    }

    #[must_use]
    pub fn cards(&self) -> &[ChitCard] {
        &self.cards
    }

    /// Indices of cards still face down.
    pub fn face_down(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_revealed())
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Cards revealed so far this turn.
    #[must_use]
    pub fn cards_revealed(&self) -> usize {
        self.cards_revealed
    }

    /// The dragon that reached home, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<DragonId> {
        self.winner
    }

    #[must_use]
    pub fn winning_player(&self) -> Option<PlayerId> {
        self.winner
            .and_then(|id| self.dragon(id))
            .map(Dragon::owner)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every reveal so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnOutcome> {
        &self.history
    }

    /// The current player's dragons that may act on the card at `index`.
    pub fn eligible_dragons(&self, index: usize) -> Result<Eligible, GameError> {
        let card = self.card(index)?;
        Ok(self.eligible_for(card))
    }

    fn eligible_for(&self, card: &ChitCard) -> Eligible {
        self.seats[self.current_player]
            .iter()
            .copied()
            .filter(|&id| {
                self.dragons[id.index()]
                    .position()
                    .is_some_and(|pos| card.matches(self.board.animal_at(pos)))
            })
            .collect()
    }

    fn card(&self, index: usize) -> Result<&ChitCard, GameError> {
        self.cards.get(index).ok_or(GameError::CardOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Reveal the card at `index`, moving the first eligible dragon.
    pub fn reveal(&mut self, index: usize) -> Result<TurnOutcome, GameError> {
        self.reveal_with(index, &mut FirstEligible)
    }

    /// Reveal the card at `index`, letting `picker` choose the dragon.
    #[instrument(skip(self, picker), fields(player = %self.current_player))]
    pub fn reveal_with<P>(&mut self, index: usize, picker: &mut P) -> Result<TurnOutcome, GameError>
    where
        P: DragonPicker + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.card(index)?.is_revealed() {
            return Err(GameError::AlreadyRevealed(index));
        }

        self.cards[index].reveal();
        self.cards_revealed += 1;
        let card = self.cards[index];
        let player = self.current_player;

        let eligible = self.eligible_for(&card);
        let chosen = if eligible.is_empty() {
            None
        } else {
            picker.pick(&eligible).filter(|id| eligible.contains(id))
        };
        debug!(%card, eligible = eligible.len(), chosen = ?chosen, "card revealed");

        let movement = chosen.map(|id| self.apply(&card, id));
        let (turn_ended, game_ended) = movement.map_or((true, false), |m| (m.end_turn, m.end_game));

        if game_ended {
            self.winner = chosen;
            info!(winner = ?chosen, %player, "game over");
        } else if turn_ended || self.cards_revealed >= self.cards.len() {
            self.pass_turn();
        }

        let outcome = TurnOutcome {
            player,
            card_index: index,
            card,
            movement,
            turn_ended,
            game_ended,
            next_player: self.current_player,
        };
        self.history.push_back(outcome);
        Ok(outcome)
    }

    /// What revealing the card at `index` would do, without changing this
    /// game.
    pub fn preview(&self, index: usize) -> Result<TurnOutcome, GameError> {
        self.clone().reveal(index)
    }

    fn apply(&mut self, card: &ChitCard, id: DragonId) -> MoveOutcome {
        let rule = card.rule(self.config.penalty_rule);
        let dragon = &mut self.dragons[id.index()];
        Movement::resolve(rule, dragon, card.value(), &self.board).execute(dragon, &mut self.board)
    }

    fn pass_turn(&mut self) {
        self.current_player = self.current_player.next(self.config.player_count);
        self.cards_revealed = 0;
        for card in &mut self.cards {
            card.hide();
        }
        info!(next = %self.current_player, "turn passed");
    }
}
