//! The game engine.
//!
//! `Game` owns the supply, the trash and every `PlayerState`, and drives the
//! turn loop:
//!
//! 1. If the game is terminal, stop.
//! 2. The next seat (round-robin) takes a turn: its turn counter goes up,
//!    a hand is dealt into a fresh `TurnState`, and its strategy is asked
//!    for decisions until it stops or no legal move is left.
//! 3. The final hand goes to that seat's discard pile.
//!
//! Any error aborts the game.
//!
//! A finite hand can still produce an endless turn. A lone village played
//! with an empty deck and discard lands in the discard, is reshuffled and
//! drawn straight back, and can be played again forever.
//! `GameConfig::max_moves_per_turn` cuts such turns off; `play_turn`
//! returns `TurnOutcome::Truncated` and the game keeps a record of every
//! cut turn.

use im::Vector;
use log::{debug, trace, warn};

use crate::cards::CardRegistry;
use crate::core::{
    GameConfig, GameError, GameRng, Move, MoveRecord, PlayerId, PlayerMap, PlayerState, Supply,
    Trash, TurnState,
};
use crate::effects::{MoveContext, MoveResolver};

use super::strategy::{Decision, DecisionView, GameView, Strategy};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several seats tied on score and turns.
    Draw(Vec<PlayerId>),
}

impl GameResult {
    /// Build from a winner set.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Draw(winners)
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw(ps) => ps.contains(&player),
        }
    }

    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Draw(ps) => ps.clone(),
        }
    }
}

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The ending pile (province) ran out.
    EndingPileEmpty,
    /// Enough supply piles ran out.
    PilesExhausted(usize),
    /// Every player reached the turn limit.
    TurnLimit,
}

/// How a single turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The strategy stopped or no legal move was left.
    Completed { moves: u32 },
    /// The move limit ended the turn while legal moves remained.
    Truncated { moves: u32 },
}

impl TurnOutcome {
    /// Moves applied during the turn.
    #[must_use]
    pub fn moves(self) -> u32 {
        match self {
            TurnOutcome::Completed { moves } | TurnOutcome::Truncated { moves } => moves,
        }
    }

    #[must_use]
    pub fn is_truncated(self) -> bool {
        matches!(self, TurnOutcome::Truncated { .. })
    }
}

/// Winners under the `(score, -turns)` ordering.
///
/// Higher score wins; on equal scores fewer turns wins; a full tie on both
/// gives several winners.
///
/// ```
/// use deckbuilder_sim::core::PlayerId;
/// use deckbuilder_sim::rules::winners_from;
///
/// let winners = winners_from(&[(30, 12), (30, 10), (28, 5)]);
/// assert_eq!(winners, vec![PlayerId::new(1)]);
/// ```
#[must_use]
pub fn winners_from(standings: &[(i32, u32)]) -> Vec<PlayerId> {
    let key = |&(score, turns): &(i32, u32)| (score, std::cmp::Reverse(turns));
    let Some(best) = standings.iter().map(key).max() else {
        return Vec::new();
    };

    standings
        .iter()
        .enumerate()
        .filter(|(_, s)| key(s) == best)
        .map(|(i, _)| PlayerId::new(i as u8))
        .collect()
}

/// One game in progress or finished.
#[derive(Clone, Debug)]
pub struct Game<'r> {
    config: GameConfig,
    registry: &'r CardRegistry,
    supply: Supply,
    trash: Trash,
    players: PlayerMap<PlayerState>,
    rng: GameRng,
    current: PlayerId,
    history: Vector<MoveRecord>,
    truncated: Vector<(PlayerId, u32)>,
}

impl<'r> Game<'r> {
    /// Set up a game: build the supply and give each player a fresh
    /// starting pile in their discard.
    pub fn new(config: GameConfig, registry: &'r CardRegistry, seed: u64) -> Result<Self, GameError> {
        config.validate(registry)?;

        let supply = Supply::new(config.supply.piles().iter().copied());
        let players = PlayerMap::new(config.player_count, |_| {
            PlayerState::with_discard(config.starting_cards())
        });

        debug!(
            "new {}-player game, seed {}, {} cards in play",
            config.player_count,
            seed,
            config.total_cards()
        );

        Ok(Self {
            config,
            registry,
            supply,
            trash: Trash::default(),
            players,
            rng: GameRng::new(seed),
            current: PlayerId::new(0),
            history: Vector::new(),
            truncated: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &'r CardRegistry {
        self.registry
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn trash(&self) -> &Trash {
        &self.trash
    }

    #[must_use]
    pub fn player_states(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Seat that plays next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Every move applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Turns cut short by the move limit, as `(seat, turn number)`.
    #[must_use]
    pub fn truncated_turns(&self) -> &Vector<(PlayerId, u32)> {
        &self.truncated
    }

    /// Derive a stream for a strategy from the game seed.
    ///
    /// Forking does not advance the game's own stream, so seeding
    /// strategies this way leaves every shuffle unchanged.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Read-only view for strategies and reports.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            registry: self.registry,
            supply: &self.supply,
            trash: &self.trash,
            players: &self.players,
        }
    }

    /// Cards in supply, owned by players, and trashed.
    ///
    /// Between turns this always equals `config().total_cards()`.
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        let owned: usize = self.players.values().map(PlayerState::card_count).sum();
        self.supply.total() + owned as u64 + self.trash.len() as u64
    }

    // === End of game ===

    /// Why the game is over, or `None` if it continues.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.supply.count(self.config.ending_pile) == 0 {
            return Some(EndReason::EndingPileEmpty);
        }

        let exhausted = self.supply.exhausted_piles();
        if exhausted >= self.config.exhausted_piles_to_end {
            return Some(EndReason::PilesExhausted(exhausted));
        }

        if self.players.values().all(|p| p.num_turns >= self.config.max_turns) {
            return Some(EndReason::TurnLimit);
        }

        None
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.end_reason().is_some()
    }

    /// Current scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<i32> {
        self.view().scores()
    }

    /// Seats with the best `(score, -turns)`.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let standings: Vec<_> = self
            .players
            .values()
            .map(|p| (p.score(self.registry), p.num_turns))
            .collect();
        winners_from(&standings)
    }

    /// The outcome, or `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_terminal()
            .then(|| GameResult::from_winners(self.winners()))
    }

    // === Turn loop ===

    /// Play until the game is terminal.
    ///
    /// `strategies[i]` plays seat `i`.
    pub fn run(&mut self, strategies: &mut [Box<dyn Strategy>]) -> Result<(), GameError> {
        if strategies.len() != self.config.player_count {
            return Err(GameError::InvalidConfig(format!(
                "{} strategies for {} players",
                strategies.len(),
                self.config.player_count
            )));
        }

        while !self.is_terminal() {
            let seat = self.current;
            self.play_turn(strategies[seat.index()].as_mut())?;
        }

        match self.end_reason() {
            Some(EndReason::TurnLimit) => warn!("game stopped at the turn limit"),
            reason => debug!("game over ({:?}), scores {:?}", reason, self.scores()),
        }
        if !self.truncated.is_empty() {
            warn!("{} turns hit the move limit", self.truncated.len());
        }
        Ok(())
    }

    /// Play one turn for the current seat and advance to the next.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<TurnOutcome, GameError> {
        let seat = self.current;
        let state = &mut self.players[seat];
        state.num_turns += 1;
        let turn_number = state.num_turns;
        let hand = state.draw_cards(self.config.hand_size, &mut self.rng)?;

        debug!("{} ({}) turn {}", seat, strategy.name(), turn_number);

        let mut turn = TurnState::deal(hand);
        let mut sequence = 0u32;

        while sequence < self.config.max_moves_per_turn {
            let Some(mv) = self.next_move(strategy, seat, &turn) else {
                break;
            };

            let mut ctx = MoveContext {
                registry: self.registry,
                supply: &mut self.supply,
                trash: &mut self.trash,
                player_id: seat,
                player: &mut self.players[seat],
                rng: &mut self.rng,
            };
            turn = MoveResolver::apply(&mut ctx, &turn, &mv)?;

            self.history.push_back(MoveRecord {
                player: seat,
                turn: turn_number,
                sequence,
                mv,
            });
            sequence += 1;
        }

        let cut = sequence == self.config.max_moves_per_turn && self.has_legal_move(seat, &turn);
        let outcome = if cut {
            warn!("{} turn {} cut off after {} moves", seat, turn_number, sequence);
            self.truncated.push_back((seat, turn_number));
            TurnOutcome::Truncated { moves: sequence }
        } else {
            TurnOutcome::Completed { moves: sequence }
        };

        self.players[seat].discard.extend(turn.hand().iter().copied());
        self.current = seat.next(self.config.player_count);
        Ok(outcome)
    }

    fn decision_view<'a>(&'a self, seat: PlayerId, turn: &'a TurnState) -> DecisionView<'a> {
        DecisionView {
            game: self.view(),
            player_id: seat,
            player: &self.players[seat],
            turn,
        }
    }

    fn has_legal_move(&self, seat: PlayerId, turn: &TurnState) -> bool {
        !self.decision_view(seat, turn).legal_moves().is_empty()
    }

    /// Ask the strategy for its next move, if any move is legal.
    fn next_move(&self, strategy: &mut dyn Strategy, seat: PlayerId, turn: &TurnState) -> Option<Move> {
        let view = self.decision_view(seat, turn);

        if view.legal_moves().is_empty() {
            trace!("{} has no legal moves", seat);
            return None;
        }

        match strategy.decide(&view) {
            Decision::Play(mv) => Some(mv),
            Decision::Done => None,
        }
    }
}

/// Run a standard-catalog game to completion.
///
/// ```
/// use deckbuilder_sim::core::GameConfig;
/// use deckbuilder_sim::rules::run_game;
/// use deckbuilder_sim::strategies::BigMoneyBasic;
///
/// let game = run_game(
///     vec![Box::new(BigMoneyBasic::new(3)), Box::new(BigMoneyBasic::new(3))],
///     GameConfig::new(2),
///     42,
/// )
/// .unwrap();
/// assert!(game.is_terminal());
/// assert!(!game.winners().is_empty());
/// ```
pub fn run_game(
    mut strategies: Vec<Box<dyn Strategy>>,
    config: GameConfig,
    seed: u64,
) -> Result<Game<'static>, GameError> {
    let mut game = Game::new(config, CardRegistry::standard(), seed)?;
    game.run(&mut strategies)?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard::{COPPER, ESTATE, FESTIVAL, PROVINCE, SILVER, VILLAGE};
    use crate::core::{SupplySchedule, Violation};

    /// Buys the first affordable card from a fixed list.
    struct Buyer(Vec<crate::cards::CardId>);

    impl Strategy for Buyer {
        fn name(&self) -> &str {
            "buyer"
        }

        fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
            self.0
                .iter()
                .find(|&&c| view.can_buy(c))
                .map_or(Decision::Done, |&c| Decision::Play(Move::Buy(c)))
        }
    }

    /// Always proposes the same move.
    struct Stubborn(Move);

    impl Strategy for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn decide(&mut self, _view: &DecisionView<'_>) -> Decision {
            Decision::Play(self.0)
        }
    }

    struct Idle;

    impl Strategy for Idle {
        fn name(&self) -> &str {
            "idle"
        }

        fn decide(&mut self, _view: &DecisionView<'_>) -> Decision {
            Decision::Done
        }
    }

    /// Plays the first listed action, otherwise buys copper.
    struct Chainer;

    impl Strategy for Chainer {
        fn name(&self) -> &str {
            "chainer"
        }

        fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
            let moves = view.legal_moves();
            moves
                .iter()
                .find(|mv| !mv.is_buy())
                .or_else(|| moves.iter().find(|&&mv| mv == Move::Buy(COPPER)))
                .map_or(Decision::Done, |&mv| Decision::Play(mv))
        }
    }

    fn boxed(s: impl Strategy + 'static) -> Box<dyn Strategy> {
        Box::new(s)
    }

    #[test]
    fn test_winners_ordering() {
        assert_eq!(winners_from(&[(30, 12), (30, 10), (28, 5)]), vec![PlayerId::new(1)]);
        assert_eq!(
            winners_from(&[(10, 4), (10, 4), (3, 4)]),
            vec![PlayerId::new(0), PlayerId::new(1)]
        );
        assert!(winners_from(&[]).is_empty());
    }

    #[test]
    fn test_game_result() {
        let single = GameResult::from_winners(vec![PlayerId::new(2)]);
        assert_eq!(single, GameResult::Winner(PlayerId::new(2)));
        assert!(single.is_winner(PlayerId::new(2)));

        let draw = GameResult::from_winners(vec![PlayerId::new(0), PlayerId::new(1)]);
        assert!(draw.is_winner(PlayerId::new(1)));
        assert!(!draw.is_winner(PlayerId::new(2)));
        assert_eq!(draw.winners().len(), 2);
    }

    #[test]
    fn test_new_game_setup() {
        let game = Game::new(GameConfig::new(2), CardRegistry::standard(), 1).unwrap();

        assert_eq!(game.supply().count(COPPER), 46);
        for (_, player) in game.player_states().iter() {
            assert!(player.deck.is_empty());
            assert_eq!(player.discard.len(), 10);
            assert_eq!(player.num_turns, 0);
        }
        assert_eq!(game.total_cards(), game.config().total_cards());
        assert!(!game.is_terminal());
        assert!(game.result().is_none());
    }

    #[test]
    fn test_turn_retires_hand_and_advances() {
        let mut game = Game::new(GameConfig::new(2), CardRegistry::standard(), 3).unwrap();

        game.play_turn(&mut Buyer(vec![SILVER])).unwrap();

        let p0 = game.player(PlayerId::new(0));
        assert_eq!(p0.num_turns, 1);
        assert_eq!(p0.deck.len(), 5);
        assert_eq!(p0.card_count(), 10 + game.history().len());
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.total_cards(), game.config().total_cards());
    }

    #[test]
    fn test_illegal_move_aborts() {
        let mut game = Game::new(GameConfig::new(2), CardRegistry::standard(), 3).unwrap();
        let mut strategies = vec![boxed(Stubborn(Move::Buy(PROVINCE))), boxed(Idle)];

        let err = game.run(&mut strategies).unwrap_err();
        assert!(matches!(
            err,
            GameError::ContractViolation {
                player,
                violation: Violation::Unaffordable { card: PROVINCE, cost: 8, .. },
            } if player == PlayerId::new(0)
        ));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_province_pile_ends_game() {
        let config = GameConfig::new(2).with_supply(SupplySchedule::base(2).with_pile(PROVINCE, 1));
        let mut game = Game::new(config, CardRegistry::standard(), 11).unwrap();
        let mut strategies = vec![boxed(Buyer(vec![PROVINCE, SILVER])), boxed(Buyer(vec![PROVINCE, SILVER]))];

        game.run(&mut strategies).unwrap();

        assert_eq!(game.end_reason(), Some(EndReason::EndingPileEmpty));
        assert_eq!(game.supply().count(PROVINCE), 0);
    }

    #[test]
    fn test_three_empty_piles_end_game() {
        let supply = SupplySchedule::base(2)
            .with_pile(ESTATE, 1)
            .with_pile(SILVER, 1)
            .with_pile(COPPER, 1);
        let config = GameConfig::new(2).with_supply(supply);
        let mut game = Game::new(config, CardRegistry::standard(), 5).unwrap();
        let mut strategies = vec![
            boxed(Buyer(vec![SILVER, ESTATE, COPPER])),
            boxed(Buyer(vec![SILVER, ESTATE, COPPER])),
        ];

        game.run(&mut strategies).unwrap();

        assert_eq!(game.end_reason(), Some(EndReason::PilesExhausted(3)));
        assert_eq!(game.total_cards(), game.config().total_cards());
    }

    #[test]
    fn test_idle_players_hit_turn_limit() {
        let mut game = Game::new(GameConfig::new(2).with_max_turns(7), CardRegistry::standard(), 5).unwrap();
        let mut strategies = vec![boxed(Idle), boxed(Idle)];

        game.run(&mut strategies).unwrap();

        assert_eq!(game.end_reason(), Some(EndReason::TurnLimit));
        assert!(game.player_states().values().all(|p| p.num_turns == 7));
        assert_eq!(game.winners(), vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_strategy_count_must_match() {
        let mut game = Game::new(GameConfig::new(3), CardRegistry::standard(), 5).unwrap();
        let mut strategies = vec![boxed(Idle)];

        assert!(matches!(game.run(&mut strategies), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_history_records_moves() {
        let mut game = Game::new(GameConfig::new(1).with_max_turns(3), CardRegistry::standard(), 8).unwrap();
        let mut strategies = vec![boxed(Buyer(vec![COPPER]))];

        game.run(&mut strategies).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|r| r.mv == Move::Buy(COPPER) && r.sequence == 0));
        assert_eq!(history.iter().map(|r| r.turn).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_long_finite_turn_is_not_cut() {
        // 40 festivals: 40 plays leave 80 gold and 41 buys, so 41 coppers.
        let config = GameConfig::new(1)
            .with_starting_deck(vec![(FESTIVAL, 40)])
            .with_hand_size(40);
        let mut game = Game::new(config, CardRegistry::standard(), 2).unwrap();

        let outcome = game.play_turn(&mut Chainer).unwrap();

        assert_eq!(outcome, TurnOutcome::Completed { moves: 81 });
        assert_eq!(game.history().len(), 81);
        assert_eq!(
            game.history().iter().filter(|r| r.mv == Move::PlayBasicAction(FESTIVAL)).count(),
            40
        );
        assert_eq!(game.player(PlayerId::new(0)).count(COPPER), 41);
        assert!(game.truncated_turns().is_empty());
    }

    #[test]
    fn test_self_reshuffling_village_is_cut_off() {
        // The only card is a village: playing it draws it straight back.
        let config = GameConfig::new(1)
            .with_starting_deck(vec![(VILLAGE, 1)])
            .with_hand_size(1)
            .with_max_moves_per_turn(100);
        let mut game = Game::new(config, CardRegistry::standard(), 4).unwrap();

        let outcome = game.play_turn(&mut Chainer).unwrap();

        assert_eq!(outcome, TurnOutcome::Truncated { moves: 100 });
        assert!(outcome.is_truncated());
        assert_eq!(game.history().len(), 100);
        assert!(game.history().iter().all(|r| r.mv == Move::PlayBasicAction(VILLAGE)));
        let truncated: Vec<_> = game.truncated_turns().iter().copied().collect();
        assert_eq!(truncated, vec![(PlayerId::new(0), 1)]);
        assert_eq!(game.total_cards(), game.config().total_cards());
    }

    #[test]
    fn test_turn_ending_exactly_at_limit_is_completed() {
        // One buy, then nothing is legal; the limit is met but nothing was cut.
        let config = GameConfig::new(1).with_max_moves_per_turn(1);
        let mut game = Game::new(config, CardRegistry::standard(), 6).unwrap();

        let outcome = game.play_turn(&mut Buyer(vec![COPPER])).unwrap();

        assert_eq!(outcome, TurnOutcome::Completed { moves: 1 });
        assert!(game.truncated_turns().is_empty());
    }

    #[test]
    fn test_fork_rng_leaves_game_unchanged() {
        let play = |fork: bool| {
            let config = GameConfig::new(2).with_max_turns(6);
            let mut game = Game::new(config, CardRegistry::standard(), 21).unwrap();
            if fork {
                let _ = game.fork_rng();
            }
            let mut strategies = vec![boxed(Buyer(vec![SILVER, COPPER])), boxed(Buyer(vec![SILVER]))];
            game.run(&mut strategies).unwrap();
            game.history().clone()
        };

        assert_eq!(play(false), play(true));

        let mut game = Game::new(GameConfig::new(2), CardRegistry::standard(), 21).unwrap();
        assert_ne!(game.fork_rng().seed(), game.fork_rng().seed());
    }
}
