//! Property tests for engine invariants.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use deckbuilder_sim::cards::CardId;
use deckbuilder_sim::core::{GameConfig, GameError, GameRng, PlayerState};
use deckbuilder_sim::rules::{self, winners_from, Decision, DecisionView, Game, Strategy as _};
use deckbuilder_sim::strategies::RandomStrategy;
use deckbuilder_sim::CardRegistry;

/// Random play that records the lowest gold it ever saw and counts every
/// decision where cards were created or lost mid-turn.
struct Watched {
    inner: RandomStrategy,
    total: u64,
    lowest_gold: Rc<Cell<i32>>,
    miscounts: Rc<Cell<u32>>,
}

impl rules::Strategy for Watched {
    fn name(&self) -> &str {
        "watched-random"
    }

    fn decide(&mut self, view: &DecisionView<'_>) -> Decision {
        self.lowest_gold.set(self.lowest_gold.get().min(view.gold()));

        let game = view.game;
        let owned: usize = game.players.values().map(PlayerState::card_count).sum();
        let in_play = game.supply.total() + (owned + view.turn.hand().len() + game.trash.len()) as u64;
        if in_play != self.total {
            self.miscounts.set(self.miscounts.get() + 1);
        }

        self.inner.decide(view)
    }
}

fn card() -> impl Strategy<Value = CardId> {
    (0u16..13).prop_map(CardId::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Drawing only moves cards between deck, discard and the drawn set.
    #[test]
    fn prop_draw_preserves_count(
        deck in prop::collection::vec(card(), 0..20),
        discard in prop::collection::vec(card(), 0..20),
        n in 0usize..45,
        seed in any::<u64>(),
    ) {
        let mut player = PlayerState { deck, discard, num_turns: 0 };
        let before = player.card_count();
        let mut rng = GameRng::new(seed);

        match player.draw_cards(n, &mut rng) {
            Ok(drawn) => {
                prop_assert_eq!(drawn.len(), n);
                prop_assert_eq!(player.card_count() + n, before);
            }
            Err(GameError::DeckExhaustion { requested, available }) => {
                prop_assert!(n > before);
                prop_assert_eq!(requested, n);
                prop_assert_eq!(available, before);
                prop_assert_eq!(player.card_count(), before);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    /// Winners hold the best (score, -turns) and nobody else does.
    #[test]
    fn prop_winners_are_the_maximum(
        standings in prop::collection::vec((-5i32..40, 1u32..30), 1..8),
    ) {
        let winners = winners_from(&standings);
        prop_assert!(!winners.is_empty());

        let key = |(s, t): (i32, u32)| (s, std::cmp::Reverse(t));
        let best = standings.iter().copied().map(key).max().unwrap();
        for (i, &standing) in standings.iter().enumerate() {
            let is_winner = winners.iter().any(|w| w.index() == i);
            prop_assert_eq!(is_winner, key(standing) == best);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Random legal play always terminates, conserves cards at every
    /// decision and between turns, and never sees negative gold.
    #[test]
    fn prop_random_games_hold_invariants(seed in any::<u64>(), players in 1usize..=4) {
        let config = GameConfig::new(players).with_max_turns(60);
        let mut game = Game::new(config, CardRegistry::standard(), seed).unwrap();
        let total = game.config().total_cards();
        let lowest_gold = Rc::new(Cell::new(i32::MAX));
        let miscounts = Rc::new(Cell::new(0));

        let mut strategies: Vec<Watched> = (0..players)
            .map(|_| Watched {
                inner: RandomStrategy::from_rng(game.fork_rng()),
                total,
                lowest_gold: Rc::clone(&lowest_gold),
                miscounts: Rc::clone(&miscounts),
            })
            .collect();

        let mut turns = 0;
        while !game.is_terminal() {
            let seat = game.current_player().index();
            let outcome = game.play_turn(&mut strategies[seat]).unwrap();
            prop_assert!(!outcome.is_truncated());
            prop_assert_eq!(game.total_cards(), total);
            turns += 1;
        }

        prop_assert!(turns <= 60 * players);
        prop_assert!(lowest_gold.get() >= 0);
        prop_assert_eq!(miscounts.get(), 0);
        prop_assert!(game.player_states().values().all(|p| p.num_turns <= 60));
    }
}
