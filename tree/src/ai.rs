//! Decision engine: one move per call, by the configured strategy

use rand::rngs::StdRng;
use rand::Rng;

use nim_engine::extract::extract_move;
use nim_engine::search::AlphaBeta;
use nim_engine::{
    EngineError, GameState, GameVariant, Move, NimEvaluator, NimSumStrategy, Result, StrategyKind,
};

use crate::builder::GameTreeBuilder;

/// Settings for the computer player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Rules of the game being played
    pub variant: GameVariant,
    /// Decision path used for every move
    pub strategy: StrategyKind,
    /// Plies expanded and searched by the alpha-beta path
    pub depth: u32,
    /// Seed for the random fallback; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            variant: GameVariant::Normal,
            strategy: StrategyKind::NimSum,
            depth: 1,
            seed: None,
        }
    }
}

/// Computer player
///
/// Every alpha-beta decision builds a fresh tree and drops it before
/// returning. Subtrees are not carried over between turns, even though the
/// opponent's reply is always a node of the previous tree.
pub struct NimAi<R = StdRng> {
    config: EngineConfig,
    evaluator: NimEvaluator,
    strategy: NimSumStrategy<R>,
}

impl NimAi<StdRng> {
    pub fn new(config: EngineConfig) -> Self {
        let strategy = match config.seed {
            Some(seed) => NimSumStrategy::seeded(seed),
            None => NimSumStrategy::from_entropy(),
        };
        NimAi {
            evaluator: NimEvaluator::new(config.variant),
            strategy,
            config,
        }
    }
}

impl<R: Rng> NimAi<R> {
    /// Computer player drawing fallback moves from `rng`
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        NimAi {
            evaluator: NimEvaluator::new(config.variant),
            strategy: NimSumStrategy::with_rng(rng),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose the next move for `state`
    ///
    /// The returned move is always legal for `state`. A terminal board is
    /// refused with [`EngineError::GameOver`].
    pub fn next_move(&mut self, state: &GameState) -> Result<Move> {
        if state.is_terminal() {
            return Err(EngineError::GameOver);
        }
        match self.config.strategy {
            StrategyKind::NimSum => {
                self.strategy
                    .next_move(state.piles(), self.config.variant, state.nim_sum())
            }
            StrategyKind::AlphaBeta => self.search_move(state),
        }
    }

    fn search_move(&self, state: &GameState) -> Result<Move> {
        let depth = self.config.depth;
        let tree = GameTreeBuilder::new(&self.evaluator).build(state.piles(), depth);

        let mut search = AlphaBeta::new(&tree);
        let value = search.search_root(depth);
        let stats = search.stats();
        log::debug!(
            "alpha-beta on {}: value {}, visited {} of {} nodes, {} cutoffs",
            state,
            value,
            stats.visited,
            tree.len(),
            stats.cutoffs
        );

        extract_move(&tree, value, state.piles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nim_engine::node::SCORE_WIN;
    use nim_engine::state::nim_sum;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    #[derive(Debug, Clone)]
    struct SmallBoard(Vec<u32>);

    impl Arbitrary for SmallBoard {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 3 + 1;
            SmallBoard((0..len).map(|_| u32::arbitrary(g) % 8).collect())
        }
    }

    fn ai(variant: GameVariant, strategy: StrategyKind, depth: u32) -> NimAi {
        NimAi::new(EngineConfig {
            variant,
            strategy,
            depth,
            seed: Some(17),
        })
    }

    fn board(piles: &[u32]) -> GameState {
        GameState::new(piles.to_vec()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.variant, GameVariant::Normal);
        assert_eq!(config.strategy, StrategyKind::NimSum);
        assert_eq!(config.depth, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_nim_sum_path() {
        let mut player = ai(GameVariant::Normal, StrategyKind::NimSum, 1);
        assert_eq!(player.next_move(&board(&[1, 3, 5, 6])).unwrap(), Move::new(0, 1));
    }

    #[test]
    fn test_alpha_beta_finds_balancing_move() {
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 1);
        assert_eq!(player.next_move(&board(&[1, 3, 5, 6])).unwrap(), Move::new(0, 1));
    }

    #[test]
    fn test_alpha_beta_takes_the_last_pile() {
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 1);
        assert_eq!(player.next_move(&board(&[0, 0, 3])).unwrap(), Move::new(2, 3));
    }

    #[test]
    fn test_alpha_beta_misere_leaves_last_object() {
        let mut player = ai(GameVariant::Misere, StrategyKind::AlphaBeta, 1);
        assert_eq!(player.next_move(&board(&[0, 0, 2, 0])).unwrap(), Move::new(2, 1));
    }

    #[test]
    fn test_alpha_beta_losing_board_still_moves() {
        // Every child scores the same, so the first child is taken
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 1);
        assert_eq!(player.next_move(&board(&[1, 3, 5, 7])).unwrap(), Move::new(0, 1));
    }

    #[test]
    fn test_depth_zero_search_is_inconsistent() {
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 0);
        assert!(matches!(
            player.next_move(&board(&[1, 2])),
            Err(EngineError::SearchInconsistency { .. })
        ));
    }

    #[test]
    fn test_two_ply_search_without_matching_child() {
        // Best two-ply value is a terminal grandchild; no root child scores a win
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 2);
        for piles in [&[1, 1][..], &[0, 1, 1][..]] {
            assert_eq!(
                player.next_move(&board(piles)),
                Err(EngineError::SearchInconsistency { value: SCORE_WIN })
            );
        }
    }

    #[test]
    fn test_two_ply_search_takes_first_matching_child() {
        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 2);
        let state = board(&[1, 3, 5, 6]);
        let m = player.next_move(&state).unwrap();
        assert_eq!(m, Move::new(1, 3));
        assert!(state.is_valid_move(&m));

        let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 2);
        assert_eq!(player.next_move(&board(&[2, 2])).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_terminal_board_is_refused() {
        for strategy in [StrategyKind::NimSum, StrategyKind::AlphaBeta] {
            let mut player = ai(GameVariant::Normal, strategy, 1);
            assert_eq!(player.next_move(&board(&[0, 0])), Err(EngineError::GameOver));
        }
    }

    #[test]
    fn test_seeded_players_agree() {
        let state = board(&[1, 3, 5, 7]);
        let mut a = ai(GameVariant::Normal, StrategyKind::NimSum, 1);
        let mut b = ai(GameVariant::Normal, StrategyKind::NimSum, 1);
        for _ in 0..5 {
            assert_eq!(a.next_move(&state), b.next_move(&state));
        }
    }

    #[test]
    fn test_custom_random_source() {
        use rand::SeedableRng;

        let state = board(&[1, 3, 5, 7]);
        let mut a = NimAi::with_rng(EngineConfig::default(), StdRng::seed_from_u64(8));
        let mut b = NimAi::with_rng(EngineConfig::default(), StdRng::seed_from_u64(8));
        let m = a.next_move(&state).unwrap();
        assert!(state.is_valid_move(&m));
        assert_eq!(Ok(m), b.next_move(&state));
    }

    #[test]
    fn test_one_ply_search_agrees_with_nim_sum() {
        let mut qc = QuickCheck::new();
        let test = |b: SmallBoard| {
            let state = board(&b.0);
            if state.nim_sum() == 0 {
                return;
            }
            let mut player = ai(GameVariant::Normal, StrategyKind::AlphaBeta, 1);
            let m = player.next_move(&state).unwrap();
            assert!(state.is_valid_move(&m));
            let mut next = state.clone();
            next.apply(&m).unwrap();
            assert_eq!(nim_sum(next.piles()), 0);
        };
        qc.quickcheck(test as fn(SmallBoard));
    }

    #[test]
    fn test_moves_are_legal_for_every_configuration() {
        let mut qc = QuickCheck::new();
        let test = |b: SmallBoard, misere: bool, search: bool| {
            let state = board(&b.0);
            if state.is_terminal() {
                return;
            }
            let variant = if misere { GameVariant::Misere } else { GameVariant::Normal };
            let strategy = if search { StrategyKind::AlphaBeta } else { StrategyKind::NimSum };
            let m = ai(variant, strategy, 1).next_move(&state).unwrap();
            assert!(state.is_valid_move(&m), "{:?} illegal for {}", m, state);
        };
        qc.quickcheck(test as fn(SmallBoard, bool, bool));
    }
}
