//! Monte Carlo Tree Search implementation.
//!
//! Implements the AlphaZero search loop: PUCT selection, evaluator-guided
//! expansion and negamax backpropagation over an owned tree of `Node`s.

use crate::{
    config::MctsConfig,
    evaluator::{Evaluation, Evaluator},
    node::Node,
};
use rand::Rng;
use rand_distr::{Dirichlet, Distribution};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};
use zero_core::{Game, Policy, Result, Value, ZeroError};

/// Result of an MCTS search.
#[derive(Clone, Debug)]
pub struct SearchResult<A> {
    /// Visit count for each legal action at root, in legal-action order.
    pub visit_counts: Vec<(A, u32)>,

    /// Best action (highest visit count, lowest index on ties).
    /// For temperature-based selection, use `select_action()` instead.
    pub best_action: A,

    /// Policy derived from normalized visit counts.
    /// Length equals `game.num_actions()`, sums to 1.0.
    pub policy: Vec<f32>,

    /// Value estimate at root (from perspective of player to move).
    pub root_value: f32,

    /// Simulations completed by this search call.
    pub simulations: usize,
}

impl<A: Copy> SearchResult<A> {
    /// Select an action using temperature-based sampling.
    ///
    /// - temperature = 0: always return best action (greedy)
    /// - temperature = 1: sample proportional to visit counts
    /// - temperature > 1: more uniform distribution
    /// - temperature < 1: more peaked distribution
    ///
    /// Formula: P(a) ∝ N(a)^(1/τ) where τ is temperature
    pub fn select_action<R: Rng>(&self, temperature: f32, rng: &mut R) -> A {
        if temperature <= 0.0 || self.visit_counts.len() <= 1 {
            return self.best_action;
        }

        let max_count = self.visit_counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
        if max_count == 0 {
            return self.best_action;
        }

        // Scale by the maximum first so large counts cannot overflow.
        // Unvisited actions are never sampled, whatever the temperature.
        let inv_temp = 1.0 / temperature as f64;
        let adjusted: Vec<f64> = self
            .visit_counts
            .iter()
            .map(|&(_, count)| match count {
                0 => 0.0,
                _ => (count as f64 / max_count as f64).powf(inv_temp),
            })
            .collect();

        let sum: f64 = adjusted.iter().sum();
        let threshold: f64 = rng.gen::<f64>() * sum;
        let mut cumulative = 0.0;

        for (i, &weight) in adjusted.iter().enumerate() {
            cumulative += weight;
            if weight > 0.0 && cumulative >= threshold {
                return self.visit_counts[i].0;
            }
        }

        self.best_action
    }

    /// Get the best action (greedy selection).
    pub fn best(&self) -> A {
        self.best_action
    }

    /// Training target with all mass on the most visited action.
    ///
    /// # Errors
    /// `InvalidPolicy` if the stored policy is not a distribution.
    pub fn one_hot_policy(&self) -> Result<Vec<f32>> {
        let policy = self.typed_policy()?;
        Ok(Policy::one_hot(policy.len(), policy.argmax())?.into_inner())
    }

    /// Get the policy as a typed Policy (enforces sum to 1.0 invariant).
    ///
    /// # Errors
    /// Returns error if policy doesn't sum to 1.0 (indicates a bug).
    pub fn typed_policy(&self) -> Result<Policy> {
        Policy::new(self.policy.clone())
    }

    /// Get the root value as a typed Value (enforces [-1, 1] range invariant).
    ///
    /// Uses clamping to handle floating point edge cases.
    pub fn typed_value(&self) -> Value {
        Value::clamped(self.root_value)
    }
}

/// Monte Carlo Tree Search with PUCT selection.
///
/// Generic over:
/// - `G`: The game being played
/// - `E`: The evaluation strategy (rollouts, oracle or neural network)
/// - `R`: The random number generator
pub struct Mcts<G: Game, E: Evaluator<G>, R: Rng> {
    config: MctsConfig,
    evaluator: E,
    rng: R,
    cancel: Option<Arc<AtomicBool>>,
    _game: PhantomData<G>,
}

impl<G, E, R> Mcts<G, E, R>
where
    G: Game,
    E: Evaluator<G>,
    R: Rng,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, evaluator: E, rng: R) -> Self {
        Self {
            config,
            evaluator,
            rng,
            cancel: None,
            _game: PhantomData,
        }
    }

    /// Stop searching after the current simulation once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Run MCTS from a fresh root for `state`.
    pub fn search_state(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
        let mut root = Node::root(game, state.clone());
        self.search(game, &mut root)
    }

    /// Run `num_simulations` simulations from `root`, updating its statistics.
    ///
    /// Statistics already in `root` (from a reused subtree) are kept, so the
    /// returned visit counts are cumulative.
    ///
    /// # Errors
    /// - `NoLegalActions` if the root is terminal
    /// - `EvaluatorContract` / `Evaluation` from the evaluator
    /// - `InvalidConfig` for an unusable configuration
    pub fn search(&mut self, game: &G, root: &mut Node<G>) -> Result<SearchResult<G::Action>> {
        self.config.validate()?;
        if root.is_terminal() {
            return Err(ZeroError::NoLegalActions);
        }

        if !root.is_expanded() {
            self.expand(game, root)?;
        }
        if self.config.exploration_fraction > 0.0 && !root.noised {
            self.add_root_noise(root)?;
        }

        let mut completed = 0;
        for _ in 0..self.config.num_simulations {
            let value = self.simulate(game, root)?;
            completed += 1;
            trace!(simulation = completed, value, "simulation complete");

            if self.is_cancelled() {
                debug!(completed, "search cancelled");
                break;
            }
        }

        let result = self.extract_results(game, root, completed);
        debug!(
            simulations = completed,
            root_visits = root.visit_count(),
            best_action = ?result.best_action,
            root_value = result.root_value,
            "search finished"
        );
        Ok(result)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Run a single simulation below `node`.
    ///
    /// Returns the leaf value from the perspective of the player to move at
    /// `node`. Edge statistics are updated only after the recursive call
    /// succeeds, so an evaluator failure leaves the path untouched.
    fn simulate(&mut self, game: &G, node: &mut Node<G>) -> Result<f32> {
        if let Some(value) = node.terminal_value() {
            return Ok(value);
        }
        if !node.is_expanded() {
            return self.expand(game, node);
        }

        let index = self.select_edge(node);
        let action = node.edges[index].action;
        let child = node.child_or_insert(game, action)?;

        // Negate: the child's value is from the opponent's perspective.
        let value = -self.simulate(game, child)?;
        node.edges[index].record(value);
        Ok(value)
    }

    /// Evaluate `node`, install its edges and return the evaluator's value.
    fn expand(&mut self, game: &G, node: &mut Node<G>) -> Result<f32> {
        let legal_actions = game.legal_actions(node.state());
        // INVARIANT: only non-terminal nodes are expanded
        assert!(
            !legal_actions.is_empty(),
            "BUG: expanding non-terminal state without legal actions"
        );

        let evaluation = self.evaluator.evaluate(game, node.state())?;
        let legal_indices: Vec<usize> = legal_actions
            .iter()
            .map(|&a| game.action_to_index(a))
            .collect();
        let priors = validate_evaluation(&evaluation, game.num_actions(), &legal_indices)?;

        node.expand(
            legal_actions
                .into_iter()
                .zip(legal_indices)
                .map(|(action, index)| (action, priors[index])),
        );
        Ok(evaluation.value)
    }

    /// Select the edge maximizing PUCT; ties go to the earlier edge.
    ///
    /// PUCT(a) = Q(a) + c_puct * P(a) * sqrt(N) / (1 + N(a))
    fn select_edge(&self, node: &Node<G>) -> usize {
        // Clamped to 1 so priors steer the very first selection.
        let parent_visits = node.visit_count().max(1) as f32;
        let exploration = self.config.c_puct * parent_visits.sqrt();

        let mut best_index = None;
        let mut best_score = f32::NEG_INFINITY;

        for (i, edge) in node.edges.iter().enumerate() {
            let score =
                edge.mean_value() + exploration * edge.prior / (1.0 + edge.visit_count as f32);
            // NaN ranks below every real score.
            let score = if score.is_nan() { f32::NEG_INFINITY } else { score };
            if best_index.is_none() || score > best_score {
                best_score = score;
                best_index = Some(i);
            }
        }

        // INVARIANT: only expanded, non-terminal nodes reach selection
        best_index.expect("BUG: select_edge called on node without edges")
    }

    /// Mix Dirichlet noise into the root priors.
    fn add_root_noise(&mut self, root: &mut Node<G>) -> Result<()> {
        root.noised = true;

        // Dirichlet requires at least 2 elements
        let num_edges = root.edges.len();
        if num_edges < 2 {
            return Ok(());
        }

        let alpha = vec![self.config.dirichlet_alpha; num_edges];
        let dirichlet = Dirichlet::new(&alpha).map_err(|e| {
            ZeroError::InvalidConfig(format!(
                "dirichlet_alpha {}: {e}",
                self.config.dirichlet_alpha
            ))
        })?;
        let noise: Vec<f32> = dirichlet.sample(&mut self.rng);

        if !mix_noise(root, &noise, self.config.exploration_fraction) {
            debug!(
                alpha = self.config.dirichlet_alpha,
                "dirichlet sample degenerate, root priors left unmixed"
            );
        }
        Ok(())
    }

    fn extract_results(&self, game: &G, root: &Node<G>, simulations: usize) -> SearchResult<G::Action> {
        let visit_counts = root.visit_counts();

        let mut best = &root.edges[0];
        for edge in &root.edges[1..] {
            if edge.visit_count > best.visit_count {
                best = edge;
            }
        }

        let total_visits = root.visit_count();
        let mut policy = vec![0.0; game.num_actions()];
        for edge in &root.edges {
            policy[game.action_to_index(edge.action)] = if total_visits > 0 {
                edge.visit_count as f32 / total_visits as f32
            } else {
                edge.prior
            };
        }

        let root_value = if total_visits > 0 {
            root.edges.iter().map(|e| e.total_value).sum::<f32>() / total_visits as f32
        } else {
            0.0
        };

        SearchResult {
            visit_counts,
            best_action: best.action,
            policy,
            root_value,
            simulations,
        }
    }
}

/// Mix `noise` into the root priors with weight `eps`.
///
/// Small alphas can underflow every gamma draw, which leaves the sample NaN
/// or all zero; such a sample is not mixed in and `false` is returned.
fn mix_noise<G: Game>(root: &mut Node<G>, noise: &[f32], eps: f32) -> bool {
    let sum: f32 = noise.iter().sum();
    let usable = noise.len() == root.edges.len()
        && noise.iter().all(|n| n.is_finite() && *n >= 0.0)
        && sum > 0.0;
    if !usable {
        return false;
    }

    for (edge, n) in root.edges.iter_mut().zip(noise) {
        edge.prior = (1.0 - eps) * edge.prior + eps * n / sum;
    }
    true
}

/// Check an evaluation against the evaluator contract and return the prior
/// restricted to `legal` and renormalized.
fn validate_evaluation(evaluation: &Evaluation, num_actions: usize, legal: &[usize]) -> Result<Vec<f32>> {
    if evaluation.policy.len() != num_actions {
        return Err(ZeroError::EvaluatorContract(format!(
            "policy has {} entries, expected {num_actions}",
            evaluation.policy.len()
        )));
    }
    if !(-1.0..=1.0).contains(&evaluation.value) {
        return Err(ZeroError::EvaluatorContract(format!(
            "value {} outside [-1, 1]",
            evaluation.value
        )));
    }

    Policy::masked(&evaluation.policy, legal)
        .map(Policy::into_inner)
        .map_err(|e| ZeroError::EvaluatorContract(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{RolloutEvaluator, UniformEvaluator};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use zero_core::{GameStatus, Player};

    // Simple test game: race to 5
    // Players take turns adding 1 or 2. Whoever reaches exactly 5 wins.
    // First player wins with optimal play by moving to 2.
    #[derive(Clone)]
    struct RaceToFive;

    #[derive(Clone, PartialEq, Eq, Debug)]
    struct RaceState {
        count: u8,
        current_player: Player,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    struct RaceAction(u8); // 1 or 2

    impl Game for RaceToFive {
        type State = RaceState;
        type Action = RaceAction;

        fn initial_state(&self) -> Self::State {
            RaceState {
                count: 0,
                current_player: Player::First,
            }
        }

        fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
            if state.count >= 5 {
                Vec::new()
            } else {
                let mut actions = vec![RaceAction(1)];
                if state.count + 2 <= 5 {
                    actions.push(RaceAction(2));
                }
                actions
            }
        }

        fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State> {
            if !self.legal_actions(state).contains(&action) {
                return Err(ZeroError::InvalidAction(format!("{action:?}")));
            }
            Ok(RaceState {
                count: state.count + action.0,
                current_player: state.current_player.opposite(),
            })
        }

        fn current_player(&self, state: &Self::State) -> Player {
            state.current_player
        }

        fn status(&self, state: &Self::State) -> GameStatus {
            if state.count >= 5 {
                // Player who just moved reached 5 and wins
                GameStatus::Win(state.current_player.opposite())
            } else {
                GameStatus::Ongoing
            }
        }

        fn observe(&self, state: &Self::State) -> Vec<f32> {
            vec![state.count as f32]
        }

        fn action_to_index(&self, action: Self::Action) -> usize {
            (action.0 - 1) as usize
        }

        fn index_to_action(&self, index: usize) -> Option<Self::Action> {
            match index {
                0 => Some(RaceAction(1)),
                1 => Some(RaceAction(2)),
                _ => None,
            }
        }

        fn num_actions(&self) -> usize {
            2
        }
    }

    /// Returns a fixed evaluation regardless of the state.
    struct FixedEvaluator(Evaluation);

    impl<G: Game> Evaluator<G> for FixedEvaluator {
        fn evaluate(&self, _game: &G, _state: &G::State) -> Result<Evaluation> {
            Ok(self.0.clone())
        }
    }

    fn rollout_mcts(sims: usize, seed: u64) -> Mcts<RaceToFive, RolloutEvaluator<ChaCha8Rng>, ChaCha8Rng> {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let evaluator = RolloutEvaluator::new(rng.clone(), 20);
        Mcts::new(MctsConfig::with_simulations(sims), evaluator, rng)
    }

    #[test]
    fn test_mcts_basic() {
        let mut mcts = rollout_mcts(100, 42);
        let game = RaceToFive;

        let result = mcts.search_state(&game, &game.initial_state()).unwrap();

        assert!(result.best_action == RaceAction(1) || result.best_action == RaceAction(2));

        let policy_sum: f32 = result.policy.iter().sum();
        assert!((policy_sum - 1.0).abs() < 1e-5);

        // Root expansion is not a simulation; every simulation visits one root edge.
        let total_visits: u32 = result.visit_counts.iter().map(|(_, c)| *c).sum();
        assert_eq!(total_visits, 100);
        assert_eq!(result.simulations, 100);
    }

    #[test]
    fn test_mcts_finds_winning_move() {
        let config = MctsConfig::for_evaluation(400);
        let mut mcts = Mcts::new(config, UniformEvaluator, ChaCha8Rng::seed_from_u64(1));
        let game = RaceToFive;

        // From 0, moving to 2 leaves the opponent in a lost position.
        let result = mcts.search_state(&game, &game.initial_state()).unwrap();
        assert_eq!(result.best_action, RaceAction(2));
        assert!(result.root_value > 0.0);
    }

    #[test]
    fn test_mcts_deterministic() {
        let run_search = |seed: u64| {
            let mut mcts = rollout_mcts(50, seed);
            let game = RaceToFive;
            mcts.search_state(&game, &game.initial_state()).unwrap()
        };

        let result1 = run_search(12345);
        let result2 = run_search(12345);

        assert_eq!(result1.best_action, result2.best_action);
        assert_eq!(result1.visit_counts, result2.visit_counts);
    }

    #[test]
    fn test_terminal_root_is_an_error() {
        let game = RaceToFive;
        let mut mcts = rollout_mcts(10, 0);
        let state = RaceState {
            count: 5,
            current_player: Player::Second,
        };
        assert_eq!(mcts.search_state(&game, &state).unwrap_err(), ZeroError::NoLegalActions);
    }

    #[test]
    fn test_contract_violations() {
        let game = RaceToFive;
        let bad = [
            Evaluation { policy: vec![1.0], value: 0.0 },
            Evaluation { policy: vec![0.5, 0.5], value: 1.5 },
            Evaluation { policy: vec![0.5, 0.5], value: f32::NAN },
            Evaluation { policy: vec![-0.5, 1.5], value: 0.0 },
            Evaluation { policy: vec![f32::INFINITY, 0.5], value: 0.0 },
        ];
        for evaluation in bad {
            let mut mcts = Mcts::new(
                MctsConfig::for_evaluation(10),
                FixedEvaluator(evaluation.clone()),
                ChaCha8Rng::seed_from_u64(0),
            );
            let mut root = Node::root(&game, game.initial_state());
            let err = mcts.search(&game, &mut root).unwrap_err();
            assert!(matches!(err, ZeroError::EvaluatorContract(_)), "{evaluation:?}");
            assert_eq!(root.visit_count(), 0);
        }
    }

    #[test]
    fn test_zero_prior_mass_is_uniform() {
        let game = RaceToFive;
        let evaluator = FixedEvaluator(Evaluation { policy: vec![0.0, 0.0], value: 0.0 });
        let mut mcts = Mcts::new(MctsConfig::for_evaluation(0), evaluator, ChaCha8Rng::seed_from_u64(0));
        let mut root = Node::root(&game, game.initial_state());
        mcts.search(&game, &mut root).unwrap();

        for edge in root.edges() {
            assert!((edge.prior - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_root_noise_applied_once() {
        let game = RaceToFive;
        let config = MctsConfig {
            num_simulations: 0,
            exploration_fraction: 0.5,
            ..MctsConfig::default()
        };
        let mut mcts = Mcts::new(config, UniformEvaluator, ChaCha8Rng::seed_from_u64(9));
        let mut root = Node::root(&game, game.initial_state());

        mcts.search(&game, &mut root).unwrap();
        let first: Vec<f32> = root.edges().iter().map(|e| e.prior).collect();
        assert!((first.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        assert_ne!(first, vec![0.5, 0.5]);

        mcts.search(&game, &mut root).unwrap();
        let second: Vec<f32> = root.edges().iter().map(|e| e.prior).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cancellation_stops_after_one_simulation() {
        let game = RaceToFive;
        let flag = Arc::new(AtomicBool::new(true));
        let mut mcts = rollout_mcts(100, 3).with_cancel_flag(flag.clone());

        let mut root = Node::root(&game, game.initial_state());
        let result = mcts.search(&game, &mut root).unwrap();
        assert_eq!(result.simulations, 1);
        assert_eq!(root.visit_count(), 1);

        flag.store(false, Ordering::Relaxed);
        let result = mcts.search(&game, &mut root).unwrap();
        assert_eq!(result.simulations, 100);
        assert_eq!(root.visit_count(), 101);
    }

    #[test]
    fn test_select_action_greedy_and_sampling() {
        let result = SearchResult {
            visit_counts: vec![(0usize, 10), (1, 30), (2, 30), (3, 0)],
            best_action: 1,
            policy: vec![0.0; 4],
            root_value: 0.0,
            simulations: 70,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(result.select_action(0.0, &mut rng), 1);

        let mut seen = [0usize; 4];
        for _ in 0..1000 {
            seen[result.select_action(1.0, &mut rng)] += 1;
        }
        assert_eq!(seen[3], 0);
        assert!(seen[0] > 50 && seen[1] > 300 && seen[2] > 300);
    }

    #[test]
    fn test_one_hot_policy_prefers_lowest_index() {
        let result = SearchResult {
            visit_counts: vec![(1usize, 2), (2, 2)],
            best_action: 1,
            policy: vec![0.0, 0.5, 0.5],
            root_value: 0.0,
            simulations: 4,
        };
        assert_eq!(result.one_hot_policy().unwrap(), vec![0.0, 1.0, 0.0]);
        assert!(result.typed_policy().is_ok());
    }

    #[test]
    fn test_one_hot_policy_rejects_non_distribution() {
        let result = SearchResult {
            visit_counts: vec![(0usize, 0), (1, 0)],
            best_action: 0,
            policy: vec![0.0, 0.0],
            root_value: 0.0,
            simulations: 0,
        };
        assert!(matches!(result.one_hot_policy(), Err(ZeroError::InvalidPolicy(_))));
    }

    #[test]
    fn test_select_action_never_samples_unvisited() {
        let result = SearchResult {
            visit_counts: vec![(0usize, 10), (1, 0)],
            best_action: 0,
            policy: vec![1.0, 0.0],
            root_value: 0.0,
            simulations: 10,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for temperature in [1.0, 1e6, f32::MAX] {
            for _ in 0..500 {
                assert_eq!(result.select_action(temperature, &mut rng), 0);
            }
        }
    }

    fn expanded_race_root() -> (Mcts<RaceToFive, UniformEvaluator, ChaCha8Rng>, Node<RaceToFive>) {
        let game = RaceToFive;
        let mut mcts = Mcts::new(MctsConfig::for_evaluation(0), UniformEvaluator, ChaCha8Rng::seed_from_u64(0));
        let mut root = Node::root(&game, game.initial_state());
        mcts.search(&game, &mut root).unwrap();
        (mcts, root)
    }

    #[test]
    fn test_degenerate_noise_leaves_priors() {
        let (_, mut root) = expanded_race_root();

        for noise in [[f32::NAN, f32::NAN], [0.0, 0.0], [f32::INFINITY, 0.0]] {
            assert!(!mix_noise(&mut root, &noise, 0.25), "{noise:?}");
            assert_eq!(root.edges().iter().map(|e| e.prior).collect::<Vec<_>>(), vec![0.5, 0.5]);
        }

        assert!(mix_noise(&mut root, &[1.0, 0.0], 0.5));
        assert!((root.edges()[0].prior - 0.75).abs() < 1e-6);
        assert!((root.edges()[1].prior - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_select_edge_ranks_nan_last() {
        let (mcts, mut root) = expanded_race_root();

        root.edges[0].prior = f32::NAN;
        assert_eq!(mcts.select_edge(&root), 1);

        root.edges[1].prior = f32::NAN;
        assert_eq!(mcts.select_edge(&root), 0);
    }

    #[test]
    fn test_small_dirichlet_alpha_keeps_priors_finite() {
        let game = RaceToFive;
        let config = MctsConfig {
            num_simulations: 8,
            dirichlet_alpha: 0.03,
            exploration_fraction: 0.25,
            ..MctsConfig::default()
        };
        assert!(config.validate().is_ok());

        for seed in 0..2000 {
            let mut mcts = Mcts::new(config.clone(), UniformEvaluator, ChaCha8Rng::seed_from_u64(seed));
            let mut root = Node::root(&game, game.initial_state());
            let result = mcts.search(&game, &mut root).unwrap();

            assert_eq!(root.visit_count(), 8);
            let priors: Vec<f32> = root.edges().iter().map(|e| e.prior).collect();
            assert!(priors.iter().all(|p| p.is_finite()), "seed {seed}: {priors:?}");
            assert!((priors.iter().sum::<f32>() - 1.0).abs() < 1e-5, "seed {seed}: {priors:?}");
            assert!(result.typed_policy().is_ok());
        }
    }
}
