//! Matches between agents.
//!
//! Each agent keeps its own root: the mover's tree advances through its
//! own move, the opponent's through `observe`. The `Environment` referees
//! the game and reports the result in the global frame.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use zero_core::{Game, GameStatus, Player, ZeroError};
use zero_gomoku::{Environment, Gomoku};
use zero_mcts::{Agent, Mcts, MctsConfig, Node, RolloutEvaluator, Strategy, INPUT_CLOSED};

/// Agent type used by the arena: rollout-guided search.
pub type ArenaAgent = Agent<Gomoku, RolloutEvaluator<ChaCha8Rng>, ChaCha8Rng>;

pub fn build_agent(strategy: Strategy, mcts_config: &MctsConfig, rollout_depth: usize, seed: u64) -> ArenaAgent {
    let evaluator = RolloutEvaluator::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)), rollout_depth);
    let mcts = Mcts::new(mcts_config.clone(), evaluator, ChaCha8Rng::seed_from_u64(seed));
    Agent::new(strategy, mcts)
}

/// Results of a series of games, by seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Win(Player::First) => self.first_wins += 1,
            GameStatus::Win(Player::Second) => self.second_wins += 1,
            GameStatus::Draw | GameStatus::Ongoing => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }

    pub fn first_win_rate(&self) -> f32 {
        if self.games() == 0 {
            0.0
        } else {
            self.first_wins as f32 / self.games() as f32
        }
    }
}

/// Ask `agent` for a move until the input parses to a legal one.
fn human_move<B: BufRead, W: Write>(
    agent: &mut ArenaAgent,
    game: &Gomoku,
    node: &Node<Gomoku>,
    input: &mut B,
    out: &mut W,
) -> Result<usize> {
    let player = game.current_player(node.state());
    loop {
        write!(out, "{player} to move (row col): ")?;
        out.flush()?;
        match agent.human(game, node.state(), input) {
            Ok(action) => return Ok(action),
            Err(ZeroError::InvalidAction(msg)) if msg != INPUT_CLOSED => writeln!(out, "{msg}")?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Let `agent` move from `node`; returns its advanced root and the action.
fn take_turn<B: BufRead, W: Write>(
    agent: &mut ArenaAgent,
    game: &Gomoku,
    node: Node<Gomoku>,
    input: &mut B,
    out: &mut W,
) -> Result<(Node<Gomoku>, usize)> {
    let next = match agent.strategy() {
        Strategy::Human => {
            let action = human_move(agent, game, &node, input, out)?;
            agent.advance(game, node, action)?
        }
        Strategy::AlphaZero | Strategy::Random => agent.act(game, node, input)?,
    };
    let action = next.action().expect("BUG: advanced node has no action");
    Ok((next, action))
}

/// Play one game; `first` moves first.
///
/// Moves and boards are written to `out` when `show_board` is set; human
/// prompts always are.
pub fn play_game<B: BufRead, W: Write>(
    game: &Gomoku,
    first: &mut ArenaAgent,
    second: &mut ArenaAgent,
    input: &mut B,
    out: &mut W,
    show_board: bool,
) -> Result<GameStatus> {
    first.reset();
    second.reset();

    let mut env = Environment::new(game.clone());
    let mut first_root = Node::root(game, env.reset());
    let mut second_root = first_root.clone();

    if show_board {
        writeln!(out, "{}", game.render(env.state()))?;
    }

    loop {
        let mover = game.current_player(env.state());
        let action = match mover {
            Player::First => {
                let (next, action) = take_turn(first, game, first_root, input, out)?;
                first_root = next;
                second_root = second.observe(game, second_root, action)?;
                action
            }
            Player::Second => {
                let (next, action) = take_turn(second, game, second_root, input, out)?;
                second_root = next;
                first_root = first.observe(game, first_root, action)?;
                action
            }
        };

        let step = env.step(action)?;
        if show_board {
            let (row, col) = game.decode(action);
            writeln!(out, "{mover} plays {row} {col}")?;
            writeln!(out, "{}", game.render(&step.state))?;
        }

        if step.done {
            let status = step.state.status();
            debug!(?status, moves = step.state.move_count(), reward = step.reward, "game finished");
            return Ok(status);
        }
    }
}

/// Play `games` games without interaction, in parallel.
///
/// Game `i` seeds its agents from `seed + 2i` and `seed + 2i + 1`.
pub fn run_matches(
    game: &Gomoku,
    mcts_config: &MctsConfig,
    rollout_depth: usize,
    first: Strategy,
    second: Strategy,
    games: usize,
    seed: u64,
) -> Result<MatchSummary> {
    if first == Strategy::Human || second == Strategy::Human {
        anyhow::bail!("human players need interactive play");
    }

    let statuses: Vec<GameStatus> = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let base = seed.wrapping_add(2 * i);
            let mut a = build_agent(first, mcts_config, rollout_depth, base);
            let mut b = build_agent(second, mcts_config, rollout_depth, base.wrapping_add(1));
            play_game(game, &mut a, &mut b, &mut io::empty(), &mut io::sink(), false)
        })
        .collect::<Result<_>>()?;

    let mut summary = MatchSummary::default();
    for status in statuses {
        summary.record(status);
    }
    info!(?first, ?second, ?summary, "matches finished");
    Ok(summary)
}
