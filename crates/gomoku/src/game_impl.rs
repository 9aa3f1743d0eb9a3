//! Implementation of the `Game` trait for N-in-a-row games.

use crate::board::{decode_action, encode_action};
use crate::config::FeatureEncoding;
use crate::observation::{encode_action_features, encode_features};
use crate::{GameState, GomokuConfig};
use zero_core::{Game, GameStatus, Player, Result, ZeroError};

/// Gomoku-class game: players alternate placing stones on empty cells; the
/// first to line up `n_in_row` stones wins, a full board without a line is a
/// draw. Actions are flat cell indices.
#[derive(Clone, Debug)]
pub struct Gomoku {
    config: GomokuConfig,
}

impl Gomoku {
    /// Build a game over `config`, rejecting geometry no game can be played on.
    pub fn new(config: GomokuConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 3×3 tic-tac-toe.
    pub fn tictactoe() -> Self {
        Self {
            config: GomokuConfig::tictactoe(),
        }
    }

    pub fn config(&self) -> &GomokuConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.board_width
    }

    pub fn encode(&self, row: usize, col: usize) -> usize {
        encode_action(self.config.board_width, row, col)
    }

    pub fn decode(&self, action: usize) -> (usize, usize) {
        decode_action(self.config.board_width, action)
    }

    /// Status after a stone was placed at `action` on an ongoing game.
    fn status_after(&self, state: &GameState, action: usize, mover: Player) -> GameStatus {
        let board = state.board();
        if board.completes_line(action, self.config.n_in_row) {
            GameStatus::Win(mover)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for Gomoku {
    fn default() -> Self {
        Self {
            config: GomokuConfig::default(),
        }
    }
}

impl Game for Gomoku {
    type State = GameState;
    type Action = usize;

    fn initial_state(&self) -> GameState {
        GameState::new(self.config.board_width, self.config.history_size)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<usize> {
        if state.status.is_terminal() {
            return Vec::new();
        }
        state.board().empty_cells()
    }

    fn apply(&self, state: &GameState, action: usize) -> Result<GameState> {
        if state.status.is_terminal() {
            return Err(ZeroError::InvalidAction(format!(
                "game is over ({:?}), cannot play {action}",
                state.status
            )));
        }

        let mover = state.current;
        let mut next = GameState {
            history: state.history.advance(action, mover)?,
            current: mover.opposite(),
            status: GameStatus::Ongoing,
            move_count: state.move_count + 1,
        };
        next.status = self.status_after(&next, action, mover);
        Ok(next)
    }

    fn current_player(&self, state: &GameState) -> Player {
        state.current
    }

    fn status(&self, state: &GameState) -> GameStatus {
        state.status
    }

    fn observe(&self, state: &GameState) -> Vec<f32> {
        match self.config.encoding {
            FeatureEncoding::BoardHistory => encode_features(state),
            FeatureEncoding::ActionHistory => encode_action_features(state),
        }
    }

    fn action_to_index(&self, action: usize) -> usize {
        action
    }

    fn index_to_action(&self, index: usize) -> Option<usize> {
        (index < self.num_actions()).then_some(index)
    }

    fn num_actions(&self) -> usize {
        self.config.action_size()
    }

    /// Accepts `row col`, `row,col` or a flat index.
    fn parse_action(&self, text: &str) -> Option<usize> {
        let parts: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [index] => index.parse().ok().and_then(|i| self.index_to_action(i)),
            [row, col] => {
                let row: usize = row.parse().ok()?;
                let col: usize = col.parse().ok()?;
                let width = self.config.board_width;
                (row < width && col < width).then(|| self.encode(row, col))
            }
            _ => None,
        }
    }

    fn render(&self, state: &GameState) -> String {
        state.board().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &Gomoku, moves: &[usize]) -> GameState {
        moves.iter().fold(game.initial_state(), |state, &action| {
            game.apply(&state, action).unwrap()
        })
    }

    #[test]
    fn test_initial_state() {
        let game = Gomoku::tictactoe();
        let state = game.initial_state();

        assert_eq!(game.current_player(&state), Player::First);
        assert_eq!(game.legal_actions(&state).len(), 9);
        assert!(!game.is_terminal(&state));
        assert_eq!(game.outcome(&state), None);
    }

    #[test]
    fn test_apply_places_and_alternates() {
        let game = Gomoku::tictactoe();
        let state = play(&game, &[4]);

        assert_eq!(state.board().get(4), Some(Player::First));
        assert_eq!(state.current_player(), Player::Second);
        assert_eq!(state.move_count(), 1);
        assert!(!game.legal_actions(&state).contains(&4));
    }

    #[test]
    fn test_apply_rejects_illegal_actions() {
        let game = Gomoku::tictactoe();
        let state = play(&game, &[4]);

        assert!(matches!(game.apply(&state, 4), Err(ZeroError::InvalidAction(_))));
        assert!(matches!(game.apply(&state, 9), Err(ZeroError::InvalidAction(_))));
    }

    #[test]
    fn test_first_wins_top_row() {
        let game = Gomoku::tictactoe();
        let state = play(&game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.status(&state), GameStatus::Win(Player::First));
        assert_eq!(game.outcome(&state), Some(1.0));
        assert!(game.legal_actions(&state).is_empty());
        assert!(game.apply(&state, 8).is_err());
    }

    #[test]
    fn test_second_wins_anti_diagonal() {
        let game = Gomoku::tictactoe();
        let state = play(&game, &[0, 2, 1, 4, 3, 6]);

        assert_eq!(state.winner(), Some(Player::Second));
        assert_eq!(game.outcome(&state), Some(1.0));
    }

    #[test]
    fn test_draw_on_full_board() {
        let game = Gomoku::tictactoe();
        // X O X / X X O / O X O
        let state = play(&game, &[0, 1, 2, 5, 3, 6, 4, 8, 7]);

        assert_eq!(game.status(&state), GameStatus::Draw);
        assert_eq!(game.outcome(&state), Some(0.0));
    }

    #[test]
    fn test_new_rejects_unplayable_config() {
        let empty = GomokuConfig {
            board_width: 0,
            ..GomokuConfig::default()
        };
        assert!(matches!(Gomoku::new(empty), Err(ZeroError::InvalidConfig(_))));

        let unwinnable = GomokuConfig {
            board_width: 4,
            n_in_row: 5,
            ..GomokuConfig::tictactoe()
        };
        assert!(Gomoku::new(unwinnable).is_err());
        assert!(Gomoku::new(GomokuConfig::default()).is_ok());
    }

    #[test]
    fn test_parse_action_formats() {
        let game = Gomoku::new(GomokuConfig::new(5, 4, 1).unwrap()).unwrap();
        assert_eq!(game.parse_action("1 2"), Some(7));
        assert_eq!(game.parse_action(" 1,2 "), Some(7));
        assert_eq!(game.parse_action("24"), Some(24));
        assert_eq!(game.parse_action("25"), None);
        assert_eq!(game.parse_action("5 0"), None);
        assert_eq!(game.parse_action("a b"), None);
        assert_eq!(game.parse_action(""), None);
    }

    #[test]
    fn test_render_shows_stones() {
        let game = Gomoku::tictactoe();
        let state = play(&game, &[0, 4]);
        let text = game.render(&state);
        assert!(text.contains('X'));
        assert!(text.contains('O'));
    }
}
