//! Feature encoding for the evaluator.
//!
//! Layout is `(2 * H + 1) × W × W`, plane-major, with cell index
//! `row * W + col` inside each plane (`H` = history size, `W` = board width):
//!
//! - planes `0..H`: stones of the player to move, one plane per history
//!   entry, most recent first
//! - planes `H..2H`: opponent stones, same ordering
//! - plane `2H`: all ones when `First` is to move, all zeros otherwise
//!
//! `encode_action_features` is the alternative `(H + 3) × W × W` layout:
//!
//! - plane `0`: stones of the player to move on the current board
//! - plane `1`: opponent stones on the current board
//! - planes `2..H + 2`: one-hot cell of each action in the window, most
//!   recent first; all zeros before the game had that many moves
//! - plane `H + 2`: the turn plane, as above
//!
//! A trained evaluator depends on the exact layout it was trained with.

use crate::state::GameState;
use zero_core::Player;

/// Flat feature vector for `state`.
pub fn encode_features(state: &GameState) -> Vec<f32> {
    let history = state.history();
    let depth = history.len();
    let area = state.board().len();
    let mover = state.current_player();
    let opponent = mover.opposite();

    let mut features = vec![0.0f32; (2 * depth + 1) * area];

    for (age, board) in history.boards().enumerate() {
        let mover_plane = age * area;
        let opponent_plane = (depth + age) * area;
        for (cell, stone) in board.cells().iter().enumerate() {
            match stone {
                Some(p) if *p == mover => features[mover_plane + cell] = 1.0,
                Some(p) if *p == opponent => features[opponent_plane + cell] = 1.0,
                _ => {}
            }
        }
    }

    if mover == Player::First {
        let turn_plane = 2 * depth * area;
        features[turn_plane..].fill(1.0);
    }

    features
}

/// Flat feature vector for `state` with the action window as one-hot planes.
pub fn encode_action_features(state: &GameState) -> Vec<f32> {
    let history = state.history();
    let depth = history.len();
    let area = state.board().len();
    let mover = state.current_player();

    let mut features = vec![0.0f32; (depth + 3) * area];

    for (cell, stone) in state.board().cells().iter().enumerate() {
        match stone {
            Some(p) if *p == mover => features[cell] = 1.0,
            Some(_) => features[area + cell] = 1.0,
            None => {}
        }
    }

    for (age, action) in history.actions().enumerate() {
        if let Some(cell) = action {
            features[(2 + age) * area + cell] = 1.0;
        }
    }

    if mover == Player::First {
        let turn_plane = (depth + 2) * area;
        features[turn_plane..].fill(1.0);
    }

    features
}
