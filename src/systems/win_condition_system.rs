// src/systems/win_condition_system.rs

use log::info;

use crate::board::Board;
use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 盤面を見て4つの組札が全部埋まっていたら、GameState を `Won` にする。
#[derive(Default, Debug, Clone, Copy)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    /// 新しい WinConditionSystem を作成するよ。
    pub fn new() -> Self {
        Self
    }

    /// 勝利条件をチェックして、`Playing` から `Won` に変わったときだけ true を返す。
    pub fn run(&self, board: &Board, state: &mut GameState) -> bool {
        if state.status != GameStatus::Playing {
            return false;
        }
        if !check_win_condition(board.foundations()) {
            return false;
        }
        info!("🎉 ゲームクリア！ おめでとう！ 🎉 (moves: {}, score: {})", state.moves, state.score);
        state.status = GameStatus::Won;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
    use crate::components::stack::Pile;

    fn won_board() -> Board {
        let mut board = Board::new();
        for (pile, &suit) in board.foundations.iter_mut().zip(ALL_SUITS.iter()) {
            *pile = Pile::from(ALL_RANKS.iter().map(|&rank| Card::face_up(suit, rank)).collect::<Vec<_>>());
        }
        board
    }

    #[test]
    fn test_win_transition_happens_once() {
        let board = won_board();
        let mut state = GameState { status: GameStatus::Playing, ..GameState::new() };
        let system = WinConditionSystem::new();

        assert!(system.run(&board, &mut state));
        assert_eq!(state.status, GameStatus::Won);
        assert!(!system.run(&board, &mut state), "2回目は何も起きない");
    }

    #[test]
    fn test_not_won_with_missing_card() {
        let mut board = won_board();
        board.foundations[1].pop();
        let mut state = GameState { status: GameStatus::Playing, ..GameState::new() };
        assert!(!WinConditionSystem::new().run(&board, &mut state));
        assert_eq!(state.status, GameStatus::Playing);
    }
}
