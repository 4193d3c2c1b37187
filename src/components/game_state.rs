// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// Dealing (配札中、すぐ Playing になる) → Playing → Won。
/// Won から抜けるのは「新しいゲーム」だけ！🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 配札中。new_game の中だけで見える一瞬の状態。
    Dealing,
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 これ以上は動かせない。
    Won,
}

/// 手数とスコアとステータスをまとめて持つよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// 手数。増えるだけで減らない。
    pub moves: u32,
    /// スコア。今のルールでは増えるだけ。
    pub score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self { status: GameStatus::Dealing, moves: 0, score: 0 }
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn count_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
