//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::{Pile, FOUNDATION_COUNT};

/// 1つの組札が完成したときの枚数 (A から K まで)。
pub const FULL_FOUNDATION: usize = 13;

/// ゲームのクリア条件（4つの組札が全部13枚になったか）を判定する。
pub fn check_win_condition(foundations: &[Pile; FOUNDATION_COUNT]) -> bool {
    foundations.iter().all(|pile| pile.len() == FULL_FOUNDATION)
}
