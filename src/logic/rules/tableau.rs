//! 場札 (Tableau) へのカード移動ルールと、ドラッグできる並びの判定を定義するよ。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::is_alternating_descending;

/// 指定されたカードが、場札の列の一番上に置けるかチェックする。
///
/// - 列が空なら King だけ置ける🤴
/// - 空でなければ、色違いでランクがちょうど1つ小さいカードだけ
pub fn can_move_to_tableau(card_to_move: &Card, target_column: &Pile) -> bool {
    let result = match target_column.top() {
        Some(target_top_card) => is_alternating_descending(target_top_card, card_to_move),
        None => card_to_move.rank == Rank::King,
    };
    debug!(
        "[Rule Check] {} onto tableau top {:?} -> {}",
        card_to_move,
        target_column.top().map(|card| card.to_string()),
        result
    );
    result
}

/// 列の `start_index` から一番上までをまとめてドラッグできるかチェックする。
///
/// 開始位置のカードが裏向きなら並びを見る前に false。あとは隣り合う全ペアが
/// 表向き・色違い・ランク1つ下がりになっていれば OK。一番上の1枚だけなら当然 OK！
pub fn is_draggable_run(column: &Pile, start_index: usize) -> bool {
    let Some(start_card) = column.get(start_index) else {
        return false;
    };
    if !start_card.is_face_up {
        return false;
    }
    let run = &column.cards()[start_index..];
    run.iter().all(|card| card.is_face_up)
        && run
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| is_alternating_descending(lower, upper))
}
