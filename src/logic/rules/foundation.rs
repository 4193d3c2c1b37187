//! 組札 (Foundation) へのカード移動ルールを定義するよ。
//!
//! 組札の4つの枠は最初はどのスートでも受け付ける。最初に置かれた A で
//! その枠のスートが決まる仕組みだよ (インデックスとスートの固定対応はなし)。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::is_same_suit_ascending;

/// 指定されたカードが、組札の一番上に置けるかチェックする。
pub fn can_move_to_foundation(card_to_move: &Card, target_foundation: &Pile) -> bool {
    let result = match target_foundation.top() {
        // 組札が空の場合、置けるのはエース (A) だけ！
        None => card_to_move.rank == Rank::Ace,
        Some(target_top_card) => is_same_suit_ascending(target_top_card, card_to_move),
    };
    debug!(
        "[Foundation Rule] {} onto foundation top {:?} -> {}",
        card_to_move,
        target_foundation.top().map(|card| card.to_string()),
        result
    );
    result
}

/// 持ち上げたカードのまとまりを組札に置けるか。2枚以上はいつでもダメ！
pub fn can_run_move_to_foundation(run: &[Card], target_foundation: &Pile) -> bool {
    match run {
        [single] => can_move_to_foundation(single, target_foundation),
        _ => false,
    }
}
