// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! ダブルクリックされたカードを、置ける組札があればそこへ飛ばすんだ。

use log::debug;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::{StackType, FOUNDATION_COUNT};
use crate::logic::rules;

/// `card` を自動で置ける組札 (Foundation) を探す。
///
/// 4つの組札を 0 から順番に見て、最初に受け付けてくれた場所を返すよ。
/// A の場合は最初の空いてる枠になる。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<StackType> {
    let found = (0..FOUNDATION_COUNT as u8)
        .map(StackType::Foundation)
        .find(|&target| {
            board
                .pile(target)
                .is_some_and(|pile| rules::can_move_to_foundation(card, pile))
        });
    debug!("[AutoMove] {} -> {:?}", card, found);
    found
}
