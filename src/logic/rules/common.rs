//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// `upper` を `lower` の上に積める並びか (場札のルール)。
/// 色が違って、ランクがちょうど1つ小さいこと！
pub(crate) fn is_alternating_descending(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color() && upper.rank.value() + 1 == lower.rank.value()
}

/// `upper` を `lower` の上に積める並びか (組札のルール)。
/// 同じスートで、ランクがちょうど1つ大きいこと！
pub(crate) fn is_same_suit_ascending(lower: &Card, upper: &Card) -> bool {
    lower.suit == upper.suit && lower.rank.value() + 1 == upper.rank.value()
}
