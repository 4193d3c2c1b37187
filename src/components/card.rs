// src/components/card.rs

// serde を使う宣言！カード情報を JS 側に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::rules::common::CardColor;

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♣️♦️
///
/// 並び順は `ALL_SUITS` と同じで、`CardId` の計算にも使うから勝手に並べ替えないでね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Heart,   // ❤️
    Club,    // ♣️
    Diamond, // ♦️
}

/// 全スートの配列。デッキ生成のループで使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

impl Suit {
    /// `ALL_SUITS` の中での位置 (0-3)。
    pub fn index(self) -> u8 {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Club => 2,
            Suit::Diamond => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        }
    }

    /// スートから色を決めるよ。ハートとダイヤは赤、それ以外は黒！
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord で A < 2 < ... < K の大小比較ができる👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランクの配列 (A から K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 数値としてのランク (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 表示用のラベル ("A", "10", "K" とか)。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カード1枚を指す ID だよ。
///
/// `スート番号 * 13 + (ランク - 1)` で 0..52 の数字になる。スートとランクの組み合わせで
/// 一意に決まるから、ランダムな文字列 ID はいらないんだ。描画側がカードを追いかけるための
/// ハンドルで、ルール判定には使わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    /// 標準デッキのカード枚数。
    pub const COUNT: usize = 52;

    pub fn from_parts(suit: Suit, rank: Rank) -> Self {
        CardId(suit.index() * 13 + (rank.value() - 1))
    }

    /// 0..52 の範囲内かどうか。JS から来た数字はまずこれでチェック！
    pub fn is_valid(self) -> bool {
        usize::from(self.0) < Self::COUNT
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// カードそのものを表すよ！🃏
///
/// - `suit`, `rank`: 変わらないカードの正体
/// - `is_face_up`: 表向きなら true (これだけはゲーム中に変わる)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。デッキ生成直後は全部これ！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    pub fn id(&self) -> CardId {
        CardId::from_parts(self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_card_component() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "作った直後は裏向きのはず！");
        assert_eq!(card.to_string(), "A♠");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);
    }

    #[test]
    fn rank_values_run_from_one_to_thirteen() {
        let values: Vec<u8> = ALL_RANKS.iter().map(|rank| rank.value()).collect();
        assert_eq!(values, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn card_colors() {
        assert_eq!(Card::new(Suit::Heart, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Diamond, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Club, Rank::Two).color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Spade, Rank::Two).color(), CardColor::Black);
    }

    #[test]
    fn card_ids_are_unique() {
        let mut seen = HashSet::new();
        for suit in ALL_SUITS {
            for rank in ALL_RANKS {
                let id = CardId::from_parts(suit, rank);
                assert!(id.is_valid());
                assert!(seen.insert(id), "ID {} が重複してる！", id);
                assert_eq!(Card::face_up(suit, rank).id(), id);
            }
        }
        assert_eq!(seen.len(), CardId::COUNT);
        assert!(!CardId(52).is_valid());
    }
}
