// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::Rng;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートごと (♠ ♥ ♣ ♦) に A から K の順で並ぶ。全部裏向き (`is_face_up: false`)！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Fisher–Yates でシャッフルするよ🎲
///
/// 最後の要素から順に、`[0, i]` から一様に選んだ位置と入れ替えていく。
/// 0枚や1枚のときは何もしない。乱数生成器は呼び出し側から渡すから、
/// テストでは seed 固定の `StdRng` で同じ結果を再現できる！
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}
