// src/components/stack.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::components::card::{Card, CardId};

/// 組札 (Foundation) の数。
pub const FOUNDATION_COUNT: usize = 4;
/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;

/// カードが存在する場所の種類を示す Enum だよ。
///
/// JSON や JS 側では `"stock"`, `"waste"`, `"foundation-2"`, `"tableau-5"` みたいな
/// 文字列で表すよ。HTML の要素 ID と同じ形だから、描画側はそのまま渡せば OK！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードを上 (末尾) から引く。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。番号 (0-3) を持つけど、スートは最初に置かれた A で決まる。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// インデックスが範囲内かどうか。`Foundation(9)` みたいなのは false！
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(i) => usize::from(i) < FOUNDATION_COUNT,
            StackType::Tableau(i) => usize::from(i) < TABLEAU_COUNT,
        }
    }

    /// 盤面にある全部の場所 (13 か所)。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Stock => f.write_str("stock"),
            StackType::Waste => f.write_str("waste"),
            StackType::Foundation(i) => write!(f, "foundation-{}", i),
            StackType::Tableau(i) => write!(f, "tableau-{}", i),
        }
    }
}

/// 場所の文字列がおかしかったときのエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pile id: {0:?}")]
pub struct ParseStackTypeError(pub String);

impl FromStr for StackType {
    type Err = ParseStackTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "stock" => Some(StackType::Stock),
            "waste" => Some(StackType::Waste),
            _ => {
                if let Some(rest) = s.strip_prefix("foundation-") {
                    rest.parse().ok().map(StackType::Foundation)
                } else if let Some(rest) = s.strip_prefix("tableau-") {
                    rest.parse().ok().map(StackType::Tableau)
                } else {
                    None
                }
            }
        };
        parsed
            .filter(|stack| stack.is_valid())
            .ok_or_else(|| ParseStackTypeError(s.to_owned()))
    }
}

impl From<StackType> for String {
    fn from(stack: StackType) -> Self {
        stack.to_string()
    }
}

impl TryFrom<String> for StackType {
    type Error = ParseStackTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// カードの山ひとつ分。下 (先頭) から上 (末尾) の順に並ぶよ。
///
/// 読み取りは誰でもできるけど、書き換え (push/pop など) はクレート内の
/// 配札・移動・山札処理からしかできないようにしてある。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード (末尾)。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 全カードを下から順に。描画用！
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// 指定 ID のカードが何番目にあるか。
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 上から `n` 枚を、並び順を保ったまま取り外す。
    /// `n` が 0 か枚数より多いときは何もせず None を返すよ。
    pub(crate) fn pop_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if n == 0 || n > self.cards.len() {
            return None;
        }
        let split_at = self.cards.len() - n;
        Some(self.cards.split_off(split_at))
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// 指定 ID のカードの向きを変える。見つからなければ false。
    pub(crate) fn set_face_up(&mut self, id: CardId, face_up: bool) -> bool {
        match self.cards.iter_mut().find(|card| card.id() == id) {
            Some(card) => {
                card.is_face_up = face_up;
                true
            }
            None => false,
        }
    }

    /// 中身を全部取り出して空にする。
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
