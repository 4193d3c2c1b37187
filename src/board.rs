// src/board.rs
//! 盤面 (山札・捨て札・組札4つ・場札7列) をまとめて持つ構造体だよ！

use std::collections::HashSet;

use crate::components::card::{Card, CardId};
use crate::components::stack::{Pile, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::LayoutError;

/// ゲームの全部の山。GameSession だけが持ち主になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
    pub(crate) tableau: [Pile; TABLEAU_COUNT],
}

impl Board {
    /// 全部空っぽの盤面。配札前の状態だね。
    pub fn new() -> Self {
        Self::default()
    }

    /// 山を全部指定して盤面を組み立てる。52枚そろっていて重複がないときだけ OK。
    pub fn from_piles(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_COUNT],
        tableau: [Pile; TABLEAU_COUNT],
    ) -> Result<Self, LayoutError> {
        let board = Self { stock, waste, foundations, tableau };
        let found = board.card_count();
        if found != CardId::COUNT {
            return Err(LayoutError::WrongCardCount { expected: CardId::COUNT, found });
        }
        let mut seen = HashSet::new();
        if let Some(card) = board.all_cards().find(|card| !seen.insert(card.id())) {
            return Err(LayoutError::DuplicateCard(card.id()));
        }
        Ok(board)
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn tableau(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    /// 場所を指定して山を取得。範囲外のインデックスなら None。
    pub fn pile(&self, stack: StackType) -> Option<&Pile> {
        match stack {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(usize::from(i)),
            StackType::Tableau(i) => self.tableau.get(usize::from(i)),
        }
    }

    pub(crate) fn pile_mut(&mut self, stack: StackType) -> Option<&mut Pile> {
        match stack {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            StackType::Tableau(i) => self.tableau.get_mut(usize::from(i)),
        }
    }

    /// 2つの違う山を同時に書き換えたいとき用。同じ山か範囲外なら None。
    pub(crate) fn pile_pair_mut(&mut self, first: StackType, second: StackType) -> Option<(&mut Pile, &mut Pile)> {
        if first == second {
            return None;
        }
        let piles = std::iter::once((StackType::Stock, &mut self.stock))
            .chain(std::iter::once((StackType::Waste, &mut self.waste)))
            .chain(
                self.foundations
                    .iter_mut()
                    .enumerate()
                    .map(|(i, pile)| (StackType::Foundation(i as u8), pile)),
            )
            .chain(
                self.tableau
                    .iter_mut()
                    .enumerate()
                    .map(|(i, pile)| (StackType::Tableau(i as u8), pile)),
            );
        let (mut found_first, mut found_second) = (None, None);
        for (stack, pile) in piles {
            if stack == first {
                found_first = Some(pile);
            } else if stack == second {
                found_second = Some(pile);
            }
        }
        Some((found_first?, found_second?))
    }

    /// カード ID から「どの山の何番目か」を探す。
    pub fn locate(&self, id: CardId) -> Option<(StackType, usize)> {
        StackType::all().find_map(|stack| {
            self.pile(stack)
                .and_then(|pile| pile.position(id))
                .map(|index| (stack, index))
        })
    }

    /// 盤面にある全カード (順不同)。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        StackType::all()
            .filter_map(move |stack| self.pile(stack))
            .flat_map(|pile| pile.cards().iter())
    }

    pub fn card_count(&self) -> usize {
        StackType::all()
            .filter_map(|stack| self.pile(stack))
            .map(Pile::len)
            .sum()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// 全部の山を空にする (新しいゲームの前のお掃除🧹)。
    pub(crate) fn clear(&mut self) {
        *self = Board::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.card_count(), 0);
        assert!(board.pile(StackType::Foundation(4)).is_none());
        assert!(board.pile(StackType::Tableau(6)).is_some());
    }

    #[test]
    fn test_locate_and_counts() {
        let mut board = Board::new();
        board.tableau[3].push(Card::new(Suit::Club, Rank::Four));
        board.tableau[3].push(Card::face_up(Suit::Heart, Rank::Nine));
        board.foundations[1].push(Card::face_up(Suit::Spade, Rank::Ace));

        let nine = CardId::from_parts(Suit::Heart, Rank::Nine);
        assert_eq!(board.locate(nine), Some((StackType::Tableau(3), 1)));
        assert_eq!(board.locate(CardId::from_parts(Suit::Diamond, Rank::Ace)), None);
        assert_eq!(board.card_count(), 3);
        assert_eq!(board.foundation_card_count(), 1);
        assert_eq!(board.all_cards().count(), 3);

        board.clear();
        assert_eq!(board.card_count(), 0);
    }

    fn full_deck() -> Vec<Card> {
        crate::logic::deck::create_standard_deck()
    }

    #[test]
    fn test_from_piles_checks_the_deck() {
        let mut deck = full_deck();
        let waste = Pile::from(deck.split_off(50));
        let board = Board::from_piles(Pile::from(deck.clone()), waste, Default::default(), Default::default())
            .expect("52枚ちょうど");
        assert_eq!(board.waste().len(), 2);
        assert_eq!(board.card_count(), 52);

        assert_eq!(
            Board::from_piles(Pile::from(deck.clone()), Pile::new(), Default::default(), Default::default()),
            Err(LayoutError::WrongCardCount { expected: 52, found: 50 })
        );

        let doubled = deck[0];
        let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
        tableau[4] = Pile::from(vec![doubled, doubled]);
        assert_eq!(
            Board::from_piles(Pile::from(deck), Pile::new(), Default::default(), tableau),
            Err(LayoutError::DuplicateCard(doubled.id()))
        );
    }

    #[test]
    fn test_pile_pair_mut() {
        let mut board = Board::new();
        board.waste.push(Card::face_up(Suit::Club, Rank::Ace));
        {
            let (waste, foundation) = board
                .pile_pair_mut(StackType::Waste, StackType::Foundation(2))
                .expect("別々の山なら両方取れる");
            if let Some(cards) = waste.pop_n(1) {
                foundation.extend(cards);
            }
        }
        assert!(board.waste().is_empty());
        assert_eq!(board.foundations()[2].len(), 1);

        assert!(board.pile_pair_mut(StackType::Tableau(2), StackType::Tableau(2)).is_none());
        assert!(board.pile_pair_mut(StackType::Tableau(2), StackType::Tableau(7)).is_none());
        assert!(board.pile_pair_mut(StackType::Foundation(4), StackType::Stock).is_none());
    }
}
