// src/systems/deal_system.rs

use log::{info, warn};
use rand::Rng;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::{Pile, TABLEAU_COUNT};
use crate::logic::deck::{create_standard_deck, shuffle_deck};

/// 初期カード配置システム！
/// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// 新しいデッキを作ってシャッフルして、盤面に配る 🎉
    pub fn execute<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);
        info!("🃏 デッキ作成完了！ ({}枚)", deck.len());
        self.deal_from(board, deck);
    }

    /// 並び順の決まった `deck` をそのまま配る。
    ///
    /// # 処理の流れ
    /// 1. 盤面を空にして、デッキ全部を裏向きで山札 (Stock) に積む。
    /// 2. 場札の i 列目 (0始まり) に、山札の一番上から i+1 枚ずつ移す。
    ///    最後に置いた1枚だけ表向き！
    /// 3. 残り (52枚なら24枚) はそのままの順番で山札に残る。
    pub fn deal_from(&self, board: &mut Board, deck: Vec<Card>) {
        board.clear();
        board.stock = Pile::from(
            deck.into_iter()
                .map(|card| Card { is_face_up: false, ..card })
                .collect::<Vec<_>>(),
        );

        for column_index in 0..TABLEAU_COUNT {
            for row in 0..=column_index {
                let Some(mut card) = board.stock.pop() else {
                    warn!(
                        "デッキが足りない！ tableau-{} の {} 枚目で配るのをやめるよ",
                        column_index, row
                    );
                    return;
                };
                card.is_face_up = row == column_index;
                board.tableau[column_index].push(card);
            }
        }
        info!("  配り終わり！ 山札の残り: {}枚", board.stock.len());
    }
}
