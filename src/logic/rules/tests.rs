// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::board::Board;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{Pile, StackType};
use crate::error::MoveRejection;

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn pile_of(cards: &[Card]) -> Pile {
    Pile::from(cards.to_vec())
}

/// 1スート分の A..=K (全部表向き) を並べた組札。
fn full_foundation(suit: Suit) -> Pile {
    Pile::from(
        crate::components::card::ALL_RANKS
            .iter()
            .map(|&rank| up(suit, rank))
            .collect::<Vec<_>>(),
    )
}

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
}

#[test]
fn test_tableau_accepts_alternating_descending() {
    let red_eight = pile_of(&[up(Suit::Heart, Rank::Eight)]);
    assert!(can_move_to_tableau(&up(Suit::Spade, Rank::Seven), &red_eight), "黒7は赤8に置けるはず");
    assert!(can_move_to_tableau(&up(Suit::Club, Rank::Seven), &red_eight));

    let red_nine = pile_of(&[up(Suit::Diamond, Rank::Nine)]);
    assert!(!can_move_to_tableau(&up(Suit::Heart, Rank::Eight), &red_nine), "赤8は赤9に置けないはず");
    assert!(!can_move_to_tableau(&up(Suit::Spade, Rank::Seven), &red_nine), "ランクが2つ違うのはダメ");
    assert!(!can_move_to_tableau(&up(Suit::Spade, Rank::Ten), &red_nine), "上向きの並びはダメ");
}

#[test]
fn test_empty_tableau_takes_only_king() {
    let empty = Pile::new();
    assert!(can_move_to_tableau(&up(Suit::Heart, Rank::King), &empty));
    assert!(!can_move_to_tableau(&up(Suit::Heart, Rank::Queen), &empty), "空の列にKing以外は置けないはず");
    assert!(!can_move_to_tableau(&up(Suit::Spade, Rank::Ace), &empty));
}

#[test]
fn test_foundation_rules() {
    let empty = Pile::new();
    assert!(can_move_to_foundation(&up(Suit::Club, Rank::Ace), &empty), "空の組札にAは置けるはず");
    assert!(!can_move_to_foundation(&up(Suit::Club, Rank::Two), &empty), "空の組札にA以外は置けないはず");

    let club_ace = pile_of(&[up(Suit::Club, Rank::Ace)]);
    assert!(can_move_to_foundation(&up(Suit::Club, Rank::Two), &club_ace));
    assert!(!can_move_to_foundation(&up(Suit::Spade, Rank::Two), &club_ace), "スート違いはダメ");
    assert!(!can_move_to_foundation(&up(Suit::Club, Rank::Three), &club_ace), "ランク飛ばしはダメ");
}

#[test]
fn test_foundation_refuses_multi_card_runs() {
    let club_ace = pile_of(&[up(Suit::Club, Rank::Ace)]);
    let run = [up(Suit::Club, Rank::Two), up(Suit::Heart, Rank::Ace)];
    assert!(!can_run_move_to_foundation(&run, &club_ace));
    assert!(can_run_move_to_foundation(&run[..1], &club_ace));
    assert!(!can_run_move_to_foundation(&[], &club_ace));
}

#[test]
fn test_draggable_run() {
    let column = pile_of(&[
        Card::new(Suit::Heart, Rank::Queen), // 裏向き
        up(Suit::Spade, Rank::Nine),
        up(Suit::Heart, Rank::Eight),
        up(Suit::Club, Rank::Seven),
    ]);
    assert!(!is_draggable_run(&column, 0), "裏向きのカードからは持てない");
    assert!(is_draggable_run(&column, 1));
    assert!(is_draggable_run(&column, 2));
    assert!(is_draggable_run(&column, 3), "一番上の1枚はいつでもOK");
    assert!(!is_draggable_run(&column, 4), "範囲外は false");

    let broken = pile_of(&[
        up(Suit::Spade, Rank::Nine),
        up(Suit::Diamond, Rank::Eight),
        up(Suit::Heart, Rank::Seven), // 赤の上に赤
    ]);
    assert!(!is_draggable_run(&broken, 0));
    assert!(!is_draggable_run(&broken, 1));
    assert!(is_draggable_run(&broken, 2));
}

#[test]
fn test_draggable_run_on_empty_column() {
    assert!(!is_draggable_run(&Pile::new(), 0));
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
}

#[test]
fn test_win_condition() {
    let mut foundations = [
        full_foundation(Suit::Spade),
        full_foundation(Suit::Heart),
        full_foundation(Suit::Club),
        full_foundation(Suit::Diamond),
    ];
    assert!(check_win_condition(&foundations), "全部13枚ならクリア！");

    foundations[3].pop();
    assert!(!check_win_condition(&foundations), "12枚の組札が1つでもあればまだクリアじゃない");

    let empty: [Pile; 4] = Default::default();
    assert!(!check_win_condition(&empty));
}

#[test]
fn test_is_move_valid_dispatch() {
    let mut board = Board::new();
    board.tableau[0] = pile_of(&[up(Suit::Heart, Rank::Eight)]);
    board.tableau[1] = pile_of(&[up(Suit::Spade, Rank::Seven)]);
    let seven = [up(Suit::Spade, Rank::Seven)];

    assert_eq!(
        is_move_valid(&board, StackType::Tableau(1), &seven, StackType::Tableau(0)),
        Ok(())
    );
    assert_eq!(
        is_move_valid(&board, StackType::Tableau(1), &seven, StackType::Tableau(1)),
        Err(MoveRejection::IllegalDestination { target: StackType::Tableau(1) }),
        "同じ列へのドロップは却下"
    );
    assert_eq!(
        is_move_valid(&board, StackType::Tableau(1), &seven, StackType::Waste),
        Err(MoveRejection::IllegalDestination { target: StackType::Waste })
    );
    assert_eq!(
        is_move_valid(&board, StackType::Tableau(1), &seven, StackType::Foundation(0)),
        Err(MoveRejection::IllegalDestination { target: StackType::Foundation(0) })
    );
    assert!(is_move_valid(&board, StackType::Tableau(1), &[], StackType::Tableau(0)).is_err());
}
