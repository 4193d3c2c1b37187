// src/systems/stock_system.rs
//! Handles clicks on the Stock pile (dealing to Waste, resetting Waste).

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::config::ScoreConfig;
use crate::logic::rules::stock_waste;

/// 山札クリックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOutcome {
    /// 1枚めくって捨て札に置いた
    Drawn { card: Card },
    /// 捨て札を裏返して山札に戻した
    Recycled { count: usize },
    /// 何も起きなかった (山札も捨て札も空、ドラッグ中、クリア後)
    Idle,
}

/// Deals one card from the Stock pile to the Waste pile, face up.
/// Returns the dealt card, or `None` when the stock is empty.
pub fn deal_one_card_from_stock(board: &mut Board) -> Option<Card> {
    if !stock_waste::can_deal_from_stock(board.stock.is_empty()) {
        info!("  Stock is empty. Cannot deal.");
        return None;
    }
    let mut card = board.stock.pop()?;
    card.is_face_up = true;
    board.waste.push(card);
    info!("  Card {} moved to Waste.", card);
    Some(card)
}

/// Resets the Waste pile back to the Stock pile when Stock is empty.
/// The waste is reversed and turned face down, so the first card drawn is drawn first again.
/// Returns how many cards went back, or `None` if the reset was not allowed.
pub fn reset_waste_to_stock(board: &mut Board) -> Option<usize> {
    if !stock_waste::can_reset_stock_from_waste(board.stock.is_empty(), board.waste.is_empty()) {
        info!("  Reset not allowed (stock: {}, waste: {}).", board.stock.len(), board.waste.len());
        return None;
    }
    let recycled: Vec<Card> = board
        .waste
        .take_all()
        .into_iter()
        .rev()
        .map(|card| Card { is_face_up: false, ..card })
        .collect();
    let count = recycled.len();
    board.stock.extend(recycled);
    info!("  Moved {} cards from Waste back to Stock.", count);
    Some(count)
}

/// 山札クリック1回分。めくれたら +draw_bonus、リサイクルは手数だけ +1。
pub fn draw_from_stock(board: &mut Board, state: &mut GameState, config: &ScoreConfig) -> DrawOutcome {
    if let Some(card) = deal_one_card_from_stock(board) {
        state.count_move();
        state.add_score(config.draw_bonus);
        return DrawOutcome::Drawn { card };
    }
    match reset_waste_to_stock(board) {
        Some(count) => {
            state.count_move();
            DrawOutcome::Recycled { count }
        }
        None => DrawOutcome::Idle,
    }
}
