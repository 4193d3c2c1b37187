// src/systems/mod.rs
//! 盤面を書き換える「システム」たち。配る・動かす・めくる・勝ち判定！

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{move_to_foundation, move_to_tableau, MoveOutcome};
pub use stock_system::{draw_from_stock, DrawOutcome};
pub use win_condition_system::WinConditionSystem;
