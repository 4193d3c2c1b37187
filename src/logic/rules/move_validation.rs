// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::MoveRejection;
use crate::logic::rules::{foundation, tableau};

/// `source` から持ち上げた `run` (一番下のカードが先頭) を `target` に置けるか検証する。
///
/// 置けない理由はぜんぶ `IllegalDestination` にまとめて返すよ。
pub fn is_move_valid(
    board: &Board,
    source: StackType,
    run: &[Card],
    target: StackType,
) -> Result<(), MoveRejection> {
    let rejected = MoveRejection::IllegalDestination { target };

    // 元の場所に戻すのは「移動」じゃない
    if source == target {
        debug!("[Rules Validation] {} -> {} is the same pile", source, target);
        return Err(rejected);
    }
    let (Some(lead_card), Some(target_pile)) = (run.first(), board.pile(target)) else {
        return Err(rejected);
    };

    let accepted = match target {
        StackType::Tableau(_) => tableau::can_move_to_tableau(lead_card, target_pile),
        StackType::Foundation(_) => foundation::can_run_move_to_foundation(run, target_pile),
        StackType::Stock | StackType::Waste => {
            // Stock, Waste への直接移動は許可されない
            debug!("[Rules Validation] Moving to {} is not allowed.", target);
            false
        }
    };
    if accepted {
        Ok(())
    } else {
        Err(rejected)
    }
}
