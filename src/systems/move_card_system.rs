// src/systems/move_card_system.rs
//! ドロップが受け付けられた後の「実際の移動」を担当するよ！🚚
//!
//! 移動元からまとまりを外して移動先に積み、裏向きのカードが出てきたら表にして、
//! 手数と点数を更新する。チェックは全部書き換えの前にやるので、
//! `Err` が返ったときは盤面も点数も一切変わってないよ。

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::ScoreConfig;
use crate::error::{DragSourceProblem, MoveRejection};
use crate::logic::rules;

/// 成功した移動1回分の結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub source: StackType,
    pub target: StackType,
    pub cards_moved: usize,
    /// 移動元の列で表になったカード (あれば)
    pub revealed: Option<Card>,
    pub score_delta: u32,
    pub moves_delta: u32,
    /// この移動で4つの組札が全部埋まったか
    pub won: bool,
}

/// `source` の上から `run_len` 枚を持ち上げられるか確認して、そのまとまりを返す。
///
/// 組札と山札からは持ち上げられない。捨て札は一番上の1枚だけ。
/// 場札は `is_draggable_run` が通る並びだけ。
pub fn movable_run(board: &Board, source: StackType, run_len: usize) -> Result<&[Card], MoveRejection> {
    match source {
        StackType::Foundation(_) => return Err(DragSourceProblem::Foundation.into()),
        StackType::Stock => return Err(DragSourceProblem::Stock.into()),
        StackType::Waste | StackType::Tableau(_) => {}
    }
    let pile = board.pile(source).ok_or(DragSourceProblem::NoSuchCard)?;
    if pile.is_empty() {
        return Err(DragSourceProblem::EmptyPile.into());
    }
    if run_len == 0 || run_len > pile.len() {
        return Err(MoveRejection::InvalidRun);
    }
    let start = pile.len() - run_len;
    match source {
        StackType::Waste if run_len != 1 => return Err(DragSourceProblem::NotTopOfWaste.into()),
        StackType::Tableau(_) => {
            if !pile.cards()[start].is_face_up {
                return Err(DragSourceProblem::FaceDown.into());
            }
            if !rules::is_draggable_run(pile, start) {
                return Err(MoveRejection::InvalidRun);
            }
        }
        _ => {}
    }
    Ok(&pile.cards()[start..])
}

/// `source` の上から `run_len` 枚を場札 `dest_index` 列目に移す。
pub fn move_to_tableau(
    board: &mut Board,
    state: &mut GameState,
    config: &ScoreConfig,
    source: StackType,
    run_len: usize,
    dest_index: u8,
) -> Result<MoveOutcome, MoveRejection> {
    let target = StackType::Tableau(dest_index);
    let run = movable_run(board, source, run_len)?;
    rules::is_move_valid(board, source, run, target)?;
    apply_move(board, state, config, source, target, run_len, 0)
}

/// `source` の一番上の1枚を組札 `dest_index` 番に移す。+foundation_bonus！
pub fn move_to_foundation(
    board: &mut Board,
    state: &mut GameState,
    config: &ScoreConfig,
    source: StackType,
    dest_index: u8,
) -> Result<MoveOutcome, MoveRejection> {
    let target = StackType::Foundation(dest_index);
    let run = movable_run(board, source, 1)?;
    rules::is_move_valid(board, source, run, target)?;
    apply_move(board, state, config, source, target, 1, config.foundation_bonus)
}

/// 検証済みの移動を実行する。ここから先は盤面を書き換えるよ。
fn apply_move(
    board: &mut Board,
    state: &mut GameState,
    config: &ScoreConfig,
    source: StackType,
    target: StackType,
    run_len: usize,
    landing_bonus: u32,
) -> Result<MoveOutcome, MoveRejection> {
    let (source_pile, target_pile) = board
        .pile_pair_mut(source, target)
        .ok_or(MoveRejection::IllegalDestination { target })?;
    let moved = source_pile.pop_n(run_len).ok_or(MoveRejection::InvalidRun)?;
    let cards_moved = moved.len();
    target_pile.extend(moved);

    let revealed = reveal_new_top(board, source);
    let mut score_delta = landing_bonus;
    if revealed.is_some() {
        score_delta += config.flip_bonus;
    }
    // どの移動でも最後に手数 +1、+move_bonus
    score_delta += config.move_bonus;
    state.add_score(score_delta);
    state.count_move();

    let won = rules::check_win_condition(&board.foundations);
    info!(
        "[Move] {} 枚: {} -> {} (score +{}, revealed: {:?})",
        cards_moved, source, target, score_delta, revealed
    );
    Ok(MoveOutcome {
        source,
        target,
        cards_moved,
        revealed,
        score_delta,
        moves_delta: 1,
        won,
    })
}

/// 場札の列の一番上が裏向きなら表にして、そのカードを返す。
fn reveal_new_top(board: &mut Board, source: StackType) -> Option<Card> {
    let StackType::Tableau(_) = source else {
        return None;
    };
    let pile = board.pile_mut(source)?;
    let top = *pile.top()?;
    if top.is_face_up {
        return None;
    }
    pile.set_face_up(top.id(), true);
    Some(Card { is_face_up: true, ..top })
}
