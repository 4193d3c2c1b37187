// src/error.rs
//! 「その操作はできないよ」を表す型たち。
//!
//! 普通に遊んでいて起こる失敗は全部ここの「却下 (rejection)」で、パニックはしない。
//! 却下を返す時点では盤面は一切書き換わっていないから、巻き戻しもいらないんだ。

use thiserror::Error;

use crate::components::card::CardId;
use crate::components::stack::StackType;

/// ドラッグを始められなかった理由。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragSourceProblem {
    #[error("the card is face down")]
    FaceDown,
    #[error("the pile is empty")]
    EmptyPile,
    #[error("foundation cards cannot be dragged")]
    Foundation,
    #[error("stock cards cannot be dragged, draw them instead")]
    Stock,
    #[error("only the top waste card can be dragged")]
    NotTopOfWaste,
    #[error("no such card on the board")]
    NoSuchCard,
}

/// 移動やドラッグが却下されたときの理由。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("invalid drag source: {0}")]
    InvalidDragSource(DragSourceProblem),
    #[error("the cards from here down do not form an alternating descending run")]
    InvalidRun,
    #[error("{target} does not accept this card")]
    IllegalDestination { target: StackType },
    #[error("another drag is already in progress")]
    DragInProgress,
    #[error("no drag is in progress")]
    NoActiveDrag,
    #[error("the game is already won, start a new one")]
    GameFinished,
    #[error("no foundation accepts this card")]
    NoAutoMove,
}

impl MoveRejection {
    /// JS 側で分岐に使える固定のコード文字列。
    pub fn code(&self) -> &'static str {
        match self {
            MoveRejection::InvalidDragSource(_) => "invalid_drag_source",
            MoveRejection::InvalidRun => "invalid_run",
            MoveRejection::IllegalDestination { .. } => "illegal_destination",
            MoveRejection::DragInProgress => "drag_in_progress",
            MoveRejection::NoActiveDrag => "no_active_drag",
            MoveRejection::GameFinished => "game_finished",
            MoveRejection::NoAutoMove => "no_auto_move",
        }
    }
}

impl From<DragSourceProblem> for MoveRejection {
    fn from(problem: DragSourceProblem) -> Self {
        MoveRejection::InvalidDragSource(problem)
    }
}

/// 外から渡された盤面がちゃんとした52枚になってないとき。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("a board holds {expected} cards, got {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        let rejection = MoveRejection::IllegalDestination { target: StackType::Tableau(4) };
        assert_eq!(rejection.to_string(), "tableau-4 does not accept this card");
        assert_eq!(rejection.code(), "illegal_destination");

        let rejection: MoveRejection = DragSourceProblem::FaceDown.into();
        assert_eq!(rejection.to_string(), "invalid drag source: the card is face down");
        assert_eq!(rejection.code(), "invalid_drag_source");

        assert_eq!(MoveRejection::NoAutoMove.code(), "no_auto_move");
    }
}
