// src/app/drag_handler.rs
//! Handles card dragging gestures (start, drop, cancel, double click).

use std::sync::{Arc, Mutex};

use log::info;

use super::lock_session;
use crate::components::card::{Card, CardId};
use crate::components::stack::{ParseStackTypeError, StackType};
use crate::error::MoveRejection;
use crate::protocol::{CardData, DragResponse, DropResponse, RejectionData, StatusData};
use crate::session::GameSession;
use crate::systems::MoveOutcome;

fn drag_response(result: Result<Vec<Card>, MoveRejection>, session: &GameSession) -> DragResponse {
    match result {
        Ok(cards) => {
            // ドラッグ中のカードはまだ元の山にいるので、場所はそこから引ける
            let cards = cards
                .iter()
                .filter_map(|card| {
                    let (stack, position) = session.board().locate(card.id())?;
                    Some(CardData::new(card, stack, position))
                })
                .collect();
            DragResponse::Started { cards }
        }
        Err(rejection) => {
            info!("Drag rejected: {}", rejection);
            DragResponse::Rejected { rejection: RejectionData::from(&rejection) }
        }
    }
}

fn drop_response(result: Result<MoveOutcome, MoveRejection>, session: &GameSession) -> DropResponse {
    match result {
        Ok(outcome) => DropResponse::Applied { outcome, status: StatusData::from_session(session) },
        Err(rejection) => DropResponse::Rejected { rejection: RejectionData::from(&rejection) },
    }
}

/// カード ID でドラッグ開始 (GameApp::request_drag_start のロジック)
pub fn handle_drag_start(session_arc: &Arc<Mutex<GameSession>>, card_id: u8) -> DragResponse {
    let mut session = lock_session(session_arc);
    let result = session.request_drag_start(CardId(card_id));
    drag_response(result, &session)
}

/// 山の名前 ("tableau-3" など) と位置でドラッグ開始
pub fn handle_drag_from(
    session_arc: &Arc<Mutex<GameSession>>,
    pile: &str,
    index: usize,
) -> Result<DragResponse, ParseStackTypeError> {
    let stack: StackType = pile.parse()?;
    let mut session = lock_session(session_arc);
    let result = session.request_drag_from(stack, index);
    Ok(drag_response(result, &session))
}

/// ドラッグ中のカードを `pile` に落とせるか
pub fn handle_can_drop(session_arc: &Arc<Mutex<GameSession>>, pile: &str) -> Result<bool, ParseStackTypeError> {
    let target: StackType = pile.parse()?;
    Ok(lock_session(session_arc).can_drop_at(target))
}

/// ドラッグ終了時の処理 (GameApp::handle_drag_end のロジック)
pub fn handle_drag_end(session_arc: &Arc<Mutex<GameSession>>, pile: &str) -> Result<DropResponse, ParseStackTypeError> {
    let mut session = lock_session(session_arc);
    let target: StackType = match pile.parse() {
        Ok(target) => target,
        Err(e) => {
            // どこにも落とさなかったのと同じ扱いでドラッグは終わらせる
            session.cancel_drag();
            return Err(e);
        }
    };
    let result = session.request_drop(target);
    Ok(drop_response(result, &session))
}

/// ドラッグをキャンセル
pub fn handle_drag_cancel(session_arc: &Arc<Mutex<GameSession>>) -> DropResponse {
    let was_dragging = lock_session(session_arc).cancel_drag();
    DropResponse::Cancelled { was_dragging }
}

/// ダブルクリックで組札へ自動移動
pub fn handle_double_click(session_arc: &Arc<Mutex<GameSession>>, card_id: u8) -> DropResponse {
    let mut session = lock_session(session_arc);
    let result = session.request_auto_move(CardId(card_id));
    drop_response(result, &session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::components::card::{Rank, Suit};
    use crate::components::stack::Pile;

    fn shared_session() -> Arc<Mutex<GameSession>> {
        let mut session = GameSession::from_seed(31);
        {
            let board = session.board_mut();
            *board = Board::new();
            board.tableau[0] = Pile::from(vec![Card::face_up(Suit::Club, Rank::Six)]);
            board.tableau[1] = Pile::from(vec![Card::face_up(Suit::Diamond, Rank::Seven)]);
            board.waste = Pile::from(vec![Card::face_up(Suit::Spade, Rank::Ace)]);
        }
        Arc::new(Mutex::new(session))
    }

    #[test]
    fn test_drag_and_drop_by_pile_name() {
        let session_arc = shared_session();
        let six = Card::face_up(Suit::Club, Rank::Six).id();

        match handle_drag_start(&session_arc, six.0) {
            DragResponse::Started { cards } => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].stack_type, StackType::Tableau(0));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(handle_can_drop(&session_arc, "tableau-1"), Ok(true));
        assert_eq!(handle_can_drop(&session_arc, "foundation-0"), Ok(false));

        match handle_drag_end(&session_arc, "tableau-1") {
            Ok(DropResponse::Applied { outcome, status }) => {
                assert_eq!(outcome.target, StackType::Tableau(1));
                assert_eq!(status.moves, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_pile_name_ends_the_drag() {
        let session_arc = shared_session();
        assert!(matches!(
            handle_drag_from(&session_arc, "waste", 0),
            Ok(DragResponse::Started { .. })
        ));
        assert!(handle_drag_end(&session_arc, "table-9").is_err());
        assert!(lock_session(&session_arc).dragging().is_none());
        assert_eq!(
            handle_drag_cancel(&session_arc),
            DropResponse::Cancelled { was_dragging: false }
        );
    }

    #[test]
    fn test_double_click_and_rejections() {
        let session_arc = shared_session();
        let ace = Card::face_up(Suit::Spade, Rank::Ace).id();
        assert!(matches!(handle_double_click(&session_arc, ace.0), DropResponse::Applied { .. }));

        match handle_double_click(&session_arc, 99) {
            DropResponse::Rejected { rejection } => assert_eq!(rejection.code, "invalid_drag_source"),
            other => panic!("unexpected {:?}", other),
        }
        match handle_drag_end(&session_arc, "tableau-2") {
            Ok(DropResponse::Rejected { rejection }) => assert_eq!(rejection.code, "no_active_drag"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
