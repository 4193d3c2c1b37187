//! Gets the current game state from the session and converts it to JSON.

use log::{debug, error};

use crate::components::stack::StackType;
use crate::protocol::{CardData, GameStateData, PileTopData, StatusData, StockData};
use crate::session::GameSession;

/// セッションの盤面を描画用のデータにまとめる。
pub fn build_game_state_data(session: &GameSession) -> GameStateData {
    let board = session.board();

    let pile_top = |stack_type: StackType| {
        let pile = board.pile(stack_type);
        PileTopData {
            stack_type,
            count: pile.map_or(0, |pile| pile.len()),
            top: pile
                .and_then(|pile| pile.top().map(|card| CardData::new(card, stack_type, pile.len() - 1))),
        }
    };

    let foundations = (0..board.foundations().len() as u8)
        .map(|index| pile_top(StackType::Foundation(index)))
        .collect();

    let tableau = board
        .tableau()
        .iter()
        .enumerate()
        .map(|(column, pile)| {
            let stack_type = StackType::Tableau(column as u8);
            pile.cards()
                .iter()
                .enumerate()
                .map(|(position, card)| CardData::new(card, stack_type, position))
                .collect()
        })
        .collect();

    let dragging = session
        .dragging()
        .map(|info| info.dragged_group.iter().map(|card| card.id()).collect())
        .unwrap_or_default();

    GameStateData {
        stock: StockData {
            count: board.stock().len(),
            has_face_down_top: board.stock().top().is_some_and(|card| !card.is_face_up),
        },
        waste: pile_top(StackType::Waste),
        foundations,
        tableau,
        dragging,
        status: StatusData::from_session(session),
    }
}

/// ゲームの状態を取得し、JSON 文字列として返します。
pub fn get_game_state_json(session: &GameSession) -> Result<String, serde_json::Error> {
    let data = build_game_state_data(session);
    debug!(
        "Collected game state: stock {}, waste {}, moves {}",
        data.stock.count, data.waste.count, data.status.moves
    );
    serde_json::to_string(&data).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}

/// ステータスだけの JSON。タイマーの毎秒更新で使う。
pub fn get_status_json(session: &GameSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StatusData::from_session(session)).map_err(|e| {
        error!("Failed to serialize status: {}", e);
        e
    })
}
