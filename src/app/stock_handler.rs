// src/app/stock_handler.rs
//! Handles clicks on the Stock pile coming from the browser.

use std::sync::{Arc, Mutex};

use log::info;

use super::lock_session;
use crate::protocol::{DrawResponse, StatusData};
use crate::session::GameSession;

/// 山札がクリックされた時の処理。めくる / 戻す / 何もしない のどれか。
pub fn handle_stock_click(session_arc: &Arc<Mutex<GameSession>>) -> DrawResponse {
    let mut session = lock_session(session_arc);
    let outcome = session.request_draw();
    info!("Stock clicked: {:?}", outcome);
    DrawResponse { outcome, status: StatusData::from_session(&session) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::DrawOutcome;

    #[test]
    fn test_stock_click_reports_status() {
        let session_arc = Arc::new(Mutex::new(GameSession::from_seed(41)));
        let response = handle_stock_click(&session_arc);
        assert!(matches!(response.outcome, DrawOutcome::Drawn { .. }));
        assert_eq!((response.status.moves, response.status.score), (1, 1));
    }

    #[test]
    fn test_stock_cycles_through_recycle() {
        let session_arc = Arc::new(Mutex::new(GameSession::from_seed(42)));
        for _ in 0..24 {
            handle_stock_click(&session_arc);
        }
        let response = handle_stock_click(&session_arc);
        assert_eq!(response.outcome, DrawOutcome::Recycled { count: 24 });
        assert_eq!(response.status.moves, 25);
        assert_eq!(response.status.score, 24);
    }
}
