// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use crate::session::GameSession;

pub mod console_logger;
pub mod drag_handler;
pub mod game_app;
pub mod state_getter;
pub mod stock_handler;
pub mod timer;

/// セッションのロックを取る。前の処理がパニックしてロックが壊れてても中身を取り戻して続けるよ。
pub(crate) fn lock_session(session_arc: &Arc<Mutex<GameSession>>) -> MutexGuard<'_, GameSession> {
    session_arc.lock().unwrap_or_else(|poisoned| {
        warn!("Session mutex was poisoned. Recovering the inner state.");
        poisoned.into_inner()
    })
}
