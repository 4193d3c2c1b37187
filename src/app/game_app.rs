// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::timer::TickTimer;
use super::{drag_handler, lock_session, state_getter, stock_handler};
use crate::config::ScoreConfig;
use crate::protocol::DropResponse;
use crate::session::GameSession;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        error!("Failed to serialize response: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// JS 側はこれを1つ作って、入力イベントのたびにメソッドを呼ぶ。返事は全部 JSON 文字列だよ。
#[wasm_bindgen]
pub struct GameApp {
    session: Arc<Mutex<GameSession>>,
    timer: TickTimer,
    /// 毎秒 `MM:SS` を受け取る JS の関数
    tick_listener: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        let app = Self::from_session(GameSession::new());
        info!("GameApp: 初期化完了。");
        app
    }

    /// 盤面まるごとの JSON
    pub fn get_game_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_game_state_json(&lock_session(&self.session)).map_err(to_js_error)
    }

    /// 手数・点数・経過時間だけの JSON
    pub fn get_status_json(&self) -> Result<String, JsValue> {
        state_getter::get_status_json(&lock_session(&self.session)).map_err(to_js_error)
    }

    pub fn request_drag_start(&self, card_id: u8) -> Result<String, JsValue> {
        to_json(&drag_handler::handle_drag_start(&self.session, card_id))
    }

    pub fn request_drag_from(&self, pile: &str, index: usize) -> Result<String, JsValue> {
        let response = drag_handler::handle_drag_from(&self.session, pile, index).map_err(to_js_error)?;
        to_json(&response)
    }

    /// ドロップ先のハイライト用
    pub fn can_drop_at(&self, pile: &str) -> Result<bool, JsValue> {
        drag_handler::handle_can_drop(&self.session, pile).map_err(to_js_error)
    }

    pub fn request_drop(&mut self, pile: &str) -> Result<String, JsValue> {
        let response = drag_handler::handle_drag_end(&self.session, pile).map_err(to_js_error)?;
        self.after_move(&response);
        to_json(&response)
    }

    pub fn cancel_drag(&self) -> Result<String, JsValue> {
        to_json(&drag_handler::handle_drag_cancel(&self.session))
    }

    /// 山札クリック
    pub fn request_draw(&self) -> Result<String, JsValue> {
        to_json(&stock_handler::handle_stock_click(&self.session))
    }

    /// カードがダブルクリックされた時の処理。置ける組札があれば自動で移動！
    pub fn handle_double_click(&mut self, card_id: u8) -> Result<String, JsValue> {
        let response = drag_handler::handle_double_click(&self.session, card_id);
        self.after_move(&response);
        to_json(&response)
    }

    /// 新しいゲームを配って、新しい盤面の JSON を返す。タイマーもやり直し。
    pub fn new_game(&mut self) -> Result<String, JsValue> {
        lock_session(&self.session).request_new_game();
        self.restart_timer()?;
        self.get_game_state_json()
    }

    pub fn elapsed_time(&self) -> String {
        lock_session(&self.session).elapsed_time()
    }

    /// 毎秒のタイマーが動いてるか。クリア後やリスナー未登録なら false。
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// 毎秒呼ばれる関数を登録して、タイマーを動かし始める。
    pub fn set_tick_listener(&mut self, listener: js_sys::Function) -> Result<(), JsValue> {
        self.tick_listener = Some(listener);
        self.restart_timer()
    }

    /// 点数設定を JSON で上書きする (書かなかった項目はデフォルトのまま)。
    pub fn set_score_config_json(&self, json: &str) -> Result<(), JsValue> {
        let config = ScoreConfig::from_json(json).map_err(to_js_error)?;
        lock_session(&self.session).set_config(config).map_err(to_js_error)?;
        info!("Score config updated: {:?}", config);
        Ok(())
    }
}

impl GameApp {
    /// 用意済みのセッションを包む (JS には出さない、Rust 側から使う用)。
    pub fn from_session(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            timer: TickTimer::new(),
            tick_listener: None,
        }
    }

    fn restart_timer(&mut self) -> Result<(), JsValue> {
        let Some(listener) = self.tick_listener.clone() else {
            self.timer.stop();
            return Ok(());
        };
        if lock_session(&self.session).is_won() {
            self.timer.stop();
            return Ok(());
        }
        let session_arc = Arc::clone(&self.session);
        self.timer.start(move || {
            let elapsed = lock_session(&session_arc).elapsed_time();
            if let Err(e) = listener.call1(&JsValue::NULL, &JsValue::from_str(&elapsed)) {
                error!("Tick listener threw: {:?}", e);
            }
        })
    }

    /// クリアしたらタイマーを止める 🏁
    fn after_move(&mut self, response: &DropResponse) {
        if let DropResponse::Applied { outcome, .. } = response {
            if outcome.won {
                info!("GameApp: game won, stopping the timer.");
                self.timer.stop();
            }
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
