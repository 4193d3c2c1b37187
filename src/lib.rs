// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod board;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod session;
pub mod systems;

pub use app::game_app::GameApp;
pub use board::Board;
pub use components::{Card, CardId, GameState, GameStatus, Pile, Rank, StackType, Suit};
pub use config::ScoreConfig;
pub use error::{DragSourceProblem, LayoutError, MoveRejection};
pub use session::GameSession;
pub use systems::{DrawOutcome, MoveOutcome};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if app::console_logger::init(log::LevelFilter::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger was already installed"));
    }
    log::info!("Panic hook and logger set!");
}
