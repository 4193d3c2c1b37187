// src/app/timer.rs
//! 1秒ごとに経過時間を JS に知らせるタイマーだよ ⏱️
//!
//! `window.setInterval` を包んだだけ。`start` は必ず前のインターバルを止めてから
//! 新しく張るので、何回新しいゲームを始めてもタイマーが重ならない。

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Default)]
pub struct TickTimer {
    interval_id: Option<i32>,
    // インターバルが生きてる間はクロージャも生かしておく必要がある
    callback: Option<Closure<dyn FnMut()>>,
}

impl TickTimer {
    pub const INTERVAL_MS: i32 = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.interval_id.is_some()
    }

    /// 1秒ごとに `on_tick` を呼ぶ。動いてたタイマーは先に止める。
    pub fn start(&mut self, on_tick: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.stop();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
        let callback = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            Self::INTERVAL_MS,
        )?;
        debug!("TickTimer started (interval id {})", id);
        self.interval_id = Some(id);
        self.callback = Some(callback);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            match web_sys::window() {
                Some(window) => window.clear_interval_with_handle(id),
                None => warn!("TickTimer: window is gone, cannot clear interval {}", id),
            }
            debug!("TickTimer stopped (interval id {})", id);
        }
        self.callback = None;
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
