// src/config/mod.rs
//! ゲームの設定値まわり。

pub mod scoring;

pub use scoring::{ConfigError, ScoreConfig};
