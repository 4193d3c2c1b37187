// src/config/scoring.rs
//! スコア計算に使う点数の設定だよ！💯
//!
//! デフォルト値: 1枚めくる +1、移動 +5、裏カードを表にする +5、
//! 組札に置く +10。JS 側から JSON で一部だけ上書きもできる。

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// 山札から1枚めくったとき
    pub draw_bonus: u32,
    /// ドラッグ&ドロップで移動が成功したとき (移動先に関係なく毎回)
    pub move_bonus: u32,
    /// 移動で場札の裏向きカードが表になったとき
    pub flip_bonus: u32,
    /// 組札にカードを置いたとき
    pub foundation_bonus: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            draw_bonus: 1,
            move_bonus: 5,
            flip_bonus: 5,
            foundation_bonus: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse score config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("foundation bonus ({foundation}) must be larger than flip bonus ({flip})")]
    FoundationBonusTooSmall { foundation: u32, flip: u32 },
}

impl ScoreConfig {
    /// JSON 文字列から読み込む。書いてない項目はデフォルト値のまま！
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 組札ボーナスは表返しボーナスより大きくないとダメ。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.foundation_bonus <= self.flip_bonus {
            return Err(ConfigError::FoundationBonusTooSmall {
                foundation: self.foundation_bonus,
                flip: self.flip_bonus,
            });
        }
        Ok(())
    }
}
