// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
///
/// ドラッグ開始からドロップまでの間、カードは元の山に入ったまま。ここには
/// 「どこの何番目から何枚持ち上げたか」を覚えておくだけで、盤面はドロップが
/// 受け付けられるまで一切書き換えないよ。座標はぜんぶ描画側の仕事！
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DraggingInfo {
    /// ドラッグ開始前のスタックの種類
    pub original_stack_type: StackType,
    /// 持ち上げた一番下のカードのスタック内での位置
    pub original_position_in_stack: usize,
    /// 持ち上げたカードたち (下から順)
    pub dragged_group: Vec<Card>,
}

impl DraggingInfo {
    /// 持ち上げた枚数。
    pub fn card_count(&self) -> usize {
        self.dragged_group.len()
    }
}
