// src/protocol.rs

// このファイルは、Rust 側 (GameApp) と JS 側 (描画・入力) の間で
// やり取りする JSON の形 (プロトコル) を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::game_state::GameStatus;
pub use crate::components::stack::StackType;
use crate::error::MoveRejection;
use crate::session::GameSession;
use crate::systems::{DrawOutcome, MoveOutcome};

/// 描画用のカード1枚分の情報。
///
/// 裏向きのカードは何のカードかバレないように `suit` と `rank` を送らない！🙈
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub id: CardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    pub is_face_up: bool,
    pub stack_type: StackType,
    pub position_in_stack: usize,
}

impl CardData {
    pub fn new(card: &Card, stack_type: StackType, position_in_stack: usize) -> Self {
        let (suit, rank) = if card.is_face_up {
            (Some(card.suit), Some(card.rank))
        } else {
            (None, None)
        };
        Self {
            id: card.id(),
            suit,
            rank,
            is_face_up: card.is_face_up,
            stack_type,
            position_in_stack,
        }
    }
}

/// 山札は枚数と「裏向きの山があるか」だけ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StockData {
    pub count: usize,
    pub has_face_down_top: bool,
}

/// 捨て札・組札は一番上のカードと枚数。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileTopData {
    pub stack_type: StackType,
    pub count: usize,
    pub top: Option<CardData>,
}

/// 手数・点数・経過時間などのステータス表示用。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusData {
    pub moves: u32,
    pub score: u32,
    /// `MM:SS`
    pub elapsed: String,
    pub status: GameStatus,
    pub is_won: bool,
    /// 組札に乗ってるカードの合計 (52 でクリア)
    pub foundation_cards: usize,
}

impl StatusData {
    pub fn from_session(session: &GameSession) -> Self {
        let state = session.state();
        Self {
            moves: state.moves,
            score: state.score,
            elapsed: session.elapsed_time(),
            status: state.status,
            is_won: session.is_won(),
            foundation_cards: session.board().foundation_card_count(),
        }
    }
}

/// 盤面まるごと。JS 側はこれを受け取って描き直すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub stock: StockData,
    pub waste: PileTopData,
    pub foundations: Vec<PileTopData>,
    /// 場札7列、各列は下から順に全カード
    pub tableau: Vec<Vec<CardData>>,
    /// ドラッグ中のカード ID (下から順)
    pub dragging: Vec<CardId>,
    pub status: StatusData,
}

/// 却下された理由。`code` は JS 側の分岐用、`message` は表示用。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RejectionData {
    pub code: String,
    pub message: String,
}

impl From<&MoveRejection> for RejectionData {
    fn from(rejection: &MoveRejection) -> Self {
        Self {
            code: rejection.code().to_string(),
            message: rejection.to_string(),
        }
    }
}

/// ドラッグ開始の返事。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DragResponse {
    Started { cards: Vec<CardData> },
    Rejected { rejection: RejectionData },
}

/// ドロップ (とキャンセル、ダブルクリック) の返事。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DropResponse {
    Applied { outcome: MoveOutcome, status: StatusData },
    /// 却下。ドラッグ中だった場合はキャンセル扱いで終わってるよ
    Rejected { rejection: RejectionData },
    Cancelled { was_dragging: bool },
}

/// 山札クリックの返事。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawResponse {
    #[serde(flatten)]
    pub outcome: DrawOutcome,
    pub status: StatusData,
}
