// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod stack;
pub mod game_state;
pub mod dragging_info;

pub use card::{Card, CardId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use dragging_info::DraggingInfo;
pub use game_state::{GameState, GameStatus};
pub use stack::{Pile, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
