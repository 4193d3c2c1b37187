// src/session.rs
//! 1回分のゲームをまるごと持つ `GameSession` だよ！🎮
//!
//! 盤面・手数と点数・時計・ドラッグ中の情報をぜんぶここで抱えて、
//! 画面からのジェスチャー (ドラッグ開始 / ドロップ / 山札クリック / ダブルクリック) を
//! 1つずつ順番に処理する。グローバルな状態はなし、乱数と時計は外から差し込めるよ。

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::clock::{format_elapsed, Clock, SystemClock};
use crate::components::card::{Card, CardId};
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::config::{ConfigError, ScoreConfig};
use crate::error::{DragSourceProblem, MoveRejection};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::systems::move_card_system::movable_run;
use crate::systems::{
    draw_from_stock, move_to_foundation, move_to_tableau, DealInitialCardsSystem, DrawOutcome,
    MoveOutcome, WinConditionSystem,
};

pub struct GameSession {
    board: Board,
    state: GameState,
    config: ScoreConfig,
    rng: StdRng,
    clock: Box<dyn Clock>,
    started_at_ms: u64,
    /// クリアした瞬間の時刻。ここで経過時間が止まる ⏱️
    finished_at_ms: Option<u64>,
    dragging: Option<DraggingInfo>,
    deal_system: DealInitialCardsSystem,
    win_system: WinConditionSystem,
}

impl GameSession {
    /// OS の乱数とシステム時計で新しいゲームを始める。
    pub fn new() -> Self {
        Self::with_parts(ScoreConfig::default(), StdRng::from_entropy(), Box::new(SystemClock))
    }

    /// シード固定。同じシードなら同じ配り方になるよ。
    pub fn from_seed(seed: u64) -> Self {
        Self::with_parts(ScoreConfig::default(), StdRng::seed_from_u64(seed), Box::new(SystemClock))
    }

    /// 点数設定・乱数・時計をぜんぶ指定して作る。作った時点で1ゲーム目が配られる。
    pub fn with_parts(config: ScoreConfig, rng: StdRng, clock: Box<dyn Clock>) -> Self {
        let mut session = Self::undealt(config, rng, clock);
        session.new_game();
        session
    }

    /// 配札せずに、用意した盤面からゲームを始める (詰め将棋みたいな途中局面用)。
    pub fn from_layout(board: Board) -> Self {
        Self::with_layout(board, ScoreConfig::default(), StdRng::from_entropy(), Box::new(SystemClock))
    }

    /// `from_layout` の全部指定版。もう全部組札に乗ってたら最初から `Won`。
    pub fn with_layout(board: Board, config: ScoreConfig, rng: StdRng, clock: Box<dyn Clock>) -> Self {
        let mut session = Self::undealt(config, rng, clock);
        session.board = board;
        session.state.status = GameStatus::Playing;
        if session.win_system.run(&session.board, &mut session.state) {
            session.finished_at_ms = Some(session.started_at_ms);
        }
        info!(
            "📋 Game resumed from a layout. foundations: {}/{}",
            session.board.foundation_card_count(),
            CardId::COUNT
        );
        session
    }

    fn undealt(config: ScoreConfig, rng: StdRng, clock: Box<dyn Clock>) -> Self {
        let started_at_ms = clock.now_ms();
        Self {
            board: Board::new(),
            state: GameState::new(),
            config,
            rng,
            clock,
            started_at_ms,
            finished_at_ms: None,
            dragging: None,
            deal_system: DealInitialCardsSystem,
            win_system: WinConditionSystem::new(),
        }
    }

    /// 新しいゲームを配り直す。手数・点数・ドラッグ・時計は全部リセット！
    pub fn new_game(&mut self) {
        self.state = GameState::new();
        self.dragging = None;
        self.finished_at_ms = None;
        self.started_at_ms = self.clock.now_ms();
        self.deal_system.execute(&mut self.board, &mut self.rng);
        self.state.status = GameStatus::Playing;
        info!("🆕 New game started. stock: {}", self.board.stock().len());
    }

    /// `new_game` と同じ。
    pub fn request_new_game(&mut self) {
        self.new_game();
    }

    /// 点数設定を差し替える。次の得点から反映されるよ。
    pub fn set_config(&mut self, config: ScoreConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // --- 読み取り用 ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_won(&self) -> bool {
        self.state.status == GameStatus::Won
    }

    pub fn dragging(&self) -> Option<&DraggingInfo> {
        self.dragging.as_ref()
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// 経過秒数。クリア後はクリアした時点で止まる。
    pub fn elapsed_seconds(&self) -> u64 {
        let end = self.finished_at_ms.unwrap_or_else(|| self.clock.now_ms());
        end.saturating_sub(self.started_at_ms) / 1000
    }

    /// 経過時間を `MM:SS` で。
    pub fn elapsed_time(&self) -> String {
        format_elapsed(self.elapsed_seconds())
    }

    // --- ジェスチャー ---

    /// カード ID を指定してドラッグを始める。持ち上がったカード (下から順) を返すよ。
    pub fn request_drag_start(&mut self, card_id: CardId) -> Result<Vec<Card>, MoveRejection> {
        self.ensure_can_start_gesture()?;
        let (stack, index) = self.locate_card(card_id)?;
        self.request_drag_from(stack, index)
    }

    /// 山と位置を指定してドラッグを始める。
    pub fn request_drag_from(&mut self, stack: StackType, index: usize) -> Result<Vec<Card>, MoveRejection> {
        self.ensure_can_start_gesture()?;
        let pile_len = match stack {
            StackType::Foundation(_) => return Err(DragSourceProblem::Foundation.into()),
            StackType::Stock => return Err(DragSourceProblem::Stock.into()),
            _ => self.board.pile(stack).map(|pile| pile.len()).unwrap_or(0),
        };
        if index >= pile_len && pile_len > 0 {
            return Err(DragSourceProblem::NoSuchCard.into());
        }
        let run = movable_run(&self.board, stack, pile_len.saturating_sub(index))?.to_vec();
        info!("[Drag] start: {} from {}[{}]", run.len(), stack, index);
        self.dragging = Some(DraggingInfo {
            original_stack_type: stack,
            original_position_in_stack: index,
            dragged_group: run.clone(),
        });
        Ok(run)
    }

    /// 今ドラッグ中のカードを `target` に落とせるか (ドロップ先のハイライト用)。
    pub fn can_drop_at(&self, target: StackType) -> bool {
        self.dragging.as_ref().is_some_and(|info| {
            rules::is_move_valid(&self.board, info.original_stack_type, &info.dragged_group, target).is_ok()
        })
    }

    /// ドロップ。成功でも失敗でもドラッグはここで終わる。失敗したら盤面はそのまま (キャンセル扱い)。
    pub fn request_drop(&mut self, target: StackType) -> Result<MoveOutcome, MoveRejection> {
        let info = self.dragging.take().ok_or(MoveRejection::NoActiveDrag)?;
        if self.is_won() {
            return Err(MoveRejection::GameFinished);
        }
        let source = info.original_stack_type;
        // 検証は移動の実行側でまとめてやる
        let result = match target {
            StackType::Tableau(dest_index) => move_to_tableau(
                &mut self.board,
                &mut self.state,
                &self.config,
                source,
                info.card_count(),
                dest_index,
            ),
            // 組札には1枚ずつしか置けない
            StackType::Foundation(_) if info.card_count() != 1 => Err(MoveRejection::IllegalDestination { target }),
            StackType::Foundation(dest_index) => {
                move_to_foundation(&mut self.board, &mut self.state, &self.config, source, dest_index)
            }
            StackType::Stock | StackType::Waste => Err(MoveRejection::IllegalDestination { target }),
        };
        match result {
            Ok(outcome) => {
                self.after_move();
                Ok(outcome)
            }
            Err(rejection) => {
                info!("[Drag] drop on {} rejected, cancelling: {}", target, rejection);
                Err(rejection)
            }
        }
    }

    /// ドラッグをやめる。ドラッグ中だったら true。
    pub fn cancel_drag(&mut self) -> bool {
        let was_dragging = self.dragging.take().is_some();
        if was_dragging {
            info!("[Drag] cancelled");
        }
        was_dragging
    }

    /// 山札クリック。ドラッグ中やクリア後は何もしない (`Idle`)。
    ///
    /// ドラッグ中に捨て札が動くと、持ち上げた捨て札の位置 (`DraggingInfo`) がずれてしまう。
    /// だからドラッグ中の山札クリックは無視して、ドラッグもそのまま続けるよ。
    pub fn request_draw(&mut self) -> DrawOutcome {
        if self.is_won() || self.dragging.is_some() {
            return DrawOutcome::Idle;
        }
        draw_from_stock(&mut self.board, &mut self.state, &self.config)
    }

    /// ダブルクリックされたカードを、置ける組札へ自動で移動する 🪄
    pub fn request_auto_move(&mut self, card_id: CardId) -> Result<MoveOutcome, MoveRejection> {
        self.ensure_can_start_gesture()?;
        let (source, index) = self.locate_card(card_id)?;
        let pile_len = self.board.pile(source).map(|pile| pile.len()).unwrap_or(0);
        let run = movable_run(&self.board, source, pile_len - index)?;
        // 一番上の1枚だけが対象
        let [card] = run else {
            return Err(MoveRejection::InvalidRun);
        };
        let StackType::Foundation(dest_index) =
            find_automatic_foundation_move(&self.board, card).ok_or(MoveRejection::NoAutoMove)?
        else {
            return Err(MoveRejection::NoAutoMove);
        };
        let outcome = move_to_foundation(&mut self.board, &mut self.state, &self.config, source, dest_index)?;
        self.after_move();
        Ok(outcome)
    }

    /// JS から来た ID は範囲外のこともあるので、まず範囲チェックしてから探す。
    fn locate_card(&self, card_id: CardId) -> Result<(StackType, usize), MoveRejection> {
        if !card_id.is_valid() {
            warn!("[Drag] card id {} is out of range", card_id);
            return Err(DragSourceProblem::NoSuchCard.into());
        }
        self.board
            .locate(card_id)
            .ok_or_else(|| DragSourceProblem::NoSuchCard.into())
    }

    fn ensure_can_start_gesture(&self) -> Result<(), MoveRejection> {
        if self.is_won() {
            return Err(MoveRejection::GameFinished);
        }
        if self.dragging.is_some() {
            return Err(MoveRejection::DragInProgress);
        }
        Ok(())
    }

    /// 移動が成功した後の後片付け。勝ってたら時計を止める。
    fn after_move(&mut self) {
        if self.win_system.run(&self.board, &mut self.state) {
            self.finished_at_ms = Some(self.clock.now_ms());
            info!("⏱️ finished in {}", self.elapsed_time());
        }
        let total = self.board.card_count();
        if total != CardId::COUNT {
            warn!("盤面のカードが {} 枚になってる！", total);
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
