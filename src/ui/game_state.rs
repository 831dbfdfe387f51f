//! Game state management for the Othello GUI
//!
//! Owns the real board and the turn order. The AI searches a copy of the
//! board on a worker thread and hands its move back over a channel.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::rules::{apply_move, has_legal_move, is_legal_move, outcome, Outcome, Score};
use crate::{AIEngine, Board, EngineConfig, MoveResult, Pos, Side, AI_SIDE};

/// The human always plays Dark
pub const HUMAN_SIDE: Side = Side::Dark;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Side,
    pub game_over: Option<Outcome>,
    pub last_move: Option<Pos>,
    pub last_flipped: Vec<Pos>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    config: EngineConfig,
}

impl GameState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            current_turn: Side::Dark,
            game_over: None,
            last_move: None,
            last_flipped: Vec::new(),
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
        info!("new game");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == HUMAN_SIDE
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn == AI_SIDE
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's disc at the given position
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_legal_move(&self.board, pos, self.current_turn) {
            return Err("Invalid move (occupied or captures nothing)".to_string());
        }

        self.execute_move(pos)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), String> {
        let side = self.current_turn;
        let flipped = apply_move(&mut self.board, pos, side).map_err(|e| e.to_string())?;

        info!(%side, %pos, flipped = flipped.len(), "move played");
        self.last_move = Some(pos);
        self.last_flipped = flipped;
        self.move_count += 1;
        self.message = None;

        self.advance_turn();
        Ok(())
    }

    /// Hand the turn to the opponent, skipping a side that cannot move
    fn advance_turn(&mut self) {
        if let Some(result) = outcome(&self.board) {
            let score = self.score();
            info!(dark = score.dark, light = score.light, ?result, "game over");
            self.game_over = Some(result);
            return;
        }

        let next = self.current_turn.opponent();
        if has_legal_move(&self.board, next) {
            self.current_turn = next;
        } else {
            info!(side = %next, "no valid moves, turn passes");
            self.message = Some(format!("{} has no valid moves and passes", side_label(next)));
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board.clone();
        let config = self.config;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let started = Instant::now();
            let mut engine = AIEngine::from_config(&config);
            let result = engine.get_move_with_stats(&board);

            let remaining = config.think_delay.saturating_sub(started.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(pos) => {
                    if let Err(msg) = self.execute_move(pos) {
                        warn!(%pos, "AI move rejected: {msg}");
                        self.message = Some(msg);
                    }
                }
                None => {
                    self.message = Some("AI has no valid moves".to_string());
                    self.advance_turn_after_pass();
                }
            }
        }
    }

    /// The side to move has nothing to play: give the turn away
    fn advance_turn_after_pass(&mut self) {
        if let Some(result) = outcome(&self.board) {
            self.game_over = Some(result);
        } else {
            self.current_turn = self.current_turn.opponent();
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

/// Player-facing name of a side
pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::Dark => "Human (Black)",
        Side::Light => "AI (White)",
    }
}

/// Game over banner text
pub fn outcome_banner(result: Outcome) -> &'static str {
    match result {
        Outcome::Winner(Side::Dark) => "Human Wins!!!",
        Outcome::Winner(Side::Light) => "AI Wins!!!",
        Outcome::Draw => "It's a Draw!!!",
    }
}
