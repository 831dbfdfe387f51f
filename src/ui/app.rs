//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::rules::{leader, Outcome};
use crate::{EngineConfig, Side};

use super::board_view::{BoardView, BoardViewState};
use super::game_state::{outcome_banner, side_label, GameState, HUMAN_SIDE};
use super::theme::*;

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_hints: bool,
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
            show_hints: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_hints, "Legal Move Hints (H)");
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.state.config();
                    ui.label(format!("AI depth {} | pass rule: {}", config.depth, config.pass_rule));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Human vs Minimax AI").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let disc_color = match self.state.current_turn {
                Side::Dark => DARK_DISC,
                Side::Light => LIGHT_DISC,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, disc_color);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(side_label(self.state.current_turn))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_THINKING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.current_turn == HUMAN_SIDE {
                        ("Your turn".to_string(), STATUS_READY)
                    } else {
                        ("Waiting for AI".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render disc counts for both sides
    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.state.score();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (side, count) in [(Side::Dark, score.dark), (Side::Light, score.light)] {
                ui.horizontal(|ui| {
                    let symbol = if side == Side::Dark { "●" } else { "○" };
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(side_label(side)).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
                ui.add_space(4.0);
            }

            let leading = match leader(score) {
                Outcome::Winner(side) => format!("{} leads", side_label(side)),
                Outcome::Draw => "Level".to_string(),
            };
            ui.label(RichText::new(leading).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New Game").clicked() {
                self.state.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last search statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("Depth {} | Score {}", result.depth, result.score))
                            .size(11.0)
                            .color(STATUS_READY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    let played = result
                        .best_move
                        .map_or_else(|| "pass".to_string(), |pos| pos.to_string());
                    ui.label(RichText::new(format!("→ {played}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render game over card with the final banner
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: Outcome) {
        let score = self.state.score();

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(outcome_banner(result)).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Human (Black): {} | AI (White): {}", score.dark, score.light))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input = self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                BoardViewState {
                    board: &self.state.board,
                    current_turn: self.state.current_turn,
                    last_move: self.state.last_move,
                    last_flipped: &self.state.last_flipped,
                    show_hints: self.show_hints,
                    accepts_input,
                },
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_disc(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::H) {
                self.show_hints = !self.show_hints;
            }

            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
