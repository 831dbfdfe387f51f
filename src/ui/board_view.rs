//! Board rendering for the Othello GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::is_legal_move;
use crate::{Board, Pos, Side, BOARD_SIZE};

use super::theme::*;

/// What the board needs to know about the game to draw itself
pub struct BoardViewState<'a> {
    pub board: &'a Board,
    pub current_turn: Side,
    pub last_move: Option<Pos>,
    pub last_flipped: &'a [Pos],
    pub show_hints: bool,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, view: BoardViewState<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, view.board);

        for &pos in view.last_flipped {
            self.draw_flip_ring(&painter, pos);
        }
        if let Some(pos) = view.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !view.accepts_input {
            return None;
        }

        if view.show_hints {
            self.draw_hints(&painter, view.board, view.current_turn);
        }

        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let is_valid = is_legal_move(view.board, board_pos, view.current_turn);

        if is_valid {
            self.draw_hover_preview(&painter, board_pos, view.current_turn);
        } else if view.board.is_empty(board_pos) {
            let center = self.board_to_screen(board_pos);
            painter.circle_filled(center, self.cell_size * DISC_RADIUS_RATIO, hover_invalid());
        }

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw coordinate labels (0-7 on both axes, matching row/col indices)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let along = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);
        }
    }

    /// Draw all placed discs
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for side in [Side::Dark, Side::Light] {
            for pos in board.discs(side).iter_ones() {
                self.draw_disc(painter, pos, side);
            }
        }
    }

    /// Draw a single disc
    fn draw_disc(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Dark => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, DARK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    DARK_DISC_HIGHLIGHT,
                );
            }
            Side::Light => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, LIGHT_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, LIGHT_DISC_SHADOW),
                );
            }
        }
    }

    /// Ring around discs flipped by the last move
    fn draw_flip_ring(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO + 2.0;
        painter.circle_stroke(center, radius, Stroke::new(2.0, FLIP_RING));
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Small dots on every legal move for the side to play
    fn draw_hints(&self, painter: &Painter, board: &Board, turn: Side) {
        for pos in board.empty_cells() {
            if is_legal_move(board, pos, turn) {
                let center = self.board_to_screen(pos);
                painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, legal_hint());
            }
        }
    }

    /// Draw hover preview of a legal placement
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = match turn {
            Side::Dark => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
            Side::Light => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
        };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Convert board position to the screen coordinates of the cell centre
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row() as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 400.0)),
        }
    }

    #[test]
    fn test_screen_to_board_cells() {
        let view = view_at_origin();
        let origin = BOARD_MARGIN;

        assert_eq!(view.screen_to_board(Pos2::new(origin + 1.0, origin + 1.0)), Some(Pos::new(0, 0)));
        assert_eq!(
            view.screen_to_board(Pos2::new(origin + 399.0, origin + 399.0)),
            Some(Pos::new(7, 7))
        );
        assert_eq!(
            view.screen_to_board(Pos2::new(origin + 125.0, origin + 60.0)),
            Some(Pos::new(1, 2))
        );
    }

    #[test]
    fn test_screen_to_board_outside() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(BOARD_MARGIN + 401.0, BOARD_MARGIN)), None);
    }

    #[test]
    fn test_board_to_screen_is_cell_centre() {
        let view = view_at_origin();
        let centre = view.board_to_screen(Pos::new(3, 4));
        assert_eq!(view.screen_to_board(centre), Some(Pos::new(3, 4)));
        assert_eq!(centre, Pos2::new(BOARD_MARGIN + 225.0, BOARD_MARGIN + 175.0));
    }
}
