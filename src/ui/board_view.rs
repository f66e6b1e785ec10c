//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Mark, Pos, BOARD_SIZE};

use super::theme::*;

/// What the board view needs to know about the game for one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Mark,
    pub last_move: Option<usize>,
    pub suggested_move: Option<usize>,
    pub winning_line: Option<[usize; 3]>,
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
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: BoardFrame<'_>) -> Option<usize> {
        let available_size = ui.available_size();

        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, frame.board);

        if let Some(index) = frame.last_move {
            self.draw_last_move_marker(&painter, Pos::from_index(index));
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(index) = frame.suggested_move {
            self.draw_suggestion(&painter, Pos::from_index(index));
        }

        let mut clicked = None;

        if frame.accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = frame.board.is_empty(pos.to_index());
                    let hover_color = if is_valid {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    self.draw_hover_preview(&painter, pos, frame.current_turn, is_valid, hover_color);

                    // Occupied cells are still reported so the game loop can explain why
                    if response.clicked() {
                        clicked = Some(pos.to_index());
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
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

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (index, &mark) in board.cells().iter().enumerate() {
            if mark != Mark::Empty {
                self.draw_mark(painter, Pos::from_index(index), mark, 255);
            }
        }
    }

    /// Draw X as two strokes and O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: u8) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;

        match mark {
            Mark::X => {
                let [r, g, b, _] = X_MARK.to_array();
                let stroke = Stroke::new(
                    MARK_STROKE_WIDTH,
                    Color32::from_rgba_unmultiplied(r, g, b, alpha),
                );
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
                    stroke,
                );
            }
            Mark::O => {
                let [r, g, b, _] = O_MARK.to_array();
                painter.circle_stroke(
                    center,
                    half,
                    Stroke::new(
                        MARK_STROKE_WIDTH,
                        Color32::from_rgba_unmultiplied(r, g, b, alpha),
                    ),
                );
            }
            Mark::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-12.0, 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a stroke through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.board_to_screen(Pos::from_index(line[0]));
        let end = self.board_to_screen(Pos::from_index(line[2]));
        painter.line_segment([start, end], stroke);

        for &index in line {
            let rect = self.cell_rect(Pos::from_index(index)).shrink(6.0);
            painter.rect_stroke(
                rect,
                CornerRadius::same(6),
                Stroke::new(2.0, WIN_HIGHLIGHT),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(10.0);
        painter.rect_filled(rect, CornerRadius::same(6), suggestion());
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(28.0),
            TEXT_PRIMARY,
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(
        &self,
        painter: &Painter,
        pos: Pos,
        turn: Mark,
        is_valid: bool,
        hover_color: Color32,
    ) {
        painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(6), hover_color);
        if is_valid {
            self.draw_mark(painter, pos, turn, 80);
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
