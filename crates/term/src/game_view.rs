//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O), so layout is unit-tested directly.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Side length of the next-piece preview box, in board cells
pub const PREVIEW_BOX: u16 = 4;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal layout for the game screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Board origin and frame size for one render
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, showing the snapshot's score.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_score(snap, snap.score, viewport, fb);
    }

    /// Render with an explicit displayed score (the count-up ticker value).
    ///
    /// The game-over overlay always shows the final score from the snapshot.
    pub fn render_into_with_score(
        &self,
        snap: &GameSnapshot,
        displayed_score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let w = board_px_w + 2;
        let h = board_px_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);
        draw_border(fb, frame.x, frame.y, frame.w, frame.h, border_style());

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Filled(color) => {
                        self.draw_block(fb, frame, x as u16, y as u16, *color)
                    }
                    Cell::Vacant => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Active piece. Cells above the top edge are not drawn.
        if let Some(current) = snap.current {
            for (x, y) in current.cells() {
                if (0..i16::from(BOARD_WIDTH)).contains(&x) && (0..i16::from(BOARD_HEIGHT)).contains(&y) {
                    self.draw_block(fb, frame, x as u16, y as u16, current.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, displayed_score, viewport, frame);

        match snap.phase {
            Phase::NotStarted => {
                draw_overlay(fb, frame, &[OverlayLine::Text("PRESS ENTER")]);
            }
            Phase::GameOver => {
                draw_overlay(
                    fb,
                    frame,
                    &[
                        OverlayLine::Text("GAME OVER"),
                        OverlayLine::Score(snap.score),
                        OverlayLine::Text("ENTER: RESTART"),
                    ],
                );
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell_rect(fb, frame.x + 1, frame.y + 1, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Color) {
        self.fill_cell_rect(fb, frame.x + 1, frame.y + 1, x, y, '█', block_style(color));
    }

    /// Fill one board cell (`cell_w` x `cell_h` glyphs) relative to `origin`.
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        displayed_score: u32,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        let box_w = PREVIEW_BOX * self.cell_w + 2;
        if panel_w < box_w.max(10) {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", displayed_score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next);
    }

    /// Next piece centered in a bordered 4x4 box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: Option<Piece>) {
        let inner_w = PREVIEW_BOX * self.cell_w;
        let inner_h = PREVIEW_BOX * self.cell_h;
        let bg = CellStyle::new(SCREEN_BG, WELL_BG);
        fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', bg);
        draw_border(fb, x, y, inner_w + 2, inner_h + 2, border_style());

        let Some(piece) = next else {
            return;
        };
        let (off_x, off_y) = preview_offset(piece);
        for (c, r) in piece.shape.filled() {
            self.fill_cell_rect(
                fb,
                x + 1,
                y + 1,
                off_x + c as u16,
                off_y + r as u16,
                '█',
                block_style(piece.color),
            );
        }
    }
}

/// Top-left cell of `piece` inside the preview box: floor((4 - dim) / 2).
pub fn preview_offset(piece: Piece) -> (u16, u16) {
    let cols = piece.shape.cols() as u16;
    let rows = piece.shape.rows() as u16;
    (
        PREVIEW_BOX.saturating_sub(cols) / 2,
        PREVIEW_BOX.saturating_sub(rows) / 2,
    )
}

/// Terminal color for a block color.
pub fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::new(block_rgb(color), WELL_BG).bold()
}

fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

enum OverlayLine {
    Text(&'static str),
    /// "SCORE <n>"
    Score(u32),
}

impl OverlayLine {
    fn width(&self) -> u16 {
        match self {
            OverlayLine::Text(s) => s.chars().count() as u16,
            OverlayLine::Score(n) => 6 + decimal_width(*n),
        }
    }
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

/// Centered lines over the middle of the well, each on a cleared strip.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[OverlayLine]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = frame
        .y
        .saturating_add(frame.h / 2)
        .saturating_sub(lines.len() as u16 / 2);

    for (i, line) in lines.iter().enumerate() {
        let y = top.saturating_add(i as u16);
        let text_w = line.width();
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.fill_rect(x.saturating_sub(1), y, text_w + 2, 1, ' ', style);
        match line {
            OverlayLine::Text(s) => {
                fb.put_str(x, y, s, style);
            }
            OverlayLine::Score(n) => {
                let end = fb.put_str(x, y, "SCORE ", style);
                fb.put_u32(end, y, *n, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;
    use crate::types::PieceKind;

    #[test]
    fn preview_offsets_center_each_shape() {
        assert_eq!(preview_offset(Piece::new(PieceKind::I)), (0, 1));
        assert_eq!(preview_offset(Piece::new(PieceKind::O)), (1, 1));
        assert_eq!(preview_offset(Piece::new(PieceKind::T)), (0, 1));

        let upright_i = Piece {
            shape: Piece::new(PieceKind::I).shape.rotated_cw(),
            ..Piece::new(PieceKind::I)
        };
        assert_eq!(preview_offset(upright_i), (1, 0));
    }

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(u32::MAX), 10);
    }

    #[test]
    fn every_color_maps_to_distinct_rgb() {
        let colors = [
            Color::Cyan,
            Color::Blue,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Purple,
            Color::Red,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(block_rgb(*a), block_rgb(*b));
            }
        }
    }

    #[test]
    fn running_game_has_no_overlay() {
        let mut game = GameSession::new(1);
        game.start();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 22));
        let text = fb.text();
        assert!(!text.contains("PRESS ENTER"));
        assert!(!text.contains("GAME OVER"));
    }
}
