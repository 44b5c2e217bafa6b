//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board row `y` is drawn at screen row `height - 1 - y`: the engine's y axis
//! points up, the terminal's points down.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardState, Tile};

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

const BACKGROUND: Rgb = Rgb::new(146, 135, 125);
const LABEL: Rgb = Rgb::new(0, 0, 0);
const BIG_TILE: Rgb = Rgb::new(60, 58, 50);

/// Background color of a tile.
///
/// Values past 2048 share one dark color.
pub fn tile_color(value: Tile) -> Rgb {
    match value {
        0 => Rgb::new(255, 255, 255),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => BIG_TILE,
    }
}

/// Text shown on a tile: its value, or nothing for an empty cell.
pub fn tile_label(value: Tile) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Where everything lands for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border.
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub pad_x: u16,
    pub pad_y: u16,
    /// Border size, border included.
    pub frame_w: u16,
    pub frame_h: u16,
    rows: u16,
}

impl Layout {
    /// Screen position of the top-left character of tile `(x, y)`.
    pub fn tile_origin(&self, x: usize, y: usize) -> (u16, u16) {
        let col = to_u16(x);
        let row = self.rows.saturating_sub(1).saturating_sub(to_u16(y));
        (
            self.origin_x
                .saturating_add(1)
                .saturating_add(self.pad_x)
                .saturating_add(col.saturating_mul(self.cell_w.saturating_add(self.pad_x))),
            self.origin_y
                .saturating_add(1)
                .saturating_add(self.pad_y)
                .saturating_add(row.saturating_mul(self.cell_h.saturating_add(self.pad_y))),
        )
    }
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Preferred tile width in terminal columns.
    cell_w: u16,
    /// Preferred tile height in terminal rows.
    cell_h: u16,
    /// Gap between tiles (and between tiles and the border).
    pad_x: u16,
    pad_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles read roughly square with typical glyph proportions.
        Self {
            cell_w: 7,
            cell_h: 3,
            pad_x: 1,
            pad_y: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, pad_x: u16, pad_y: u16) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    /// Fit a `cols x rows` board into `viewport`.
    ///
    /// Tiles keep their preferred size when there is room and shrink (down to
    /// one cell) when the terminal is too small. The frame is centered.
    pub fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> Layout {
        let cols = to_u16(cols.max(1));
        let rows = to_u16(rows.max(1));

        let fit = |avail: u16, pad: u16, n: u16, preferred: u16| -> u16 {
            let room = avail
                .saturating_sub(2)
                .saturating_sub(pad.saturating_mul(n.saturating_add(1)));
            (room / n).clamp(1, preferred)
        };
        let cell_w = fit(viewport.width, self.pad_x, cols, self.cell_w);
        let cell_h = fit(viewport.height, self.pad_y, rows, self.cell_h);

        // Saturates for boards wider or taller than a terminal can address.
        let span = |n: u16, cell: u16, pad: u16| -> u16 {
            n.saturating_mul(cell)
                .saturating_add(n.saturating_add(1).saturating_mul(pad))
                .saturating_add(2)
        };
        let frame_w = span(cols, cell_w, self.pad_x);
        let frame_h = span(rows, cell_h, self.pad_y);

        Layout {
            origin_x: viewport.width.saturating_sub(frame_w) / 2,
            origin_y: viewport.height.saturating_sub(frame_h) / 2,
            cell_w,
            cell_h,
            pad_x: self.pad_x,
            pad_y: self.pad_y,
            frame_w,
            frame_h,
            rows,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap.width, snap.height, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        fb.fill_rect(
            layout.origin_x,
            layout.origin_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            CellStyle::new(BACKGROUND, BACKGROUND),
        );
        draw_border(
            fb,
            layout.origin_x,
            layout.origin_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for y in 0..snap.height {
            for x in 0..snap.width {
                let value = snap.get(x, y).unwrap_or(0);
                self.draw_tile(fb, &layout, x, y, value);
            }
        }

        self.draw_side_panel(fb, snap, &layout, viewport);

        match snap.state {
            BoardState::Win => draw_banner(fb, &layout, "YOU WIN"),
            BoardState::Lost => draw_banner(fb, &layout, "GAME OVER"),
            BoardState::Continue => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, x: usize, y: usize, value: Tile) {
        let (px, py) = layout.tile_origin(x, y);
        let bg = tile_color(value);
        fb.fill_rect(px, py, layout.cell_w, layout.cell_h, ' ', CellStyle::new(bg, bg));

        let label = tile_label(value);
        if !label.is_empty() {
            let style = CellStyle::new(LABEL, bg).bold();
            fb.put_centered(px, py + layout.cell_h / 2, layout.cell_w, &label, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        let panel_x = layout
            .origin_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let entries = [
            ("TARGET", snap.target.to_string()),
            ("MOVES", snap.moves.to_string()),
            ("MAX", snap.max_tile().to_string()),
        ];

        let mut y = layout.origin_y;
        for (name, text) in entries.iter() {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        fb.put_str(panel_x, y.saturating_add(1), "arrows/wasd", value);
        fb.put_str(panel_x, y.saturating_add(2), "q quit", value);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// One line of text across the middle of the frame.
fn draw_banner(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let mid_y = layout.origin_y.saturating_add(layout.frame_h / 2);
    let padded = format!(" {} ", text);
    fb.put_centered(layout.origin_x, mid_y, layout.frame_w, &padded, style);
}
