//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{BugSlot, GameSnapshot};
use crate::fb::{BoxGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::types::slot_key;

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

pub(crate) const GROUND: Rgb = Rgb::new(28, 52, 32);
pub(crate) const TEXT: Rgb = Rgb::new(230, 230, 220);
const FOUND: Rgb = Rgb::new(120, 220, 120);
const CURRENT: Rgb = Rgb::new(250, 210, 90);
const PANEL_BG: Rgb = Rgb::new(245, 245, 245);
const PANEL_FG: Rgb = Rgb::new(40, 40, 48);
const PANEL_MUTED: Rgb = Rgb::new(110, 110, 125);
const CLOSE_RED: Rgb = Rgb::new(220, 60, 60);

const FEEDBACK_CLOSE: &str = "[Enter] Close";

/// Renders the bug row, progress line and feedback panel.
pub struct GameView {
    /// Preferred tile width in columns.
    tile_w: u16,
    tile_h: u16,
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 16,
            tile_h: 5,
            gap: 2,
        }
    }
}

/// Where a bug tile ended up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub slot: BugSlot,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(4),
            tile_h: tile_h.max(3),
            gap,
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let ground = CellStyle::new(TEXT, GROUND);
        fb.clear(ground.cell(' '));

        self.draw_header(fb, snap, viewport);

        for tile in self.layout(snap, viewport) {
            self.draw_tile(fb, snap, tile);
        }

        if snap.feedback_visible() {
            self.draw_feedback(fb, snap, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Tile positions for every catalog entry, left to right, vertically centered.
    ///
    /// Tiles shrink to fit narrow terminals; they never overlap.
    pub fn layout(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> Vec<TileRect> {
        let n = snap.catalog.len() as u16;
        if n == 0 {
            return Vec::new();
        }
        let gaps = self.gap * (n - 1);
        let fit_w = viewport.width.saturating_sub(gaps) / n;
        let w = self.tile_w.min(fit_w).max(3);
        let total = w * n + gaps;
        let start_x = viewport.width.saturating_sub(total) / 2;
        let y = (viewport.height.saturating_sub(self.tile_h) / 2).max(3);

        snap.catalog
            .iter()
            .map(|(slot, _)| TileRect {
                slot,
                x: start_x + slot.0 as u16 * (w + self.gap),
                y,
                w,
                h: self.tile_h,
            })
            .collect()
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, viewport: Viewport) {
        let title = CellStyle::new(TEXT, GROUND).bold();
        let hint = CellStyle::new(TEXT, GROUND).dim();

        fb.put_str(1, 0, "BUG HUNT", title);

        let last = snap.catalog.len().saturating_sub(1) as u8;
        let keys = format!(
            "[{}-{}] click  [?] help  [q] quit",
            slot_key(0).unwrap_or('1'),
            slot_key(last).unwrap_or('?')
        );
        let keys_w = keys.chars().count() as u16;
        if viewport.width > keys_w + 12 {
            fb.put_str(viewport.width - keys_w - 1, 0, &keys, hint);
        }

        let status = if snap.has_won {
            "You found them all! Click a bad bug to play again.".to_string()
        } else {
            format!(
                "Find the bad bugs. Found {}/{}",
                snap.found.len(),
                snap.target
            )
        };
        let style = if snap.has_won {
            CellStyle::new(FOUND, GROUND).bold()
        } else {
            CellStyle::new(TEXT, GROUND)
        };
        fb.put_str(1, 1, &status, style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, tile: TileRect) {
        let Some(entry) = snap.catalog.get(tile.slot) else {
            return;
        };
        let is_current = snap.current_bug_id == Some(entry.id.as_str());
        let found = snap.is_found(tile.slot);

        let (glyphs, border) = if found {
            (BoxGlyphs::HEAVY, CellStyle::new(FOUND, GROUND).bold())
        } else if is_current {
            (BoxGlyphs::HEAVY, CellStyle::new(CURRENT, GROUND).bold())
        } else {
            (BoxGlyphs::ROUNDED, CellStyle::new(TEXT, GROUND))
        };
        fb.draw_box(tile.x, tile.y, tile.w, tile.h, glyphs, border);

        let inner_x = tile.x + 1;
        let inner_w = tile.w.saturating_sub(2);
        let text = CellStyle::new(TEXT, GROUND);

        let key = slot_key(tile.slot.0)
            .map(|k| format!("[{}]", k))
            .unwrap_or_default();
        fb.put_str_centered(inner_x, tile.y + 1, inner_w, &key, text.dim());
        fb.put_str_centered(inner_x, tile.y + 2, inner_w, &entry.id, text.bold());
        if tile.h > 4 {
            let image = image_name(&entry.descriptor.image_ref);
            fb.put_str_centered(inner_x, tile.y + 3, inner_w, image, text.dim());
        }
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, viewport: Viewport) {
        let header = snap.feedback_header();
        let body = snap.feedback_body();

        let content_w = [header, body, FEEDBACK_CLOSE]
            .iter()
            .map(|s| s.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let w = (content_w + 8).min(viewport.width);
        let h = 7u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let panel = CellStyle::new(PANEL_FG, PANEL_BG);
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, BoxGlyphs::LIGHT, CellStyle::new(PANEL_MUTED, PANEL_BG));

        let inner_w = w.saturating_sub(4);
        fb.put_str_max(x + 2, y + 1, header, inner_w, panel.bold());
        fb.put_char(x + w.saturating_sub(3), y + 1, '×', CellStyle::new(PANEL_MUTED, PANEL_BG));
        fb.put_str_max(x + 2, y + 3, body, inner_w, CellStyle::new(PANEL_MUTED, PANEL_BG));

        let close_w = FEEDBACK_CLOSE.chars().count() as u16;
        fb.put_str_max(
            x + w.saturating_sub(close_w + 2),
            y + 5,
            FEEDBACK_CLOSE,
            inner_w,
            CellStyle::new(CLOSE_RED, PANEL_BG).bold(),
        );
    }
}

/// File name part of an image reference.
fn image_name(image_ref: &str) -> &str {
    image_ref.rsplit('/').next().unwrap_or(image_ref)
}
