//! HelpView: renders one help carousel page as a card.

use crate::core::PageSnapshot;
use crate::fb::{BoxGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::game_view::{Viewport, GROUND, TEXT};

const CARD_BG: Rgb = Rgb::new(250, 250, 250);
const CARD_FG: Rgb = Rgb::new(40, 40, 48);
const CARD_MUTED: Rgb = Rgb::new(120, 120, 135);
const BUTTON_BG: Rgb = Rgb::new(34, 197, 94);
const BUTTON_FG: Rgb = Rgb::new(255, 255, 255);

const BACK_BUTTON: &str = " ◀ Back [Esc] ";

pub struct HelpView {
    max_card_w: u16,
}

impl Default for HelpView {
    fn default() -> Self {
        Self { max_card_w: 64 }
    }
}

impl HelpView {
    pub fn new(max_card_w: u16) -> Self {
        Self {
            max_card_w: max_card_w.max(16),
        }
    }

    pub fn render_into(&self, page: &PageSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, GROUND).cell(' '));

        fb.put_str(1, 0, BACK_BUTTON, CellStyle::new(BUTTON_FG, BUTTON_BG).bold());

        let card_w = self.max_card_w.min(viewport.width.saturating_sub(4)).max(12);
        let text_w = card_w.saturating_sub(4);
        let body = wrap_words(page.body, text_w as usize);

        // border + image + gap + title + gap + body + gap + footer + border
        let card_h = 8 + body.len() as u16;
        let x = viewport.width.saturating_sub(card_w) / 2;
        let y = 2u16;

        let card = CellStyle::new(CARD_FG, CARD_BG);
        let muted = CellStyle::new(CARD_MUTED, CARD_BG);
        fb.fill_rect(x, y, card_w, card_h, ' ', card);
        fb.draw_box(x, y, card_w, card_h, BoxGlyphs::ROUNDED, muted);

        let tx = x + 2;
        let mut ty = y + 1;
        fb.put_str_max(tx, ty, page.image_ref, text_w, muted.dim());
        ty += 2;
        fb.put_str_max(tx, ty, page.title, text_w, card.bold());
        ty += 2;
        for line in &body {
            fb.put_str_max(tx, ty, line, text_w, card);
            ty += 1;
        }
        ty += 1;
        self.draw_footer(fb, page, tx, ty, text_w);
    }

    pub fn render(&self, page: &PageSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(page, viewport, &mut fb);
        fb
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, page: &PageSnapshot<'_>, x: u16, y: u16, w: u16) {
        let enabled = CellStyle::new(CARD_FG, CARD_BG).bold();
        let disabled = CellStyle::new(CARD_MUTED, CARD_BG).dim();

        let prev = "◀ Prev";
        let next = "Next ▶";
        fb.put_str(x, y, prev, if page.has_prev() { enabled } else { disabled });

        let next_w = next.chars().count() as u16;
        fb.put_str(
            x + w.saturating_sub(next_w),
            y,
            next,
            if page.has_next() { enabled } else { disabled },
        );

        let dots = (0..page.page_count)
            .map(|i| if i == page.page_index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        fb.put_str_centered(x, y, w, &dots, CellStyle::new(CARD_MUTED, CARD_BG));
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        let word_len = chars.len();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars);
        line_len += word_len;
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}
