//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, optional instructions panel, status bar,
//! session controls, the row being built, the offered rod, rod actions and the
//! fit hint. The settings modal is drawn last, on top of everything.

use crate::core::{FitHint, Phase, Rod, SessionSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::format::format_elapsed;
use crate::types::{DEFAULT_TARGET_WIDTH, MAX_TARGET_WIDTH, MIN_TARGET_WIDTH};

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

/// Presentation-only state drawn on top of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overlays {
    pub instructions: bool,
    /// Draft target while the settings modal is open.
    pub settings_draft: Option<u32>,
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(130, 130, 140);
const BLUE: Rgb = Rgb::new(90, 150, 240);
const GREEN: Rgb = Rgb::new(90, 200, 110);
const RED: Rgb = Rgb::new(230, 90, 90);
const PURPLE: Rgb = Rgb::new(190, 130, 230);
const YELLOW: Rgb = Rgb::new(230, 200, 80);
const SLOT_BG: Rgb = Rgb::new(30, 30, 40);
const MODAL_BG: Rgb = Rgb::new(35, 35, 55);

const INSTRUCTIONS: [&str; 5] = [
    "Fill the row with rods to exactly match the target sum.",
    "- [Enter] places the offered rod at the end of the row",
    "- If a rod doesn't fit, [d] discards it and draws a new one",
    "- Complete the row by making the sum equal to the target",
    "- Faster completion and fewer discards give better scores",
];

/// A lightweight terminal renderer for the rod puzzle.
pub struct GameView {
    /// Terminal columns per rod unit.
    unit_w: u16,
    /// Terminal rows per rod.
    rod_h: u16,
    margin_x: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x2 keeps a one-unit rod roughly square in most terminal fonts.
        Self {
            unit_w: 2,
            rod_h: 2,
            margin_x: 2,
        }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        overlays: &Overlays,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let x = self.margin_x;
        let mut y = 0;

        fb.put_str(x, y, "CUISENAIRE ROD PUZZLE", CellStyle::plain(TEXT, BG).bold());
        y += 2;

        if overlays.instructions {
            y = self.draw_instructions(fb, x, y);
        }
        y = self.draw_status(fb, snap, x, y);
        y = self.draw_controls(fb, snap, x, y);
        y = self.draw_row(fb, snap, x, y);
        y = self.draw_available(fb, snap, x, y);
        self.draw_actions(fb, snap, x, y);

        if viewport.height > 0 {
            fb.put_str(
                x,
                viewport.height - 1,
                "[i] Instructions  [q] Quit",
                CellStyle::plain(MUTED, BG),
            );
        }

        if let Some(draft) = overlays.settings_draft {
            self.draw_settings(fb, draft, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        overlays: &Overlays,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlays, viewport, &mut fb);
        fb
    }

    fn draw_instructions(&self, fb: &mut FrameBuffer, x: u16, y: u16) -> u16 {
        let w = INSTRUCTIONS.iter().map(|l| l.len() as u16).max().unwrap_or(0) + 4;
        let h = INSTRUCTIONS.len() as u16 + 3;
        let border = CellStyle::plain(MUTED, BG);
        draw_border(fb, x, y, w, h, border);

        let text = CellStyle::plain(TEXT, BG);
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            let style = if i == 0 { text.bold() } else { text };
            fb.put_str(x + 2, y + 1 + i as u16, line, style);
        }
        fb.put_str(
            x + 2,
            y + h - 2,
            "[i] hide these instructions",
            CellStyle::plain(MUTED, BG),
        );
        y + h + 1
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) -> u16 {
        let label = CellStyle::plain(TEXT, BG).bold();

        let mut cx = fb.put_str(x, y, "Target: ", label);
        cx = fb.put_u32(cx, y, snap.target_width, CellStyle::plain(BLUE, BG).bold());
        if let Some(next) = snap.pending_target {
            let dim = CellStyle::plain(MUTED, BG);
            cx = fb.put_str(cx, y, " (next: ", dim);
            cx = fb.put_u32(cx, y, next, dim);
            cx = fb.put_str(cx, y, ")", dim);
        }

        cx = fb.put_str(cx + 3, y, "Current: ", label);
        cx = fb.put_u32(cx, y, snap.current_sum, CellStyle::plain(GREEN, BG).bold());

        cx = fb.put_str(cx + 3, y, "Trials: ", label);
        cx = fb.put_u32(cx, y, snap.trials, CellStyle::plain(RED, BG).bold());

        cx = fb.put_str(cx + 3, y, "Time: ", label);
        fb.put_str(
            cx,
            y,
            &format_elapsed(snap.time_elapsed),
            CellStyle::plain(PURPLE, BG).bold(),
        );
        y + 1
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) -> u16 {
        let key = CellStyle::plain(YELLOW, BG);
        let mut cx = x;

        match snap.phase() {
            Phase::Idle => {
                cx = fb.put_str(cx, y, "[n] Start Game", key) + 3;
            }
            Phase::Complete => {
                let score = snap.score().unwrap_or(0);
                let banner = CellStyle::plain(GREEN, BG).bold();
                cx = fb.put_str(cx, y, "Row Complete! +", banner);
                cx = fb.put_u32(cx, y, score, banner);
                cx = fb.put_str(cx, y, " pts", banner) + 3;
            }
            Phase::Active => {}
        }

        cx = fb.put_str(cx, y, "[s] Settings", key) + 3;
        if snap.phase() != Phase::Idle {
            fb.put_str(cx, y, "[r] Reset", key);
        }
        y + 2
    }

    fn draw_row(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) -> u16 {
        fb.put_str(x, y, "Current Row", CellStyle::plain(TEXT, BG).bold());

        let frame_y = y + 1;
        let inner_w = (snap.target_width as u16) * self.unit_w;
        draw_border(
            fb,
            x,
            frame_y,
            inner_w + 2,
            self.rod_h + 2,
            CellStyle::plain(MUTED, BG),
        );

        let inner_x = x + 1;
        let inner_y = frame_y + 1;
        let slot = CellStyle::plain(Rgb::new(90, 90, 100), SLOT_BG).dim();
        for unit in 0..snap.target_width as u16 {
            let ux = inner_x + unit * self.unit_w;
            fb.fill_rect(ux, inner_y, self.unit_w, self.rod_h, ' ', slot);
            fb.put_char(ux, inner_y, '·', slot);
        }

        let mut rx = inner_x;
        for rod in &snap.row {
            rx = self.draw_rod(fb, rx, inner_y, rod);
        }

        let progress_y = frame_y + self.rod_h + 2;
        let text = CellStyle::plain(TEXT, BG);
        let mut cx = fb.put_str(x, progress_y, "Progress: ", text);
        cx = fb.put_u32(cx, progress_y, snap.current_sum, text);
        cx = fb.put_str(cx, progress_y, "/", text);
        cx = fb.put_u32(cx, progress_y, snap.target_width, text);
        if snap.playable() && !snap.row.is_empty() {
            let dim = CellStyle::plain(MUTED, BG);
            cx = fb.put_str(cx + 1, progress_y, "(", dim);
            cx = fb.put_u32(cx, progress_y, snap.remaining(), dim);
            fb.put_str(cx, progress_y, " to go)", dim);
        } else if snap.row.is_empty() {
            fb.put_str(
                cx + 3,
                progress_y,
                "Fill this row with rods to match the target sum",
                CellStyle::plain(MUTED, BG),
            );
        }
        progress_y + 2
    }

    fn draw_available(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) -> u16 {
        fb.put_str(x, y, "Available Rod", CellStyle::plain(TEXT, BG).bold());
        let rod_y = y + 1;

        match snap.available {
            Some(rod) => {
                let end = self.draw_rod(fb, x + 2, rod_y, &rod);
                let text = CellStyle::plain(TEXT, BG);
                let cx = fb.put_str(end + 2, rod_y, "Length: ", text);
                fb.put_u32(cx, rod_y, rod.length(), text);
            }
            None => {
                let msg = match snap.phase() {
                    Phase::Complete => "Row completed! Start a new game.",
                    _ => "Press [n] to start a game.",
                };
                fb.put_str(x + 2, rod_y, msg, CellStyle::plain(MUTED, BG));
            }
        }
        rod_y + self.rod_h + 1
    }

    fn draw_actions(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) -> u16 {
        let enabled = snap.playable() && snap.available.is_some();
        let style = if enabled {
            CellStyle::plain(YELLOW, BG).bold()
        } else {
            CellStyle::plain(MUTED, BG).dim()
        };

        let cx = fb.put_str(x, y, "[Enter] Place Rod", style);
        fb.put_str(cx + 4, y, "[d] Discard & Get New", style);

        if let Some(hint) = snap.fit_hint() {
            let color = match hint {
                FitHint::Fits => GREEN,
                FitHint::Exceeds => RED,
            };
            fb.put_str(x, y + 1, hint.message(), CellStyle::plain(color, BG).bold());
        }
        y + 2
    }

    /// Draw a rod as a colored block labelled with its length. Returns the
    /// column just past the rod.
    fn draw_rod(&self, fb: &mut FrameBuffer, x: u16, y: u16, rod: &Rod) -> u16 {
        let color = rod.color();
        let fg = if color.is_light() {
            Rgb::new(20, 20, 20)
        } else {
            Rgb::new(240, 240, 240)
        };
        let style = CellStyle::plain(fg, color.into());
        let w = (rod.length() as u16) * self.unit_w;

        fb.fill_rect(x, y, w, self.rod_h, ' ', style);
        fb.put_char(x, y, '▏', style);

        let label_w = if rod.length() >= 10 { 2 } else { 1 };
        let label_x = x + w.saturating_sub(label_w) / 2;
        fb.put_u32(label_x, y + (self.rod_h - 1) / 2, rod.length(), style.bold());
        x + w
    }

    fn draw_settings(&self, fb: &mut FrameBuffer, draft: u32, viewport: Viewport) {
        let draft = draft.clamp(MIN_TARGET_WIDTH, MAX_TARGET_WIDTH);
        let w: u16 = 60;
        let h: u16 = 11;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let base = CellStyle::plain(TEXT, MODAL_BG);
        fb.fill_rect(x, y, w, h, ' ', base);
        draw_border(fb, x, y, w, h, CellStyle::plain(Rgb::new(200, 200, 200), MODAL_BG));

        let ix = x + 2;
        fb.put_str(ix, y + 1, "Game Settings", base.bold());
        fb.put_str(ix, y + 3, "Target Row Width (Sum)", base);

        // Slider: one column per accepted value.
        let track_y = y + 4;
        let mut cx = fb.put_u32(ix, track_y, MIN_TARGET_WIDTH, base) + 1;
        for value in MIN_TARGET_WIDTH..=MAX_TARGET_WIDTH {
            let (ch, color) = if value == draft {
                ('●', BLUE)
            } else if value < draft {
                ('━', BLUE)
            } else {
                ('─', MUTED)
            };
            fb.put_char(cx, track_y, ch, CellStyle::plain(color, MODAL_BG));
            cx += 1;
        }
        let cx = fb.put_u32(cx + 1, track_y, MAX_TARGET_WIDTH, base);
        fb.put_u32(cx + 3, track_y, draft, CellStyle::plain(BLUE, MODAL_BG).bold());

        let mut hx = fb.put_str(
            ix,
            y + 6,
            "Set the target sum for completing a row (default: ",
            CellStyle::plain(MUTED, MODAL_BG),
        );
        hx = fb.put_u32(hx, y + 6, DEFAULT_TARGET_WIDTH, CellStyle::plain(MUTED, MODAL_BG));
        fb.put_str(hx, y + 6, ")", CellStyle::plain(MUTED, MODAL_BG));

        fb.put_str(
            ix,
            y + h - 2,
            "[<-/->] adjust   [Enter] Save Settings   [Esc] Cancel",
            CellStyle::plain(YELLOW, MODAL_BG),
        );
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_view_offers_start_but_not_reset() {
        let snap = SessionSnapshot::default();
        let fb = GameView::default().render(&snap, &Overlays::default(), Viewport::new(80, 30));
        let text = fb.text();

        assert!(text.contains("[n] Start Game"));
        assert!(!text.contains("[r] Reset"));
        assert!(text.contains("Press [n] to start a game."));
    }

    #[test]
    fn row_frame_scales_with_target() {
        let snap = SessionSnapshot {
            target_width: 5,
            ..SessionSnapshot::default()
        };
        let fb = GameView::default().render(&snap, &Overlays::default(), Viewport::new(80, 30));

        // Title (0), blank, status (2), controls (3), blank, label (5), frame top (6).
        assert_eq!(fb.get(2, 6).unwrap().ch, '┌');
        assert_eq!(fb.get(2 + 5 * 2 + 1, 6).unwrap().ch, '┐');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = SessionSnapshot::default();
        let overlays = Overlays {
            instructions: true,
            settings_draft: Some(12),
        };
        let fb = GameView::default().render(&snap, &overlays, Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
        let _ = GameView::default().render(&snap, &overlays, Viewport::new(0, 0));
    }
}
