//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously flushed one; only changed runs of
//! cells are re-emitted. A size change (or `invalidate`) forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// On return `fb` holds the previously drawn frame, ready to be rendered
    /// into again without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(0, 0),
        };

        self.buf.clear();
        if prev.width() != fb.width() || prev.height() != fb.height() {
            encode_full_into(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Emits style changes only when the style actually differs from the last one.
#[derive(Default)]
struct StyleTracker {
    current: Option<CellStyle>,
}

impl StyleTracker {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut styles = StyleTracker::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            styles.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
    }

    finish(out)
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same dimensions; otherwise a full redraw is
/// emitted instead.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut styles = StyleTracker::default();
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            styles.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
    }

    finish(out)
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` runs of changed cells, row by row. Sizes must match.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let w = next.width() as usize;
    let mut runs = Vec::new();
    if w == 0 {
        return runs;
    }

    for (y, (a, b)) in prev
        .cells()
        .chunks(w)
        .zip(next.cells().chunks(w))
        .enumerate()
    {
        let mut x = 0;
        while x < w {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y as u16, (x - start) as u16));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(5, 1, Cell { ch: 'Y', style });

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_emit_no_cells() {
        let a = FrameBuffer::new(4, 3);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        finish(&mut reset_only).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn diff_falls_back_to_full_on_size_change() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);

        let mut diff = Vec::new();
        encode_diff_into(&a, &b, &mut diff).unwrap();
        let mut full = Vec::new();
        encode_full_into(&b, &mut full).unwrap();
        assert_eq!(diff, full);
    }

    #[test]
    fn style_tracker_skips_repeats() {
        let mut styles = StyleTracker::default();
        let mut out = Vec::new();
        styles.apply(&mut out, CellStyle::default()).unwrap();
        let first = out.len();
        styles.apply(&mut out, CellStyle::default()).unwrap();
        assert_eq!(out.len(), first);
        styles.apply(&mut out, CellStyle::default().bold()).unwrap();
        assert!(out.len() > first);
    }
}
