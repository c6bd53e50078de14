//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. After
//! that only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `fb` and keep it as the diff base for the next frame.
    ///
    /// The previous frame is swapped back into `fb`, so callers keep reusing
    /// one buffer without cloning. Its contents are stale and should be
    /// cleared before drawing.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            prev => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev =
                    prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }

        self.out
            .write_all(&self.buf)
            .and_then(|()| self.out.flush())
            .context("writing frame to terminal")
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut style: Option<Cell> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            put_cell(out, fb.get(x, y).unwrap_or_default(), &mut style)?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<Cell> = None;
    let mut wrote = false;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            put_cell(out, next.get(x + dx, y).unwrap_or_default(), &mut style)?;
        }
        wrote = true;
        Ok(())
    })?;

    if wrote {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn put_cell(out: &mut Vec<u8>, cell: Cell, style: &mut Option<Cell>) -> Result<()> {
    if !style.is_some_and(|s| s.same_style(&cell)) {
        out.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
        *style = Some(cell);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();

    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color as FieldColor;

    #[test]
    fn changed_runs_are_coalesced() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        let white = Cell::solid(FieldColor::WHITE);
        b.fill_rect(1, 0, 3, 1, white);
        b.set(5, 1, white);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let fb = FrameBuffer::new(5, 5);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn second_identical_frame_writes_nothing() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut fb = FrameBuffer::new(3, 2);

        fb.clear(Cell::solid(FieldColor::BLUE));
        renderer.present(&mut fb).unwrap();
        let first = renderer.writer().len();
        assert!(first > 0);

        fb.clear(Cell::solid(FieldColor::BLUE));
        renderer.present(&mut fb).unwrap();
        assert_eq!(renderer.writer().len(), first);
    }

    #[test]
    fn resize_forces_full_redraw() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut fb = FrameBuffer::new(3, 2);
        renderer.present(&mut fb).unwrap();
        let first = renderer.writer().len();

        let mut bigger = FrameBuffer::new(4, 2);
        renderer.present(&mut bigger).unwrap();
        let mut full = Vec::new();
        encode_full_into(&FrameBuffer::new(4, 2), &mut full).unwrap();
        assert_eq!(renderer.writer().len(), first + full.len());
    }
}
