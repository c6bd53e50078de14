//! The terminal as a game platform.
//!
//! The "surface" is the terminal in raw mode on the alternate screen; the
//! "renderer" is a framebuffer sized to the terminal plus the diffing
//! [`TerminalRenderer`]. Both are released by the idempotent teardown calls
//! and again, as a fallback, on drop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    style::ResetColor,
    terminal, QueueableCommand,
};
use tracing::{debug, info, warn};

use crate::fb::{Cell, FrameBuffer};
use crate::input::{is_quit, HeldKeys};
use crate::projection::Projection;
use crate::renderer::TerminalRenderer;
use crate::types::{Color, InitError, KeyState, Platform, PlatformEvent, Rect};

/// Smallest terminal the field can be projected onto.
pub const MIN_COLS: u16 = 16;
pub const MIN_ROWS: u16 = 8;

struct RenderTarget {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    projection: Projection,
}

impl RenderTarget {
    fn resize(&mut self, cols: u16, rows: u16) {
        self.fb.resize(cols, rows);
        self.projection.set_grid(cols, rows);
        self.renderer.invalidate();
    }
}

pub struct TerminalPlatform {
    surface: bool,
    enhanced_keys: bool,
    field: (f32, f32),
    target: Option<RenderTarget>,
    held: HeldKeys,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self {
            surface: false,
            enhanced_keys: false,
            field: (0.0, 0.0),
            target: None,
            held: HeldKeys::new(),
        }
    }

    fn handle(&mut self, event: Event) -> Option<PlatformEvent> {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release && is_quit(key) {
                    return Some(PlatformEvent::Quit);
                }
                self.held.apply(key, Instant::now());
            }
            Event::Resize(cols, rows) => {
                if let Some(target) = self.target.as_mut() {
                    debug!(cols, rows, "terminal resized");
                    target.resize(cols, rows);
                }
            }
            _ => {}
        }
        None
    }
}

impl Default for TerminalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

fn enter_screen(out: &mut impl Write, title: &str) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(terminal::SetTitle(title))?;
    out.flush()?;
    Ok(())
}

fn leave_screen(out: &mut impl Write, enhanced_keys: bool) -> Result<()> {
    if enhanced_keys {
        out.queue(PopKeyboardEnhancementFlags)?;
    }
    out.queue(ResetColor)?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

impl Platform for TerminalPlatform {
    fn create_surface(
        &mut self,
        title: &str,
        _x: i32,
        _y: i32,
        width: u32,
        height: u32,
    ) -> Result<(), InitError> {
        if self.surface {
            return Ok(());
        }
        terminal::enable_raw_mode().map_err(|e| InitError::Surface(e.to_string()))?;
        self.surface = true;

        let mut out = io::stdout();
        enter_screen(&mut out, title).map_err(|e| InitError::Surface(e.to_string()))?;

        // Without release events held keys fall back to a timeout.
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            let flags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
            if out
                .queue(PushKeyboardEnhancementFlags(flags))
                .and_then(|o| o.flush())
                .is_ok()
            {
                self.enhanced_keys = true;
                self.held.set_release_events(true);
            }
        }
        info!(enhanced_keys = self.enhanced_keys, "terminal surface created");

        self.field = (width as f32, height as f32);
        Ok(())
    }

    fn create_renderer(&mut self) -> Result<(), InitError> {
        if !self.surface {
            return Err(InitError::Renderer("no surface".to_string()));
        }
        let (cols, rows) = terminal::size().map_err(|e| InitError::Renderer(e.to_string()))?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(InitError::Renderer(format!(
                "terminal is {cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS}"
            )));
        }

        let (field_w, field_h) = self.field;
        self.target = Some(RenderTarget {
            renderer: TerminalRenderer::stdout(),
            fb: FrameBuffer::new(cols, rows),
            projection: Projection::new(cols, rows, field_w, field_h),
        });
        Ok(())
    }

    fn poll_event(&mut self) -> Option<PlatformEvent> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    warn!(error = %err, "polling terminal events failed");
                    return None;
                }
            }
            match event::read() {
                Ok(ev) => {
                    if let Some(platform_event) = self.handle(ev) {
                        return Some(platform_event);
                    }
                }
                Err(err) => {
                    warn!(error = %err, "reading terminal event failed");
                    return None;
                }
            }
        }
    }

    fn key_state(&mut self) -> KeyState {
        self.held.state(Instant::now())
    }

    fn clear(&mut self, color: Color) {
        if let Some(target) = self.target.as_mut() {
            target.fb.clear(Cell::solid(color));
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(target) = self.target.as_mut() {
            if let Some(r) = target.projection.cell_rect(rect) {
                target.fb.fill_rect(r.x, r.y, r.w, r.h, Cell::solid(color));
            }
        }
    }

    fn present(&mut self) {
        if let Some(target) = self.target.as_mut() {
            if let Err(err) = target.renderer.present(&mut target.fb) {
                warn!(error = %err, "present failed");
            }
        }
    }

    fn destroy_renderer(&mut self) {
        self.target = None;
    }

    fn destroy_surface(&mut self) {
        if !self.surface {
            return;
        }
        self.surface = false;
        if let Err(err) = leave_screen(&mut io::stdout(), self.enhanced_keys) {
            warn!(error = %err, "restoring terminal failed");
        }
        self.enhanced_keys = false;
    }

    fn shutdown(&mut self) {
        self.held.reset();
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        self.teardown();
    }
}
