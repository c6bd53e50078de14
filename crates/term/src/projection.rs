//! Field-to-terminal projection.
//!
//! Pure (no I/O). Scales logical field rectangles onto the terminal grid.

use crate::types::Rect;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    cols: u16,
    rows: u16,
    field_w: f32,
    field_h: f32,
}

impl Projection {
    pub fn new(cols: u16, rows: u16, field_w: f32, field_h: f32) -> Self {
        Self {
            cols,
            rows,
            field_w,
            field_h,
        }
    }

    pub fn grid(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn set_grid(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Cells covered by `rect`, clipped to the grid.
    ///
    /// Every visible rectangle covers at least one cell on each axis, so
    /// walls thinner than a row still show up.
    pub fn cell_rect(&self, rect: Rect) -> Option<CellRect> {
        let (x, w) = span(rect.x, rect.w, self.field_w, self.cols)?;
        let (y, h) = span(rect.y, rect.h, self.field_h, self.rows)?;
        Some(CellRect { x, y, w, h })
    }
}

fn span(start: i32, len: i32, field: f32, cells: u16) -> Option<(u16, u16)> {
    if len <= 0 || cells == 0 || field <= 0.0 {
        return None;
    }
    let scale = f32::from(cells) / field;
    let lo = (start as f32 * scale).floor() as i64;
    let mut hi = ((start + len) as f32 * scale).ceil() as i64;
    if hi <= lo {
        hi = lo + 1;
    }

    let lo = lo.max(0);
    let hi = hi.min(i64::from(cells));
    if lo >= hi {
        return None;
    }
    Some((lo as u16, (hi - lo) as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Projection {
        Projection::new(80, 24, 1024.0, 768.0)
    }

    #[test]
    fn top_wall_covers_first_row() {
        let r = standard().cell_rect(Rect::new(0, 0, 1024, 15)).unwrap();
        assert_eq!(r, CellRect { x: 0, y: 0, w: 80, h: 1 });
    }

    #[test]
    fn bottom_wall_covers_last_row() {
        let r = standard().cell_rect(Rect::new(0, 753, 1024, 15)).unwrap();
        assert_eq!(r, CellRect { x: 0, y: 23, w: 80, h: 1 });
    }

    #[test]
    fn paddle_spans_rows_proportionally() {
        let r = standard().cell_rect(Rect::new(10, 334, 15, 100)).unwrap();
        // 334/32 = 10.4 .. 434/32 = 13.6
        assert_eq!((r.y, r.h), (10, 4));
        assert_eq!((r.x, r.w), (0, 2));
    }

    #[test]
    fn rect_partly_outside_is_clipped() {
        let r = standard().cell_rect(Rect::new(-4, 376, 15, 15)).unwrap();
        assert_eq!(r.x, 0);
        assert_eq!(r.w, 1);
    }

    #[test]
    fn rect_fully_outside_is_dropped() {
        assert_eq!(standard().cell_rect(Rect::new(-100, 0, 15, 15)), None);
        assert_eq!(standard().cell_rect(Rect::new(1100, 0, 15, 15)), None);
        assert_eq!(standard().cell_rect(Rect::new(0, 0, 0, 15)), None);
    }
}
