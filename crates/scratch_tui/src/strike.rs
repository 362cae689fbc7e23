//! Strike-through line drawn across a winning combination.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use tracing::instrument;

/// A point in terminal cell coordinates (column, row), fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Column.
    pub x: f64,
    /// Row.
    pub y: f64,
}

impl Point {
    /// Centre of `rect`.
    pub fn center_of(rect: Rect) -> Self {
        Self {
            x: f64::from(rect.x) + f64::from(rect.width) / 2.0,
            y: f64::from(rect.y) + f64::from(rect.height) / 2.0,
        }
    }
}

/// Segment from the first to the last cell of a winning line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeLine {
    start: Point,
    end: Point,
}

impl StrikeLine {
    /// Spans the centres of `first` and `last`, overshooting by
    /// `extension / 2` at each end.
    #[instrument(level = "trace")]
    pub fn between(first: Rect, last: Rect, extension: f64) -> Self {
        let a = Point::center_of(first);
        let b = Point::center_of(last);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let distance = dx.hypot(dy);
        if distance == 0.0 {
            return Self { start: a, end: b };
        }

        let (ux, uy) = (dx / distance, dy / distance);
        let half = extension / 2.0;
        Self {
            start: Point {
                x: a.x - ux * half,
                y: a.y - uy * half,
            },
            end: Point {
                x: b.x + ux * half,
                y: b.y + uy * half,
            },
        }
    }

    /// Start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Angle of the segment in radians, screen rows growing downward.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// Length of the segment in cells.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Box-drawing glyph matching the slope.
    pub fn glyph(&self) -> &'static str {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        if dy.abs() < f64::EPSILON {
            "─"
        } else if dx.abs() < f64::EPSILON {
            "│"
        } else if (dx > 0.0) == (dy > 0.0) {
            "╲"
        } else {
            "╱"
        }
    }

    /// Terminal cells the segment passes through, clipped to `area`.
    pub fn cells(&self, area: Rect) -> Vec<(u16, u16)> {
        let Some((start, end)) = self.clip(area) else {
            return Vec::new();
        };
        let length = (end.x - start.x).hypot(end.y - start.y);
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        let mut cells: Vec<(u16, u16)> = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (start.x + (end.x - start.x) * t).floor();
            let y = (start.y + (end.y - start.y) * t).floor();
            if x < f64::from(area.left())
                || y < f64::from(area.top())
                || x >= f64::from(area.right())
                || y >= f64::from(area.bottom())
            {
                continue;
            }
            let cell = (x as u16, y as u16);
            if cells.last() != Some(&cell) {
                cells.push(cell);
            }
        }
        cells
    }

    /// Part of the segment inside `area` (Liang-Barsky), clamped to its
    /// edges so the stepped length never exceeds the area's diagonal.
    fn clip(&self, area: Rect) -> Option<(Point, Point)> {
        if area.is_empty() {
            return None;
        }
        let (left, right) = (f64::from(area.left()), f64::from(area.right()));
        let (top, bottom) = (f64::from(area.top()), f64::from(area.bottom()));
        let (dx, dy) = (self.end.x - self.start.x, self.end.y - self.start.y);

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-dx, self.start.x - left),
            (dx, right - self.start.x),
            (-dy, self.start.y - top),
            (dy, bottom - self.start.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                t0 = t0.max(q / p);
            } else {
                t1 = t1.min(q / p);
            }
        }
        if t0 > t1 {
            return None;
        }

        let at = |t: f64| Point {
            x: (self.start.x + dx * t).clamp(left, right),
            y: (self.start.y + dy * t).clamp(top, bottom),
        };
        Some((at(t0), at(t1)))
    }
}

/// Draws a [`StrikeLine`] over whatever is already in the buffer.
#[derive(Debug, Clone, Copy)]
pub struct StrikeWidget {
    line: StrikeLine,
    style: Style,
}

impl StrikeWidget {
    /// Creates the widget.
    pub fn new(line: StrikeLine, style: Style) -> Self {
        Self { line, style }
    }
}

impl Widget for StrikeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph = self.line.glyph();
        for (x, y) in self.line.cells(area) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_style(self.style);
            }
        }
    }
}
