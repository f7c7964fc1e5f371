/// The hidden arc of a glyph for one frame, as inclusive point indices.
///
/// `start..=end` wraps around the end of the buffer when `start > end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WindowBounds {
    pub start: usize,
    pub end: usize,
    /// Set when the window is at least as wide as the buffer; every point is hidden.
    pub covers_all: bool,
}

impl WindowBounds {
    /// Locate the window for `progress` (already rounded up) over `len` points.
    ///
    /// Returns `None` for an empty buffer so that no modulo by zero is ever taken.
    pub fn locate(progress: i64, span: f64, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let n = len as i64;
        let span_steps = span_steps(span);
        let start = progress.rem_euclid(n);
        let end = progress.saturating_add(span_steps).rem_euclid(n);
        Some(Self {
            start: start as usize,
            end: end as usize,
            covers_all: span_steps.saturating_add(1) >= n,
        })
    }

    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn hides(&self, i: usize) -> bool {
        if self.covers_all {
            true
        } else if self.wraps() {
            i >= self.start || i <= self.end
        } else {
            self.start <= i && i <= self.end
        }
    }

    /// Number of hidden points in a buffer of `len` points.
    pub fn hidden_count(&self, len: usize) -> usize {
        if self.covers_all {
            len
        } else if self.wraps() {
            (len - self.start) + self.end + 1
        } else {
            self.end - self.start + 1
        }
    }
}

/// `ceil(span)`, clamped to zero for negative spans.
fn span_steps(span: f64) -> i64 {
    if span.is_finite() {
        span.ceil().max(0.0) as i64
    } else {
        0
    }
}

/// Per-glyph sweep state: a virtual clock scaled by speed plus a fixed phase.
///
/// Speed and span are passed in on every advance instead of being stored here, so an external
/// tween can drive them without reaching into the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityWindow {
    phase_offset: f64,
    elapsed_time: f64,
    bounds: Option<WindowBounds>,
    advanced: bool,
}

impl VisibilityWindow {
    /// A fresh window over `len` points. Nothing is hidden until the first advance and both
    /// anchors sit on point 0.
    pub fn new(phase_offset: f64, len: usize) -> Self {
        Self {
            phase_offset,
            elapsed_time: 0.0,
            bounds: (len > 0).then_some(WindowBounds {
                start: 0,
                end: 0,
                covers_all: false,
            }),
            advanced: false,
        }
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Anchor indices. Before the first advance both sit on point 0 and nothing is hidden,
    /// so use [`VisibilityWindow::hidden_arc`] to ask what the buffer actually hides.
    pub fn bounds(&self) -> Option<WindowBounds> {
        self.bounds
    }

    /// The arc currently applied to the visibility buffer; `None` until the first advance.
    pub fn hidden_arc(&self) -> Option<WindowBounds> {
        self.bounds.filter(|_| self.advanced)
    }

    /// `ceil(elapsed_time + phase_offset)`.
    pub fn progress(&self) -> i64 {
        let p = (self.elapsed_time + self.phase_offset).ceil();
        if p.is_finite() { p as i64 } else { 0 }
    }

    /// Advance the clock by `dt * speed` and rewrite `visibility` (1 = draw, 0 = hidden).
    pub fn advance(
        &mut self,
        dt: f64,
        speed: f64,
        span: f64,
        visibility: &mut [u8],
    ) -> Option<WindowBounds> {
        self.elapsed_time += dt * speed;
        self.bounds = WindowBounds::locate(self.progress(), span, visibility.len());
        self.advanced = true;
        if let Some(bounds) = self.bounds {
            for (i, flag) in visibility.iter_mut().enumerate() {
                *flag = u8::from(!bounds.hides(i));
            }
        }
        self.bounds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/window.rs"]
mod tests;
