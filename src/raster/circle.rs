//! Midpoint circle rasterization.
//!
//! One integer state machine drives both the stroked and the filled
//! variant: [`OctantPoints`] walks the first octant of the circle while
//! tracking an error term, and the two public entry points differ only in
//! what they emit for each `(x, y)` pair the walk produces — eight mirrored
//! pixels for a stroke, four horizontal spans for a fill.
//!
//! Integer-only arithmetic keeps the emitted pixel set deterministic across
//! platforms; there is no floating-point drift and no trigonometry.

/// Iterator over the `(x, y)` offset pairs of one circle octant.
///
/// Starts at `(radius - 1, 0)` and steps until `x < y`, so a non-positive
/// radius yields nothing. Runs in O(radius) with no allocation.
#[derive(Debug, Clone)]
pub struct OctantPoints {
    x: i32,
    y: i32,
    tx: i32,
    ty: i32,
    error: i32,
    diameter: i32,
}

impl OctantPoints {
    /// Begin the octant walk for a circle of the given radius.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        let diameter = radius * 2;
        let tx = 1;
        Self {
            x: radius - 1,
            y: 0,
            tx,
            ty: 1,
            error: tx - diameter,
            diameter,
        }
    }
}

impl Iterator for OctantPoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x < self.y {
            return None;
        }

        let pair = (self.x, self.y);

        if self.error <= 0 {
            self.y += 1;
            self.error += self.ty;
            self.ty += 2;
        }

        // Checked independently of the branch above: a single step may
        // advance both coordinates.
        if self.error > 0 {
            self.x -= 1;
            self.tx += 2;
            self.error += self.tx - self.diameter;
        }

        Some(pair)
    }
}

/// Enumerate the pixels of a stroked circle.
///
/// Calls `plot(x, y)` once for each of the eight octant reflections of every
/// traversed pair, in absolute coordinates around `(cx, cy)`. Reflections
/// that coincide (on the axes and the diagonal) are emitted more than once;
/// plotting is idempotent so this is benign.
///
/// `radius <= 0` is degenerate geometry and emits nothing.
pub fn stroke_circle<F>(cx: i32, cy: i32, radius: i32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    for (x, y) in OctantPoints::new(radius) {
        plot(cx - x, cy - y);
        plot(cx - x, cy + y);
        plot(cx - y, cy - x);
        plot(cx - y, cy + x);
        plot(cx + x, cy - y);
        plot(cx + x, cy + y);
        plot(cx + y, cy - x);
        plot(cx + y, cy + x);
    }
}

/// Enumerate the interior of a filled circle as horizontal spans.
///
/// Calls `span(x0, x1, y)` with `x0 <= x1`, both endpoints inclusive, for
/// the four mirrored rows of every traversed pair. Spans near the diagonal
/// may overlap; span drawing is idempotent per covered pixel.
///
/// `radius <= 0` is degenerate geometry and emits nothing.
pub fn fill_circle<F>(cx: i32, cy: i32, radius: i32, mut span: F)
where
    F: FnMut(i32, i32, i32),
{
    for (x, y) in OctantPoints::new(radius) {
        span(cx - x, cx + x, cy - y);
        span(cx - x, cx + x, cy + y);
        span(cx - y, cx + y, cy - x);
        span(cx - y, cx + y, cy + x);
    }
}
