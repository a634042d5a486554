//! Bresenham line rasterization.

/// Enumerate the pixels of a line segment using Bresenham's algorithm.
///
/// Calls `plot(x, y)` for every pixel from `(x0, y0)` to `(x1, y1)`, both
/// endpoints inclusive, in traversal order. Works in all octants; a
/// degenerate segment (both endpoints equal) emits exactly one pixel.
pub fn trace_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        plot(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}
