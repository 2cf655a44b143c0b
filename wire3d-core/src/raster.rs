/// Integer rasterization of segments and vertex markers
use crate::color::Color;
use crate::framebuffer::Framebuffer;

/// A pixel target that primitives can be rasterized into.
///
/// Only `dimensions` and `set_pixel` are required; `set_pixel` must silently
/// ignore coordinates outside the target.
pub trait Raster {
    fn dimensions(&self) -> (u32, u32);

    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        line(self, x0, y0, x1, y1, color);
    }

    fn draw_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        disk(self, cx, cy, radius, color);
    }
}

impl Raster for Framebuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        Framebuffer::set_pixel(self, x, y, color);
    }
}

/// Bresenham segment from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// Endpoints are put in lexicographic order first so that swapping them
/// yields the same pixels.
pub fn line<R: Raster + ?Sized>(
    target: &mut R,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let ((mut x, mut y), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };

    // i64 keeps 2 * err from overflowing on extreme coordinates
    let dx = (i64::from(x1) - i64::from(x)).abs();
    let dy = (i64::from(y1) - i64::from(y)).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        target.set_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Filled disk: every offset with `dx² + dy² <= radius²`.
///
/// Radius 0 is a single pixel; a negative radius draws nothing.
pub fn disk<R: Raster + ?Sized>(target: &mut R, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r2 = i64::from(radius) * i64::from(radius);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) <= r2 {
                target.set_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color);
            }
        }
    }
}
