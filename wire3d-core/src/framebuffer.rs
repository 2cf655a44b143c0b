/// Owned, row-major color grid with clipped writes
use crate::color::Color;
use crate::error::{RenderError, RenderResult};

/// A fixed-size grid of colors, origin top-left, y growing downward
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Allocate a black buffer of `width * height` cells.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RenderError::Allocation { bytes: usize::MAX })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation {
                bytes: len.saturating_mul(std::mem::size_of::<Color>()),
            })?;
        pixels.resize(len, Color::BLACK);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes outside the grid are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Interleaved RGB bytes, row-major, three per cell.
    pub fn export_bytes(&self) -> RenderResult<Vec<u8>> {
        let len = self.pixels.len() * 3;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation { bytes: len })?;
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb_bytes());
        }
        Ok(bytes)
    }
}
