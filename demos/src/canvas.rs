//! Drawing surfaces that automata render onto.

use colorous::Color;
use itertools::Itertools;
use std::fmt;

/// Black.
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
/// White.
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Surface made of square cells, addressed with `x` to the right and `y`
/// downwards.
pub trait Canvas {
    /// Returns the width and height of the canvas in cells.
    fn size(&self) -> (usize, usize);
    /// Paints one cell. Cells outside the canvas are ignored.
    fn fill_cell(&mut self, x: usize, y: usize, color: Color);
    /// Paints every cell.
    fn clear(&mut self, color: Color) {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                self.fill_cell(x, y, color);
            }
        }
    }
}

/// Characters used to draw increasingly bright cells.
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Canvas that renders to text, one character per cell.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}
impl TextCanvas {
    /// Creates a black canvas.
    pub fn new((width, height): (usize, usize)) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    /// Returns the color of one cell.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}
impl Canvas for TextCanvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    fn fill_cell(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}
impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let mut row = (0..self.width).filter_map(|x| self.pixel(x, y)).map(shade);
            writeln!(f, "{}", row.join(""))?;
        }
        Ok(())
    }
}

/// Returns the character whose density best matches the brightness of a
/// color.
fn shade(color: Color) -> char {
    // Rec. 601 luma, scaled to 0..=255.
    let luma = (299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32) / 1000;
    SHADES[luma as usize * (SHADES.len() - 1) / 255]
}
