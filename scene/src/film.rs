use radiometry::color::Color;

/// A width x height grid of linear colors. Row 0 is the bottom row of the picture, matching the
/// camera's pixel coordinates.
#[derive(Debug, Clone)]
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    pub fn new(resolution: (u32, u32)) -> Self {
        let (width, height) = resolution;
        Self {
            width,
            height,
            pixels: vec![Color::black(); (width * height) as usize],
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} film",
            x,
            y,
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let start = self.index(0, y);
        &mut self.pixels[start..start + self.width as usize]
    }

    /// Pixels in film order, bottom row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packs the film into 8-bit RGB triples in image order: top row first, left to right.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .chunks(self.width as usize)
            .rev()
            .flat_map(|row| row.iter().flat_map(|c| c.to_u8()))
            .collect()
    }
}
