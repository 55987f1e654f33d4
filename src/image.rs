use std::mem;

/// One pixel, three 8-bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed 0x00RRGGBB word, the layout pixels travel in on the device.
    pub fn from_packed(word: u32) -> Self {
        Self::new((word >> 16) as u8, (word >> 8) as u8, word as u8)
    }

    pub fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Row-major pixel buffer with dimensions fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "empty image");
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Size of the device transfer buffer: one packed u32 word per pixel.
    pub fn size_in_bytes(&self) -> usize {
        self.size() * mem::size_of::<u32>()
    }

    /// Resets every pixel to black. Runs before each strategy pass so a
    /// pass only ever has to write its unbounded pixels.
    pub fn clear(&mut self) {
        self.pixels.fill(Color::BLACK);
    }

    pub fn put(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[x + self.width * y] = color;
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[x + self.width * y]
    }

    /// Splices a block of whole rows starting at row `y`.
    pub fn fill_rows(&mut self, y: usize, rows: &[Color]) {
        assert!(rows.len() % self.width == 0, "partial row");
        let start = y * self.width;
        assert!(start + rows.len() <= self.pixels.len(), "rows out of range");
        self.pixels[start..start + rows.len()].copy_from_slice(rows);
    }

    pub fn row(&self, y: usize) -> &[Color] {
        debug_assert!(y < self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_image_is_black() {
        let img = Image::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(img.get(x, y), Color::BLACK);
            }
        }
    }

    #[test]
    fn test_put_is_row_major() {
        let mut img = Image::new(4, 3);
        img.put(1, 2, Color::BLUE);
        assert_eq!(img.row(2)[1], Color::BLUE);
        assert_eq!(img.get(1, 2), Color::BLUE);
        assert_eq!(img.get(2, 1), Color::BLACK);
    }

    #[test]
    fn test_clear_resets_all_pixels() {
        let mut img = Image::new(2, 2);
        img.put(0, 0, Color::BLUE);
        img.put(1, 1, Color::new(7, 8, 9));
        img.clear();
        assert_eq!(img, Image::new(2, 2));
    }

    #[test]
    fn test_fill_rows() {
        let mut img = Image::new(2, 3);
        img.fill_rows(1, &[Color::BLUE, Color::BLUE, Color::new(1, 2, 3), Color::BLACK]);
        assert_eq!(img.get(0, 0), Color::BLACK);
        assert_eq!(img.get(0, 1), Color::BLUE);
        assert_eq!(img.get(1, 1), Color::BLUE);
        assert_eq!(img.get(0, 2), Color::new(1, 2, 3));
    }

    #[test]
    fn test_sizes() {
        let img = Image::new(10, 4);
        assert_eq!(img.size(), 40);
        assert_eq!(img.size_in_bytes(), 160);
    }

    #[test]
    fn test_packed_color_round_trip() {
        assert_eq!(Color::BLUE.packed(), 0x0000ff);
        assert_eq!(Color::from_packed(0x0000ff), Color::BLUE);
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(Color::from_packed(c.packed()), c);
    }
}
