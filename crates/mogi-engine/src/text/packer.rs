/// Position of a packed rectangle inside the atlas, in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Left-to-right shelf packer.
///
/// Rectangles fill the current row until one does not fit horizontally, then a
/// new row opens below the tallest entry of the previous one. `padding` pixels
/// separate entries from each other and from the atlas edges.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    width: u32,
    height: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
        }
    }

    /// Reserves a `w` × `h` slot. Returns `None` once the atlas is full.
    pub fn place(&mut self, w: u32, h: u32) -> Option<Placement> {
        if w + 2 * self.padding > self.width {
            return None;
        }

        // Advance to a new shelf row when the entry doesn't fit horizontally.
        if self.cursor_x + w + self.padding > self.width {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_y + h + self.padding > self.height {
            return None;
        }

        let at = Placement {
            x: self.cursor_x,
            y: self.cursor_y,
        };
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(at)
    }

    /// Bottom edge of the used area.
    pub fn used_height(&self) -> u32 {
        self.cursor_y + self.row_height
    }
}
