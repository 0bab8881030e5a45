//! The 2x2 block transition rule
//!
//! This rule is the entire physics of the system: blocks with exactly two
//! live cells are inert, every other block complements all four cells, and
//! three-live blocks additionally swap their post-complement diagonals.

/// State of one 2x2 partition block
///
/// Fields hold binary cell values read from the grid as it stood at
/// generation start, whether the block was addressed directly or through
/// modular wrap-around indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Cell at (i, j)
    pub top_left: u8,
    /// Cell at (i, j+1)
    pub top_right: u8,
    /// Cell at (i+1, j)
    pub bottom_left: u8,
    /// Cell at (i+1, j+1)
    pub bottom_right: u8,
}

impl Block {
    /// Assemble a block from its four cell values
    pub const fn new(top_left: u8, top_right: u8, bottom_left: u8, bottom_right: u8) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Number of live cells in the block
    pub const fn live_count(self) -> u8 {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }

    /// Advance the block by one generation
    ///
    /// Pure, total, and deterministic over binary inputs.
    pub const fn apply(self) -> Self {
        match self.live_count() {
            2 => self,
            3 => {
                // The diagonal swap uses the post-complement values
                let flipped = self.complement();
                Self {
                    top_left: flipped.bottom_right,
                    top_right: flipped.bottom_left,
                    bottom_left: flipped.top_right,
                    bottom_right: flipped.top_left,
                }
            }
            _ => self.complement(),
        }
    }

    /// Complement every cell within {0,1}
    const fn complement(self) -> Self {
        Self {
            top_left: self.top_left ^ 1,
            top_right: self.top_right ^ 1,
            bottom_left: self.bottom_left ^ 1,
            bottom_right: self.bottom_right ^ 1,
        }
    }
}
