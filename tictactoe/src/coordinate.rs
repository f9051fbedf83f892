use serde::{Deserialize, Serialize};

/// A position on the board.
///
/// `x` counts columns from the left and `y` counts rows from the top, so
/// `(0, 0)` is the top-left corner. A coordinate knows nothing about the board
/// it is used with, see [`Self::in_bounds()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate moved by `dx` columns and `dy` rows.
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
