use std::str::FromStr;

use crate::error::CsmError;
use crate::types::ROW_WIDTH;

/// Order in which the pixels of a row are packed into a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PixelOrder {
    LeftToRight,
    /// Horizontal mirror.
    RightToLeft,
}

impl PixelOrder {
    /// Map traversal step `step` to a column index.
    pub fn column(self, step: usize) -> usize {
        match self {
            PixelOrder::LeftToRight => step,
            PixelOrder::RightToLeft => ROW_WIDTH - 1 - step,
        }
    }
}

/// Order in which the rows of a block are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RowOrder {
    TopToBottom,
    /// Vertical mirror.
    BottomToTop,
}

impl RowOrder {
    /// Map traversal step `step` to a row offset within a block of `len` rows.
    pub fn offset(self, step: usize, len: usize) -> usize {
        match self {
            RowOrder::TopToBottom => step,
            RowOrder::BottomToTop => len - 1 - step,
        }
    }
}

/// One of the four mirrorings a character set can be emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Orientation {
    pub pixel_order: PixelOrder,
    pub row_order: RowOrder,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        pixel_order: PixelOrder::LeftToRight,
        row_order: RowOrder::TopToBottom,
    };
    pub const VERTICAL: Orientation = Orientation {
        pixel_order: PixelOrder::LeftToRight,
        row_order: RowOrder::BottomToTop,
    };
    pub const HORIZONTAL: Orientation = Orientation {
        pixel_order: PixelOrder::RightToLeft,
        row_order: RowOrder::TopToBottom,
    };
    pub const BOTH: Orientation = Orientation {
        pixel_order: PixelOrder::RightToLeft,
        row_order: RowOrder::BottomToTop,
    };

    /// All orientations in output order.
    pub const CANONICAL: [Orientation; 4] = [
        Orientation::IDENTITY,
        Orientation::VERTICAL,
        Orientation::HORIZONTAL,
        Orientation::BOTH,
    ];

    pub fn is_horizontal_mirror(self) -> bool {
        self.pixel_order == PixelOrder::RightToLeft
    }

    pub fn is_vertical_mirror(self) -> bool {
        self.row_order == RowOrder::BottomToTop
    }

    /// Section banner printed before each orientation pass.
    pub fn banner(self) -> String {
        let name = |flipped| if flipped { "Flipped" } else { "Normal" };
        format!(
            "======== ======== csm: Horizontal {}, Vertical {} ======== ========",
            name(self.is_horizontal_mirror()),
            name(self.is_vertical_mirror()),
        )
    }

    fn canonical_index(self) -> usize {
        match (self.is_horizontal_mirror(), self.is_vertical_mirror()) {
            (false, false) => 0,
            (false, true) => 1,
            (true, false) => 2,
            (true, true) => 3,
        }
    }
}

/// A selection of orientations. Iteration always follows
/// [`Orientation::CANONICAL`], whatever order they were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationSet {
    selected: [bool; 4],
}

impl OrientationSet {
    pub fn empty() -> OrientationSet {
        OrientationSet {
            selected: [false; 4],
        }
    }

    pub fn all() -> OrientationSet {
        OrientationSet {
            selected: [true; 4],
        }
    }

    /// Build a selection from `n`/`h`/`v` letters, ignoring anything else.
    ///
    /// `n` selects the identity. `h` and `v` name mirror axes: alone they
    /// select that single mirror, together they select only the combined
    /// mirror.
    pub fn from_letters(letters: &str) -> OrientationSet {
        let normal = letters.contains('n');
        let horizontal = letters.contains('h');
        let vertical = letters.contains('v');

        let mut set = OrientationSet::empty();
        if normal {
            set.insert(Orientation::IDENTITY);
        }
        match (horizontal, vertical) {
            (true, true) => set.insert(Orientation::BOTH),
            (true, false) => set.insert(Orientation::HORIZONTAL),
            (false, true) => set.insert(Orientation::VERTICAL),
            (false, false) => {}
        }
        set
    }

    pub fn insert(&mut self, orientation: Orientation) {
        self.selected[orientation.canonical_index()] = true;
    }

    pub fn contains(&self, orientation: Orientation) -> bool {
        self.selected[orientation.canonical_index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|&s| s)
    }

    pub fn len(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Orientation> {
        let selected = self.selected;
        Orientation::CANONICAL
            .into_iter()
            .filter(move |o| selected[o.canonical_index()])
    }
}

impl Default for OrientationSet {
    /// Identity only, used when no selection is given.
    fn default() -> Self {
        let mut set = OrientationSet::empty();
        set.insert(Orientation::IDENTITY);
        set
    }
}

impl FromStr for OrientationSet {
    type Err = CsmError;

    /// Strict form of [`OrientationSet::from_letters`]: rejects unknown letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !matches!(c, 'n' | 'h' | 'v')) {
            return Err(CsmError::InvalidOrientation(c));
        }
        Ok(OrientationSet::from_letters(s))
    }
}
