//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the core rules,
//! the engine loop and the terminal collaborators can share them freely.
//!
//! # Well Dimensions
//!
//! The well is laid out the way a terminal draws it:
//!
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Raw width**: 32 display columns; each logical column is 2 columns wide
//! - **Logical width**: 16 columns (indexed 0-15)
//! - **Playable columns**: 1-15; column 0 is the left wall
//! - **Spawn anchor**: row 0, column 7
//!
//! # Speed Table
//!
//! Gravity interval per level, in microseconds:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000000 |
//! | 1 | 770000 |
//! | 2 | 593000 |
//! | 3 | 457000 |
//! | 4 | 352000 |
//! | 5 | 271000 |
//! | 6 | 208000 |
//! | 7 | 160000 |
//! | 8 | 124000 |
//! | 9+ | 95000 |
//!
//! # Examples
//!
//! ```
//! use tui_well_types::{PieceKind, Rotation, BOARD_WIDTH, WELL_RAW_WIDTH};
//!
//! let piece = PieceKind::from_index(0);
//! assert_eq!(piece, PieceKind::I);
//! assert_eq!(piece.tag(), 1);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(BOARD_WIDTH, WELL_RAW_WIDTH / 2);
//! ```

/// Well height in rows (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Raw well width in display columns
pub const WELL_RAW_WIDTH: u8 = 32;

/// Logical well width; every logical column is drawn 2 display columns wide
pub const BOARD_WIDTH: u8 = WELL_RAW_WIDTH / 2;

/// Leftmost playable column. Column 0 is a wall and never holds a block.
pub const FIRST_PLAYABLE_COL: i8 = 1;

/// Rightmost playable column (`raw_width / 2 - 1`)
pub const LAST_PLAYABLE_COL: i8 = BOARD_WIDTH as i8 - 1;

/// Anchor row for newly spawned pieces
pub const SPAWN_ROW: i8 = 0;

/// Anchor column for newly spawned pieces, horizontally centered
pub const SPAWN_COL: i8 = (WELL_RAW_WIDTH as i8 / 2 - 2) / 2;

/// Number of entries in the speed table
pub const LEVEL_COUNT: usize = 10;

/// Highest level index; anything above reuses the fastest interval
pub const MAX_LEVEL: u32 = LEVEL_COUNT as u32 - 1;

/// Cleared lines needed per level step
pub const LINES_PER_LEVEL: u32 = 3;

/// Gravity interval by level (microseconds per row), strictly decreasing
pub const SPEED_TABLE_US: [u64; LEVEL_COUNT] = [
    1_000_000, 770_000, 593_000, 457_000, 352_000, 271_000, 208_000, 160_000, 124_000, 95_000,
];

/// Points for clearing N rows in one lock
///
/// - 0 rows: 0 points
/// - 1 row: 10 points
/// - 2 rows: 25 points
/// - 3 rows: 40 points
/// - 4 rows: 60 points
pub const LINE_SCORES: [u32; 5] = [0, 10, 25, 40, 60];

/// Number of distinct piece kinds
pub const PIECE_COUNT: usize = 7;

/// The seven tetromino piece kinds, in catalog order
///
/// The catalog order doubles as the occupancy tag written into the board:
/// `I` is tag 1, `T` is tag 7. Colors are chosen by the renderer, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Catalog index (0-6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a catalog index; wraps modulo 7
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_COUNT]
    }

    /// Occupancy tag stored in the board (1-7)
    pub fn tag(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::tag`]; `None` for 0 and anything above 7
    ///
    /// ```
    /// use tui_well_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(7), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_tag(0), None);
    /// ```
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Single uppercase letter for the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::T => "T",
        }
    }
}

/// Rotation states, cycling North → East → South → West → North
///
/// Rotation index 0 is `North`, the spawn orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate one step clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_well_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotation index (0-3)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation at an index; wraps modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Discrete player events delivered by an input source
///
/// Mapping raw keys to these events is the input source's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Rotate the piece one step clockwise
    Rotate,
    /// Force an immediate gravity step
    SoftDrop,
    /// Toggle pause
    Pause,
    /// Abandon the piece and end the session
    Quit,
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(PieceKind)`: occupied, tagged with the kind that locked there
pub type Cell = Option<PieceKind>;
