//! An NxNxN cube built from pieces whose stickers are tagged with coordinates.
//!
//! Each piece owns three tiles, one per axis. A tile stores where the piece sits along that axis
//! and which color faces out along it. Turning a layer rotates the two tiles of every piece in the
//! layer that lie in the plane of the turn, and swaps their colors.

pub mod axis;
pub mod faces;
pub mod moves;

use log::{trace, warn};

use crate::error::{CubeError, Error};
use crate::notation::parse_notation;
use axis::{Axis, Turn};
use moves::CubeMove;

/// The color of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// White
    White,
    /// Yellow
    Yellow,
    /// Orange
    Orange,
    /// Red
    Red,
    /// Blue
    Blue,
    /// Green
    Green,
}

impl Color {
    /// The single letter used for this color.
    pub fn as_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Green => 'g',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which color is placed on each face of a new cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct ColorScheme {
    pub up: Color,
    pub left: Color,
    pub front: Color,
    pub right: Color,
    pub back: Color,
    pub down: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            up: Color::White,
            left: Color::Orange,
            front: Color::Green,
            right: Color::Red,
            back: Color::Blue,
            down: Color::Yellow,
        }
    }
}

/// Index of a tile in the cube's tile arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TileId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Tile {
    coordinate: usize,
    color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Piece {
    x: TileId,
    y: TileId,
    z: TileId,
}

/// An NxNxN cube. Only the pieces on the surface are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    max: usize,
    tiles: Vec<Tile>,
    pieces: Vec<Piece>,
}

impl Cube {
    /// A solved cube with `size` layers along each axis, using the default color scheme.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Cube {
        Cube::with_scheme(size, ColorScheme::default())
    }

    /// A solved cube with `size` layers along each axis, colored with `scheme`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_scheme(size: usize, scheme: ColorScheme) -> Cube {
        assert!(size > 0, "a cube needs at least one layer");

        let max = size - 1;
        let on_surface = |p: usize| p == 0 || p == max;
        let paint = |p: usize, low: Color, high: Color| {
            if p == 0 {
                Some(low)
            } else if p == max {
                Some(high)
            } else {
                None
            }
        };

        let count = size.pow(3) - size.saturating_sub(2).pow(3);
        let mut cube = Cube {
            max,
            tiles: Vec::with_capacity(count * 3),
            pieces: Vec::with_capacity(count),
        };

        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    if !(on_surface(x) || on_surface(y) || on_surface(z)) {
                        continue;
                    }
                    let piece = Piece {
                        x: cube.push_tile(x, paint(x, scheme.left, scheme.right)),
                        y: cube.push_tile(y, paint(y, scheme.down, scheme.up)),
                        z: cube.push_tile(z, paint(z, scheme.back, scheme.front)),
                    };
                    cube.pieces.push(piece);
                }
            }
        }

        cube
    }

    fn push_tile(&mut self, coordinate: usize, color: Option<Color>) -> TileId {
        self.tiles.push(Tile { coordinate, color });
        TileId(self.tiles.len() - 1)
    }

    /// The number of layers along each axis.
    pub fn dimension(&self) -> usize {
        self.max + 1
    }

    /// Apply a move to the cube.
    ///
    /// A middle slice move on an even cube does nothing. A wide move turning more layers than
    /// the cube has fails with [`CubeError::SliceParam`] and leaves the cube untouched.
    pub fn execute_move(&mut self, mv: &CubeMove) -> Result<(), CubeError> {
        match Turn::from_move(mv, self.max)? {
            Some(turn) => {
                trace!("{mv} turns {turn:?}");
                self.turn(&turn);
            }
            None => trace!("{mv} has no center layer to turn"),
        }
        Ok(())
    }

    /// Apply moves in order, skipping (and logging) any move that fails.
    pub fn execute_moves<'a, I>(&mut self, moves: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a CubeMove>,
    {
        for mv in moves {
            if let Err(e) = self.execute_move(mv) {
                warn!("skipping {mv}: {e}");
            }
        }
        self
    }

    /// Apply moves in order, stopping at the first move that fails. Moves before the failing one
    /// stay applied.
    pub fn try_execute_moves<'a, I>(&mut self, moves: I) -> Result<&mut Self, CubeError>
    where
        I: IntoIterator<Item = &'a CubeMove>,
    {
        for mv in moves {
            self.execute_move(mv)?;
        }
        Ok(self)
    }

    /// Parse, expand and apply an algorithm written in notation, stopping at the first error.
    ///
    /// ```rust
    /// use cubic::cube::Cube;
    ///
    /// let mut cube = Cube::new(3);
    /// cube.apply_notation("(R U R' U')6").unwrap();
    /// assert!(cube.is_solved());
    /// ```
    pub fn apply_notation(&mut self, notation: &str) -> Result<&mut Self, Error> {
        let moves = parse_notation(notation)?.expand()?;
        self.try_execute_moves(&moves)?;
        Ok(self)
    }

    fn turn(&mut self, turn: &Turn) {
        let Cube { max, tiles, pieces } = self;

        for piece in pieces.iter() {
            let (pivot, a, b) = match turn.axis {
                Axis::LR => (piece.x, piece.y, piece.z),
                Axis::UD => (piece.y, piece.x, piece.z),
                Axis::FB => (piece.z, piece.x, piece.y),
            };
            if turn.layers.contains(&tiles[pivot.0].coordinate) {
                rotate_tiles(tiles, *max, a, b, turn.clockwise, turn.rotations);
            }
        }
    }
}

// Quarter turns in the plane of `a` and `b`. The color follows the coordinate it was read with.
fn rotate_tiles(tiles: &mut [Tile], max: usize, a: TileId, b: TileId, clockwise: bool, n: u8) {
    for _ in 0..n {
        let (ta, tb) = (tiles[a.0], tiles[b.0]);
        let (ca, cb) = if clockwise {
            (max - tb.coordinate, ta.coordinate)
        } else {
            (tb.coordinate, max - ta.coordinate)
        };
        tiles[a.0] = Tile {
            coordinate: ca,
            color: tb.color,
        };
        tiles[b.0] = Tile {
            coordinate: cb,
            color: ta.color,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::moves::strategy::valid_move;
    use super::moves::{CubeMove, Face};
    use super::*;
    use crate::error::NotationError;
    use crate::moves::MoveSequence;
    use crate::mv;

    fn after(size: usize, notation: &str) -> Cube {
        let mut cube = Cube::new(size);
        cube.apply_notation(notation).unwrap();
        cube
    }

    #[test]
    fn piece_counts() {
        assert_eq!(Cube::new(1).pieces.len(), 1);
        assert_eq!(Cube::new(2).pieces.len(), 8);
        assert_eq!(Cube::new(3).pieces.len(), 26);
        assert_eq!(Cube::new(4).pieces.len(), 56);
        assert_eq!(Cube::new(5).tiles.len(), 98 * 3);
        assert_eq!(Cube::new(7).dimension(), 7);
    }

    #[test]
    fn interior_tiles_have_no_color() {
        let cube = Cube::new(3);
        for tile in &cube.tiles {
            assert_eq!(tile.color.is_some(), tile.coordinate != 1);
        }
    }

    #[test]
    fn r_loop() {
        for size in 1..=5 {
            let mut cube = Cube::new(size);
            for _ in 0..4 {
                cube.execute_move(&mv!(R)).unwrap();
            }
            assert_eq!(cube, Cube::new(size));
        }
        assert_eq!(after(3, "R R R R"), Cube::new(3));
    }

    #[test]
    fn moves_change_state() {
        assert_ne!(after(3, "R"), Cube::new(3));
        assert_ne!(after(3, "M"), Cube::new(3));
        assert_ne!(after(2, "U"), Cube::new(2));
    }

    #[test]
    fn middle_slice_on_even_cube() {
        assert_eq!(after(4, "M E S M2 E' S2"), Cube::new(4));
        assert_eq!(after(2, "M"), Cube::new(2));
    }

    #[test]
    fn slices_match_outer_turns() {
        assert_eq!(after(3, "M"), after(3, "R L' x'"));
        assert_eq!(after(3, "E"), after(3, "U D' y'"));
        assert_eq!(after(3, "S"), after(3, "F' B z"));
        assert_eq!(after(3, "3Rw"), after(3, "x"));
        assert_eq!(after(3, "Lw"), after(3, "R x'"));
        assert_eq!(after(4, "Uw"), after(4, "Dw y"));
    }

    #[test]
    fn slice_param() {
        let mut cube = Cube::new(3);
        let too_wide = CubeMove {
            slices: 4,
            wide: true,
            ..mv!(R)
        };
        assert_eq!(
            cube.execute_move(&too_wide),
            Err(CubeError::SliceParam {
                slices: 4,
                dimension: 3
            })
        );
        assert_eq!(cube, Cube::new(3));
        assert_eq!(
            Cube::new(3).apply_notation("R 4Rw").unwrap_err(),
            Error::Cube(CubeError::SliceParam {
                slices: 4,
                dimension: 3
            })
        );
    }

    #[test_log::test]
    fn batch_execution() {
        let too_wide = CubeMove {
            slices: 5,
            wide: true,
            ..mv!(U)
        };
        let moves = [mv!(R), too_wide, mv!(R, 1, true)];

        let mut lenient = Cube::new(4);
        lenient.execute_moves(&moves);
        assert_eq!(lenient, Cube::new(4));

        let mut strict = Cube::new(4);
        assert!(strict.try_execute_moves(&moves).is_err());
        assert_eq!(strict, after(4, "R"));
    }

    #[test]
    fn notation_errors_reach_caller() {
        assert_eq!(
            Cube::new(3).apply_notation("R Q").unwrap_err(),
            Error::Notation(NotationError::TokenExtraction { position: 2 })
        );
        assert_eq!(
            Cube::new(3).apply_notation("R, U").unwrap_err(),
            Error::Notation(NotationError::SeparatorGroup)
        );
    }

    #[test]
    fn custom_scheme() {
        let scheme = ColorScheme {
            up: Color::Yellow,
            down: Color::White,
            ..ColorScheme::default()
        };
        let faces = Cube::with_scheme(2, scheme).faces();
        assert_eq!(faces.up, vec![Some(Color::Yellow); 4]);
        assert_eq!(faces.down, vec![Some(Color::White); 4]);
    }

    #[test]
    #[should_panic]
    fn empty_cube() {
        Cube::new(0);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tiles_stay_on_cube(size in 1..=6usize, mvs in vec(valid_move(), 0..30)) {
            let mut cube = Cube::new(size);
            cube.execute_moves(&mvs);
            prop_assert_eq!(cube.pieces.len(), Cube::new(size).pieces.len());
            prop_assert_eq!(cube.tiles.len(), cube.pieces.len() * 3);
            for tile in &cube.tiles {
                prop_assert!(tile.coordinate <= cube.max);
                prop_assert_eq!(
                    tile.color.is_some(),
                    tile.coordinate == 0 || tile.coordinate == cube.max
                );
            }
        }

        #[test]
        fn inverse_restores(size in 1..=6usize, mvs in vec(valid_move(), 0..30).prop_map(MoveSequence)) {
            let mut cube = Cube::new(size);
            cube.execute_moves(&mvs).execute_moves(&mvs.clone().inverse());
            prop_assert_eq!(cube, Cube::new(size));
        }

        #[test]
        fn cancelling_keeps_state(size in 2..=5usize, mvs in vec(valid_move(), 0..30).prop_map(MoveSequence)) {
            let mut raw = Cube::new(size);
            raw.execute_moves(&mvs);
            let mut cancelled = Cube::new(size);
            cancelled.execute_moves(&mvs.cancel());
            prop_assert_eq!(raw, cancelled);
        }
    }
}
