//! Moves on an NxNxN cube, and the rules for normalizing and merging them.

use crate::error::NotationError;
use crate::moves::Cancellation;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The letter of a move: an outer face, a middle slice or a whole cube rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Left
    L,
    /// Front
    F,
    /// Right
    R,
    /// Back
    B,
    /// Down
    D,
    /// Middle slice, turning like L
    M,
    /// Equator slice, turning like D
    E,
    /// Standing slice, turning like F
    S,
    /// Whole cube rotation, turning like R (written `x`)
    X,
    /// Whole cube rotation, turning like U (written `y`)
    Y,
    /// Whole cube rotation, turning like F (written `z`)
    Z,
}

impl Face {
    /// Every move letter, in notation order.
    pub const ARRAY: [Face; 12] = [
        Face::U,
        Face::L,
        Face::F,
        Face::R,
        Face::B,
        Face::D,
        Face::M,
        Face::E,
        Face::S,
        Face::X,
        Face::Y,
        Face::Z,
    ];

    /// The face for a notation character, if there is one.
    pub fn from_char(c: char) -> Option<Face> {
        Some(match c {
            'U' => Face::U,
            'L' => Face::L,
            'F' => Face::F,
            'R' => Face::R,
            'B' => Face::B,
            'D' => Face::D,
            'M' => Face::M,
            'E' => Face::E,
            'S' => Face::S,
            'x' => Face::X,
            'y' => Face::Y,
            'z' => Face::Z,
            _ => return None,
        })
    }

    /// The notation character for this face.
    pub fn as_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
            Face::M => 'M',
            Face::E => 'E',
            Face::S => 'S',
            Face::X => 'x',
            Face::Y => 'y',
            Face::Z => 'z',
        }
    }

    /// Whether this is a whole cube rotation (`x`, `y`, `z`).
    pub fn is_rotation(self) -> bool {
        matches!(self, Face::X | Face::Y | Face::Z)
    }

    /// Whether this is a middle slice (`M`, `E`, `S`).
    pub fn is_middle(self) -> bool {
        matches!(self, Face::M | Face::E | Face::S)
    }

    /// Whether this face sits at coordinate 0 of its axis, so its layers count up from 0.
    pub fn is_far(self) -> bool {
        matches!(self, Face::L | Face::B | Face::D | Face::E)
    }

    /// Whether a clockwise turn of this face runs against the positive direction of its axis.
    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            Face::R | Face::F | Face::D | Face::E | Face::S | Face::X | Face::Z
        )
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single move on an NxNxN cube, e.g. `R`, `U2'` or `3Rw`.
///
/// A normalized move has `rotations` of 1 or 2, and its direction is carried only by `inverted`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeMove {
    /// Number of outer layers a wide move turns. Zero on a plain move.
    pub slices: u8,
    /// The letter of the move.
    pub face: Face,
    /// Whether the move was marked wide with `w`.
    pub wide: bool,
    /// Number of quarter turns.
    pub rotations: u8,
    /// Whether the move is anticlockwise (`'`).
    pub inverted: bool,
}

impl CubeMove {
    /// A single clockwise quarter turn of the given face.
    pub fn new(face: Face) -> Self {
        CubeMove {
            slices: 0,
            face,
            wide: false,
            rotations: 1,
            inverted: false,
        }
    }

    /// Reduce the move to its canonical form. A bare wide move turns two layers, and rotations
    /// are reduced to 1 or 2 with the direction moved into `inverted`.
    pub fn normalize(&mut self) {
        if self.slices == 0 && self.wide {
            self.slices = 2;
        }
        self.set_rotations(i16::from(self.rotations));
    }

    /// The normalized form of this move.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    // A multiple of 4 keeps the sign and becomes a single turn.
    fn set_rotations(&mut self, rotations: i16) {
        match rotations.rem_euclid(4) {
            0 => self.rotations = 1,
            3 => {
                self.rotations = 1;
                self.inverted = !self.inverted;
            }
            r => self.rotations = r as u8,
        }
    }

    /// Check the slice and wide markers of the move. `position` is reported in the error.
    pub fn validate(&self, position: usize) -> Result<(), NotationError> {
        if self.face.is_rotation() && (self.slices > 0 || self.wide) {
            return Err(NotationError::RotationMove { position });
        }
        if self.slices != 0 && !self.wide {
            return Err(NotationError::SlicesMove { position });
        }
        Ok(())
    }
}

impl crate::moves::Move for CubeMove {
    fn inverse(self) -> Self {
        Self {
            inverted: !self.inverted,
            ..self
        }
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face != b.face || self.slices != b.slices || self.wide != b.wide {
            return Cancellation::TwoMove(self, b);
        }

        let rotations = if self.inverted == b.inverted {
            i16::from(self.rotations) + i16::from(b.rotations)
        } else {
            i16::from(self.rotations) - i16::from(b.rotations)
        };

        if rotations.rem_euclid(4) == 0 {
            Cancellation::NoMove
        } else {
            let mut combined = self;
            combined.set_rotations(rotations);
            Cancellation::OneMove(combined.normalized())
        }
    }
}

impl std::fmt::Display for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Two layers is implied by a bare `w`.
        if (self.wide && self.slices != 2) || (!self.wide && self.slices != 0) {
            write!(f, "{}", self.slices)?;
        }
        write!(f, "{}", self.face)?;
        if self.wide {
            f.write_str("w")?;
        }
        if self.rotations != 1 {
            write!(f, "{}", self.rotations)?;
        }
        if self.inverted {
            f.write_str("'")?;
        }
        Ok(())
    }
}

// Notation is far easier to read in test failures than the derived struct dump.
impl std::fmt::Debug for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// Create a plain (non wide) move from a face and optionally a rotation count and inverted flag.
/// `CubeMove` and `Face` must be in scope, and the face is given without the `Face::` prefix.
#[macro_export]
macro_rules! mv {
    ($face:ident) => {
        $crate::mv!($face, 1)
    };
    ($face:ident, $rotations:expr) => {
        $crate::mv!($face, $rotations, false)
    };
    ($face:ident, $rotations:expr, $inverted:expr) => {
        CubeMove {
            slices: 0,
            face: Face::$face,
            wide: false,
            rotations: $rotations,
            inverted: $inverted,
        }
    };
}
