//! Flattened sticker views of the six outer faces of a cube.

use super::{Color, Cube};
use crate::error::FacesError;

/// The stickers of each face, stored row by row. Each face has `size * size` entries.
///
/// Rows run top to bottom as the face is seen from outside the cube with U on top, except for U
/// (B edge first) and D (F edge first).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct CubeFaces {
    pub up: Vec<Option<Color>>,
    pub left: Vec<Option<Color>>,
    pub front: Vec<Option<Color>>,
    pub right: Vec<Option<Color>>,
    pub back: Vec<Option<Color>>,
    pub down: Vec<Option<Color>>,
}

impl CubeFaces {
    /// The faces in the order U, L, F, R, B, D.
    pub fn all(&self) -> [&[Option<Color>]; 6] {
        [
            &self.up,
            &self.left,
            &self.front,
            &self.right,
            &self.back,
            &self.down,
        ]
    }

    /// Check that every face has the same, square, number of stickers.
    pub fn validate(&self) -> Result<(), FacesError> {
        let [first, rest @ ..] = self.all();
        let len = first.len();
        if rest.iter().any(|face| face.len() != len) {
            return Err(FacesError::FaceLengthsDiffer);
        }

        let side = len.isqrt();
        if side * side != len {
            return Err(FacesError::FaceNotPerfectSquare { len });
        }

        Ok(())
    }
}

impl Cube {
    /// Project the cube onto its six faces.
    pub fn faces(&self) -> CubeFaces {
        let n = self.dimension();
        let m = self.max;
        let mut faces = CubeFaces {
            up: vec![None; n * n],
            left: vec![None; n * n],
            front: vec![None; n * n],
            right: vec![None; n * n],
            back: vec![None; n * n],
            down: vec![None; n * n],
        };

        for piece in &self.pieces {
            let x = self.tiles[piece.x.0];
            let y = self.tiles[piece.y.0];
            let z = self.tiles[piece.z.0];
            let (xc, yc, zc) = (x.coordinate, y.coordinate, z.coordinate);

            if yc == m {
                faces.up[xc + zc * n] = y.color;
            }
            if yc == 0 {
                faces.down[(m - zc) * n + xc] = y.color;
            }
            if xc == 0 {
                faces.left[(m - yc) * n + zc] = x.color;
            }
            if xc == m {
                faces.right[(m - yc) * n + (m - zc)] = x.color;
            }
            if zc == 0 {
                faces.back[(m - xc) + (m - yc) * n] = z.color;
            }
            if zc == m {
                faces.front[xc + (m - yc) * n] = z.color;
            }
        }

        faces
    }

    /// Whether every face shows a single color. A rotated but otherwise solved cube counts.
    pub fn is_solved(&self) -> bool {
        self.faces()
            .all()
            .iter()
            .all(|face| face.windows(2).all(|w| w[0] == w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::moves::strategy::valid_move;

    use crate::cube::Color::*;

    fn faces_after(size: usize, notation: &str) -> CubeFaces {
        let mut cube = Cube::new(size);
        cube.apply_notation(notation).unwrap();
        cube.faces()
    }

    #[test]
    fn solved_faces() {
        let faces = Cube::new(3).faces();
        assert_eq!(faces.up, vec![Some(White); 9]);
        assert_eq!(faces.left, vec![Some(Orange); 9]);
        assert_eq!(faces.front, vec![Some(Green); 9]);
        assert_eq!(faces.right, vec![Some(Red); 9]);
        assert_eq!(faces.back, vec![Some(Blue); 9]);
        assert_eq!(faces.down, vec![Some(Yellow); 9]);
        assert!(faces.validate().is_ok());
    }

    #[test]
    fn u_turn() {
        let faces = faces_after(3, "U");
        assert_eq!(faces.front[..3], [Some(Red); 3]);
        assert_eq!(faces.front[3..], [Some(Green); 6]);
        assert_eq!(faces.left[..3], [Some(Green); 3]);
        assert_eq!(faces.back[..3], [Some(Orange); 3]);
        assert_eq!(faces.right[..3], [Some(Blue); 3]);
        assert_eq!(faces.up, vec![Some(White); 9]);
    }

    #[test]
    fn r_turn() {
        let faces = faces_after(3, "R");
        for i in [2, 5, 8] {
            assert_eq!(faces.up[i], Some(Green));
            assert_eq!(faces.front[i], Some(Yellow));
        }
        for i in [0, 1, 3, 4, 6, 7] {
            assert_eq!(faces.up[i], Some(White));
        }
        assert_eq!(faces.right, vec![Some(Red); 9]);
    }

    #[test]
    fn wide_turn_on_big_cube() {
        let faces = faces_after(5, "3Uw");
        assert_eq!(faces.front[..15], [Some(Red); 15]);
        assert_eq!(faces.front[15..], [Some(Green); 10]);
    }

    #[test]
    fn solved_checks() {
        assert!(Cube::new(4).is_solved());
        let mut cube = Cube::new(3);
        cube.apply_notation("x y2 z'").unwrap();
        assert!(cube.is_solved());
        cube.apply_notation("R").unwrap();
        assert!(!cube.is_solved());
        cube.apply_notation("R'").unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn validation() {
        let mut faces = CubeFaces::default();
        assert_eq!(faces.validate(), Ok(()));

        faces.left = vec![Some(Red); 4];
        assert_eq!(faces.validate(), Err(FacesError::FaceLengthsDiffer));

        for face in [
            &mut faces.up,
            &mut faces.left,
            &mut faces.front,
            &mut faces.right,
            &mut faces.back,
            &mut faces.down,
        ] {
            *face = vec![None; 6];
        }
        assert_eq!(
            faces.validate(),
            Err(FacesError::FaceNotPerfectSquare { len: 6 })
        );
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stickers_are_conserved(size in 1..=6usize, mvs in vec(valid_move(), 0..30)) {
            let mut cube = Cube::new(size);
            cube.execute_moves(&mvs);
            let faces = cube.faces();
            prop_assert!(faces.validate().is_ok());

            let mut counts = std::collections::HashMap::new();
            for face in faces.all() {
                for sticker in face {
                    prop_assert!(sticker.is_some());
                    *counts.entry(*sticker).or_insert(0) += 1;
                }
            }
            if size > 1 {
                prop_assert_eq!(counts.len(), 6);
                prop_assert!(counts.values().all(|&c| c == size * size));
            }
        }
    }
}
