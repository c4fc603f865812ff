//! Translate moves into turns of a layer range about one of the cube's axes.

use std::ops::RangeInclusive;

use super::moves::{CubeMove, Face};
use crate::error::CubeError;

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-Right axis (x), coordinate 0 on the L face
    LR,
    /// Up-Down axis (y), coordinate 0 on the D face
    UD,
    /// Front-Back axis (z), coordinate 0 on the B face
    FB,
}

impl From<Face> for Axis {
    fn from(face: Face) -> Self {
        match face {
            Face::F | Face::B | Face::S | Face::Z => Axis::FB,
            Face::U | Face::D | Face::E | Face::Y => Axis::UD,
            Face::L | Face::R | Face::M | Face::X => Axis::LR,
        }
    }
}

/// A rotation of every piece whose coordinate on `axis` falls inside `layers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The axis the layers are turned about.
    pub axis: Axis,
    /// The inclusive range of layers turned.
    pub layers: RangeInclusive<usize>,
    /// Number of quarter turns.
    pub rotations: u8,
    /// Direction of each quarter turn, looking down the axis from its far end.
    pub clockwise: bool,
}

impl Turn {
    /// Work out the turn a move makes on a cube whose largest coordinate is `max`.
    ///
    /// The move is normalized first. Returns `Ok(None)` for a middle slice move on an even cube,
    /// which has no center layer to turn.
    pub fn from_move(mv: &CubeMove, max: usize) -> Result<Option<Turn>, CubeError> {
        let mv = mv.normalized();
        let dimension = max + 1;
        let mut layer_min = max;
        let mut layer_max = max;

        if mv.wide {
            layer_min = dimension
                .checked_sub(usize::from(mv.slices))
                .ok_or(CubeError::SliceParam {
                    slices: mv.slices,
                    dimension,
                })?;
        }

        if mv.face.is_far() {
            (layer_min, layer_max) = (max - layer_max, max - layer_min);
        } else if mv.face.is_rotation() {
            layer_min = 0;
            layer_max = max;
        }

        if mv.face.is_middle() {
            if max % 2 == 1 {
                return Ok(None);
            }
            layer_min = max / 2;
            layer_max = layer_min;
        }

        Ok(Some(Turn {
            axis: mv.face.into(),
            layers: layer_min..=layer_max,
            rotations: mv.rotations,
            clockwise: mv.inverted == mv.face.is_reversed(),
        }))
    }
}
