//! Reading a single move token such as `3Rw2'`.

use std::str::FromStr;

use crate::cube::moves::{CubeMove, Face};
use crate::error::NotationError;

/// Read the move starting at byte `start` of `input`. Returns the normalized move and the number
/// of bytes it took up.
///
/// A token is an optional slice digit, a face letter, an optional `w`, an optional rotation digit
/// and an optional `'`. It does not have to be followed by a space, so `RU` reads as `R` then `U`.
pub(crate) fn extract(input: &[u8], start: usize) -> Result<(CubeMove, usize), NotationError> {
    let mut i = start;
    let digit = |i: usize| input.get(i).filter(|c| c.is_ascii_digit()).map(|c| c - b'0');

    let slices = digit(i).unwrap_or(0);
    if digit(i).is_some() {
        i += 1;
    }

    let face = input
        .get(i)
        .and_then(|&c| Face::from_char(char::from(c)))
        .ok_or(NotationError::TokenExtraction { position: start })?;
    i += 1;

    let wide = input.get(i) == Some(&b'w');
    if wide {
        i += 1;
    }

    let rotations = digit(i).unwrap_or(1);
    if digit(i).is_some() {
        i += 1;
    }

    let inverted = input.get(i) == Some(&b'\'');
    if inverted {
        i += 1;
    }

    let mv = CubeMove {
        slices,
        face,
        wide,
        rotations,
        inverted,
    }
    .normalized();
    mv.validate(start)?;

    Ok((mv, i - start))
}

impl FromStr for CubeMove {
    type Err = NotationError;

    /// Parse exactly one move, with no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mv, len) = extract(s.as_bytes(), 0)?;
        if len != s.len() {
            return Err(NotationError::TokenExtraction { position: len });
        }
        Ok(mv)
    }
}
