//! Module for puzzle move generics and related functionality

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves cancelled into one move.
    ///
    /// e.g. `R R` cancels into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    TwoMove(M, M),
}

/// A move, for use in writing expressions or algorithms. A term of this trait is a power of a
/// symbol in some group presentation, and two adjacent powers of the same symbol may merge.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Return the cancellation of two adjacent moves, `self` first.
    ///
    /// ```rust
    /// # fn main() {
    /// use cubic::mv;
    /// use cubic::cube::moves::{CubeMove, Face};
    /// use cubic::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(R).cancel(mv!(U, 1, true)) == Cancellation::TwoMove(mv!(R), mv!(U, 1, true)));
    /// assert!(mv!(R).cancel(mv!(R)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R).cancel(mv!(R, 1, true)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Merge adjacent moves. Each move is only ever merged with the last move kept so far, so
    /// moves never travel past each other and the order of the sequence is preserved.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::with_capacity(self.0.len());

        for next_mv in self.0.drain(..) {
            let Some(last) = cancellation.pop() else {
                cancellation.push(next_mv);
                continue;
            };

            match last.cancel(next_mv) {
                Cancellation::NoMove => {}
                Cancellation::OneMove(m) => cancellation.push(m),
                Cancellation::TwoMove(a, b) => {
                    cancellation.push(a);
                    cancellation.push(b);
                }
            }
        }

        Self(cancellation)
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The sequence performed `times` times in a row. Zero is treated as one.
    pub fn repeat(self, times: usize) -> Self {
        if times <= 1 {
            return self;
        }
        let len = self.0.len() * times;
        Self(self.0.into_iter().cycle().take(len).collect())
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, M: Move> IntoIterator for &'a MoveSequence<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<M: Move + std::fmt::Display> std::fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
