//! Parsing of move notation, based on the WCA notation regulations with additional support for
//! repeated groups, commutators and conjugates.
//!
//! ```text
//! R U R' U'           moves
//! 2Rw2' Uw x          wide moves, slice counts and rotations
//! (R U R' U')3        a group repeated three times
//! [R U R': D]         a conjugate, R U R' D R U' R'
//! [R, U]2             a commutator performed twice
//! ```

pub mod group;
mod token;

use log::debug;

use crate::error::NotationError;
pub use group::{Group, GroupKind, Node, Separator, MAX_EXPANDED_MOVES};

/// Parse an algorithm into a tree of groups. The returned group is the root of the tree.
///
/// Groups are tracked with an explicit stack rather than recursion, so deeply nested input
/// cannot exhaust the call stack while parsing, expanding or dropping the tree. Whether
/// separators are used correctly is only checked by [`Group::expand`].
pub fn parse_notation(input: &str) -> Result<Group, NotationError> {
    let bytes = input.as_bytes();
    let mut stack: Vec<Group> = Vec::new();
    let mut current = Group::new(GroupKind::Root);
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
        } else if let Some(kind) = GroupKind::opened_by(c) {
            stack.push(std::mem::replace(&mut current, Group::new(kind)));
            i += 1;
        } else if let Some(kind) = GroupKind::closed_by(c) {
            if kind != current.kind {
                return Err(NotationError::UnexpectedGroupClosure { position: i });
            }
            let Some(parent) = stack.pop() else {
                return Err(NotationError::UnexpectedGroupClosure { position: i });
            };
            let mut group = std::mem::replace(&mut current, parent);
            i += 1;

            if let Some(d) = bytes.get(i).filter(|d| d.is_ascii_digit()) {
                group.factor = d - b'0';
                i += 1;
            }
            current.nodes.push(Node::Group(group));
        } else if let Some(separator) = Separator::from_byte(c) {
            current.nodes.push(Node::Separator(separator));
            i += 1;
        } else {
            let (mv, len) = token::extract(bytes, i)?;
            current.nodes.push(Node::Move(mv));
            i += len;
        }
    }

    if !stack.is_empty() {
        return Err(NotationError::UnclosedGroup { depth: stack.len() });
    }

    debug!("parsed {} top level nodes from {input:?}", current.nodes.len());
    Ok(current)
}
