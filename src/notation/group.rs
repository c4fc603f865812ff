//! The tree of groups produced by the parser, and its expansion into a flat move sequence.

use log::debug;

use crate::cube::moves::CubeMove;
use crate::error::NotationError;
use crate::moves::MoveSequence;

/// What kind of delimiters a group was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// The top level of an algorithm, with no delimiters.
    Root,
    /// `( ... )`, repeated by its factor.
    Repeat,
    /// `[ ... ]`, which may hold a commutator or conjugate.
    Bracket,
}

impl GroupKind {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            GroupKind::Root => ("", ""),
            GroupKind::Repeat => ("(", ")"),
            GroupKind::Bracket => ("[", "]"),
        }
    }

    pub(crate) fn opened_by(c: u8) -> Option<GroupKind> {
        match c {
            b'(' => Some(GroupKind::Repeat),
            b'[' => Some(GroupKind::Bracket),
            _ => None,
        }
    }

    pub(crate) fn closed_by(c: u8) -> Option<GroupKind> {
        match c {
            b')' => Some(GroupKind::Repeat),
            b']' => Some(GroupKind::Bracket),
            _ => None,
        }
    }
}

/// Splits a bracket group into the part before and the part after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `[A: B]` is `A B A'`.
    Conjugate,
    /// `[A, B]` is `A B A' B'`.
    Commutator,
}

impl Separator {
    pub(crate) fn from_byte(c: u8) -> Option<Separator> {
        match c {
            b':' => Some(Separator::Conjugate),
            b',' => Some(Separator::Commutator),
            _ => None,
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Separator::Conjugate => f.write_str(":"),
            Separator::Commutator => f.write_str(","),
        }
    }
}

/// An entry of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single move.
    Move(CubeMove),
    /// A nested group.
    Group(Group),
    /// A commutator or conjugate separator.
    Separator(Separator),
}

/// The most moves a single group may expand to, counted before adjacent moves are merged.
pub const MAX_EXPANDED_MOVES: usize = 1 << 20;

/// A sequence of nodes, performed `factor` times.
///
/// Dropping, expanding and displaying a group walk the tree with a heap allocated stack, so
/// nesting depth is only bounded by memory. The derived `Clone`, `PartialEq` and `Debug` impls
/// still recurse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The contents of the group, in order.
    pub nodes: Vec<Node>,
    /// How many times the group is performed. 0 and 1 both mean once.
    pub factor: u8,
    /// The delimiters the group was written with.
    pub kind: GroupKind,
}

impl Group {
    /// An empty group performed once.
    pub fn new(kind: GroupKind) -> Self {
        Group {
            nodes: Vec::new(),
            factor: 1,
            kind,
        }
    }

    /// Flatten the group into a sequence of moves, resolving factors, commutators and conjugates
    /// and merging adjacent moves of the same layers.
    ///
    /// Fails with [`NotationError::ExpansionTooLarge`] if any group would expand to more than
    /// [`MAX_EXPANDED_MOVES`] moves.
    ///
    /// ```rust
    /// use cubic::notation::parse_notation;
    ///
    /// let moves = parse_notation("[R: U]").unwrap().expand().unwrap();
    /// assert_eq!(moves.to_string(), "R U R'");
    /// ```
    pub fn expand(&self) -> Result<MoveSequence<CubeMove>, NotationError> {
        let mut frames = vec![Expansion::new(self)];
        let mut expanded = MoveSequence(Vec::new());

        while let Some(frame) = frames.last_mut() {
            let group = frame.group;
            if let Some(node) = group.nodes.get(frame.next) {
                frame.next += 1;
                match node {
                    Node::Move(m) => frame.target().push(*m),
                    Node::Group(inner) => frames.push(Expansion::new(inner)),
                    Node::Separator(s) => {
                        if frame.separator.is_some() {
                            return Err(NotationError::MultipleSeparators);
                        }
                        frame.separator = Some(*s);
                    }
                }
                continue;
            }

            let Some(done) = frames.pop() else {
                break;
            };
            let moves = done.finish()?;
            match frames.last_mut() {
                Some(parent) => parent.extend(moves)?,
                None => expanded = moves,
            }
        }

        Ok(expanded)
    }
}

/// A group part way through expansion.
struct Expansion<'a> {
    group: &'a Group,
    next: usize,
    head: Vec<CubeMove>,
    tail: Vec<CubeMove>,
    separator: Option<Separator>,
}

impl<'a> Expansion<'a> {
    fn new(group: &'a Group) -> Self {
        Expansion {
            group,
            next: 0,
            head: Vec::new(),
            tail: Vec::new(),
            separator: None,
        }
    }

    fn target(&mut self) -> &mut Vec<CubeMove> {
        if self.separator.is_some() {
            &mut self.tail
        } else {
            &mut self.head
        }
    }

    fn extend(&mut self, moves: MoveSequence<CubeMove>) -> Result<(), NotationError> {
        if self.head.len() + self.tail.len() + moves.len() > MAX_EXPANDED_MOVES {
            return Err(too_large());
        }
        self.target().extend(moves);
        Ok(())
    }

    fn finish(self) -> Result<MoveSequence<CubeMove>, NotationError> {
        let group = self.group;
        if self.separator.is_some() && group.kind != GroupKind::Bracket {
            return Err(NotationError::SeparatorGroup);
        }

        let (h, t) = (self.head.len(), self.tail.len());
        let once = match self.separator {
            None => h + t,
            Some(Separator::Conjugate) => 2 * h + t,
            Some(Separator::Commutator) => 2 * (h + t),
        };
        let total = once.checked_mul(usize::from(group.factor.max(1)));
        if total.map_or(true, |n| n > MAX_EXPANDED_MOVES) {
            return Err(too_large());
        }

        let head = MoveSequence(self.head);
        let tail = MoveSequence(self.tail);
        let moves = match self.separator {
            None => head.append(tail),
            Some(Separator::Conjugate) => head.clone().append(tail).append(head.inverse()),
            Some(Separator::Commutator) => head
                .clone()
                .append(tail.clone())
                .append(head.inverse())
                .append(tail.inverse()),
        };

        let moves = moves.repeat(usize::from(group.factor)).cancel();
        if group.kind == GroupKind::Root {
            debug!("expanded to {} moves", moves.len());
        }
        Ok(moves)
    }
}

fn too_large() -> NotationError {
    NotationError::ExpansionTooLarge {
        limit: MAX_EXPANDED_MOVES,
    }
}

impl Drop for Group {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_groups(&mut self.nodes, &mut pending);
        while let Some(mut group) = pending.pop() {
            take_groups(&mut group.nodes, &mut pending);
        }
    }
}

fn take_groups(nodes: &mut Vec<Node>, into: &mut Vec<Group>) {
    for node in nodes.drain(..) {
        if let Node::Group(group) = node {
            into.push(group);
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![(self, 0)];
        f.write_str(self.kind.delimiters().0)?;

        while let Some((group, next)) = stack.last_mut() {
            let group: &Group = *group;
            let Some(node) = group.nodes.get(*next) else {
                f.write_str(group.kind.delimiters().1)?;
                if group.kind != GroupKind::Root && group.factor != 1 {
                    write!(f, "{}", group.factor)?;
                }
                stack.pop();
                continue;
            };

            if *next > 0 && !matches!(node, Node::Separator(_)) {
                f.write_str(" ")?;
            }
            *next += 1;
            match node {
                Node::Move(m) => write!(f, "{m}")?,
                Node::Separator(s) => write!(f, "{s}")?,
                Node::Group(inner) => {
                    f.write_str(inner.kind.delimiters().0)?;
                    stack.push((inner, 0));
                }
            }
        }
        Ok(())
    }
}
