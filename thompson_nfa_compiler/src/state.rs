use std::fmt;

/// A state ID in the NFA
///
/// IDs index into the arena of the NFA that owns the state and mean nothing
/// outside of it.
pub type StateId = usize;

/// The label on an edge between two states
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Consumes exactly this byte
    Byte(u8),
    /// Followed without consuming input
    Epsilon,
}

impl Label {
    /// Whether this label consumes the given byte
    pub fn matches(&self, byte: u8) -> bool {
        match *self {
            Label::Byte(b) => b == byte,
            Label::Epsilon => false,
        }
    }

    /// Whether this edge is followed without consuming input
    pub fn is_epsilon(&self) -> bool {
        matches!(*self, Label::Epsilon)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Label::Byte(b) => write!(f, "'{}'", b.escape_ascii()),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}

/// A labeled edge to another state of the same NFA
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub label: Label,
    pub target: StateId,
}

impl Transition {
    /// Create an edge consuming `byte`
    pub fn byte(byte: u8, target: StateId) -> Self {
        Transition {
            label: Label::Byte(byte),
            target,
        }
    }

    /// Create an edge that consumes nothing
    pub fn epsilon(target: StateId) -> Self {
        Transition {
            label: Label::Epsilon,
            target,
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {}", self.label, self.target)
    }
}

/// A Thompson NFA state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Outgoing edges, in insertion order
    pub(crate) transitions: Vec<Transition>,
    pub(crate) accepting: bool,
}

impl State {
    /// Create a state with no outgoing edges
    pub fn new(accepting: bool) -> Self {
        State {
            transitions: Vec::new(),
            accepting,
        }
    }

    /// Append an edge to `target` after any existing ones
    pub fn add_transition(&mut self, label: Label, target: StateId) {
        self.transitions.push(Transition { label, target });
    }

    /// Outgoing edges, in the order they were added
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Whether reaching this state completes a match
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}
