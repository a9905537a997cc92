use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::state::{Label, State, StateId};

/// A Thompson NFA fragment
///
/// An `Nfa` owns every one of its states in a single arena and has exactly
/// one start state and one accept state. Freshly built fragments mark their
/// accept state as accepting; composing fragments clears that flag on the
/// operands so that only the accept state of the outermost fragment is
/// accepting.
///
/// The composition operators take their operands by value and relocate
/// their states into the result, so a fragment can be consumed only once.
/// `Nfa` intentionally does not implement `Clone`: the only way to
/// duplicate states is [`Nfa::deep_copy`].
#[derive(PartialEq, Eq)]
pub struct Nfa {
    /// All states owned by this fragment
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// A fragment with a fresh non-accepting start and accepting accept
    /// state, and no edges yet.
    fn pair() -> Self {
        Nfa {
            states: vec![State::new(false), State::new(true)],
            start: 0,
            accept: 1,
        }
    }

    /// Matches the empty string: `start --ε--> accept`
    pub fn epsilon() -> Self {
        let mut nfa = Self::pair();
        nfa.connect(nfa.start, Label::Epsilon, nfa.accept);
        nfa
    }

    /// Matches exactly one byte: `start --byte--> accept`
    pub fn byte(byte: u8) -> Self {
        let mut nfa = Self::pair();
        nfa.connect(nfa.start, Label::Byte(byte), nfa.accept);
        nfa
    }

    /// Matches anything either operand matches
    pub fn union(left: Nfa, right: Nfa) -> Self {
        let mut nfa = Self::pair();
        let (left_start, left_accept) = nfa.absorb(left);
        let (right_start, right_accept) = nfa.absorb(right);

        nfa.connect(nfa.start, Label::Epsilon, left_start);
        nfa.connect(nfa.start, Label::Epsilon, right_start);
        nfa.connect(left_accept, Label::Epsilon, nfa.accept);
        nfa.connect(right_accept, Label::Epsilon, nfa.accept);
        nfa.states[left_accept].accepting = false;
        nfa.states[right_accept].accepting = false;
        nfa
    }

    /// Matches `first` followed by `second`
    ///
    /// The start state of `second` is merged into the accept state of
    /// `first`: its outgoing edges are copied over and the state itself is
    /// dropped, so no extra epsilon hop is introduced.
    pub fn concat(mut first: Nfa, second: Nfa) -> Self {
        let junction = first.accept;
        first.states[junction].accepting = false;
        let (_, accept) = first.relocate(second, Some(junction));
        first.accept = accept;
        first
    }

    /// Matches zero or more repetitions of `inner`
    pub fn kleene_star(inner: Nfa) -> Self {
        let mut nfa = Self::pair();
        let (inner_start, inner_accept) = nfa.absorb(inner);

        nfa.connect(nfa.start, Label::Epsilon, inner_start);
        nfa.connect(nfa.start, Label::Epsilon, nfa.accept);
        nfa.connect(inner_accept, Label::Epsilon, inner_start);
        nfa.connect(inner_accept, Label::Epsilon, nfa.accept);
        nfa.states[inner_accept].accepting = false;
        nfa
    }

    /// Matches one or more repetitions of `inner`
    ///
    /// Built as one mandatory pass through a deep copy of `inner` followed
    /// by `inner*`.
    pub fn plus(inner: Nfa) -> Self {
        let once = inner.deep_copy();
        Self::concat(once, Self::kleene_star(inner))
    }

    /// Duplicate every state reachable from the start state
    ///
    /// Edges whose destination was already copied are pointed at the
    /// existing copy, which reproduces shared destinations and the cycles
    /// introduced by `*`.
    pub fn deep_copy(&self) -> Nfa {
        let mut states = Vec::with_capacity(self.states.len());
        let mut copies: HashMap<StateId, StateId> = HashMap::new();
        let mut stack = vec![self.start];

        copies.insert(self.start, states.len());
        states.push(State::new(self.states[self.start].accepting));

        while let Some(source) = stack.pop() {
            let copy = copies[&source];
            for transition in &self.states[source].transitions {
                let target = match copies.get(&transition.target) {
                    Some(&target) => target,
                    None => {
                        let target = states.len();
                        states.push(State::new(self.states[transition.target].accepting));
                        copies.insert(transition.target, target);
                        stack.push(transition.target);
                        target
                    }
                };
                states[copy].add_transition(transition.label, target);
            }
        }

        // Thompson fragments always reach their accept state, but a copy
        // must have one regardless.
        let accept = match copies.get(&self.accept) {
            Some(&accept) => accept,
            None => {
                states.push(State::new(self.states[self.accept].accepting));
                states.len() - 1
            }
        };
        debug!(
            "deep copied {} of {} states",
            states.len(),
            self.states.len()
        );

        Nfa {
            start: copies[&self.start],
            accept,
            states,
        }
    }

    /// Move every state of `other` into this arena, returning the new IDs
    /// of its start and accept states.
    fn absorb(&mut self, other: Nfa) -> (StateId, StateId) {
        self.relocate(other, None)
    }

    /// Move every state of `other` into this arena, rebasing all of its
    /// edges.
    ///
    /// When `merge_start` is given, `other`'s start state is not copied:
    /// its edges are appended to the `merge_start` state instead and edges
    /// that pointed at it are redirected there.
    fn relocate(&mut self, other: Nfa, merge_start: Option<StateId>) -> (StateId, StateId) {
        let mut next = self.states.len();
        let remap: Vec<StateId> = (0..other.states.len())
            .map(|id| match merge_start {
                Some(into) if id == other.start => into,
                _ => {
                    next += 1;
                    next - 1
                }
            })
            .collect();

        self.states.reserve(other.states.len());
        for (id, mut state) in other.states.into_iter().enumerate() {
            for transition in state.transitions.iter_mut() {
                transition.target = remap[transition.target];
            }
            if merge_start.is_some() && id == other.start {
                self.states[remap[id]].transitions.extend(state.transitions);
            } else {
                self.states.push(state);
            }
        }

        (remap[other.start], remap[other.accept])
    }

    fn connect(&mut self, from: StateId, label: Label, to: StateId) {
        self.states[from].add_transition(label, to);
    }

    /// The state matching starts from
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The state whose acceptance marks a complete match
    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// The state with the given ID. Panics if `id` is not from this NFA.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Every state, indexed by `StateId`
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The number of states owned by this NFA
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: every fragment owns at least its start and accept state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get epsilon closure of a set of states
    ///
    /// The result contains the given states themselves and everything
    /// reachable from them through epsilon edges alone. States already in
    /// the result are never revisited, so cycles terminate.
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().cloned().collect();

        while let Some(state_id) = stack.pop() {
            for transition in &self.states[state_id].transitions {
                if transition.label.is_epsilon() && closure.insert(transition.target) {
                    stack.push(transition.target);
                }
            }
        }

        closure
    }

    /// Check if any state in the set is accepting
    pub fn is_accepting(&self, states: &HashSet<StateId>) -> bool {
        states.iter().any(|&id| self.states[id].accepting)
    }
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nfa(")?;
        for (id, state) in self.states.iter().enumerate() {
            let marker = if id == self.start { '>' } else { ' ' };
            let accepting = if state.accepting { '*' } else { ' ' };
            write!(f, "{}{}{:06}:", marker, accepting, id)?;
            for (i, transition) in state.transitions.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{:?}", sep, transition)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "start: {}, accept: {}", self.start, self.accept)?;
        writeln!(f, ")")
    }
}
