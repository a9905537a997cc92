use crate::nfa::Nfa;
use crate::state::StateId;
use std::collections::HashSet;

/// A matcher that runs a Thompson NFA against input by subset simulation
///
/// Only the set of states the NFA could currently be in is tracked, so the
/// work per input byte is bounded by the number of states and edges.
pub struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &[u8]) -> bool {
        let mut current_states = self.nfa.epsilon_closure(&HashSet::from([self.nfa.start()]));

        for &byte in input {
            current_states = self.nfa.epsilon_closure(&self.step_states(&current_states, byte));

            // Nothing can be accepted from an empty set of states.
            if current_states.is_empty() {
                trace!("no live states left, rejecting early");
                return false;
            }
        }

        self.nfa.is_accepting(&current_states)
    }

    /// Step from current states over one input byte
    ///
    /// This is the move operation of subset simulation: every target of an
    /// edge labeled exactly `byte`. Epsilon edges are not followed.
    pub fn step_states(&self, current_states: &HashSet<StateId>, byte: u8) -> HashSet<StateId> {
        let mut next_states = HashSet::new();

        for &state_id in current_states {
            for transition in self.nfa.state(state_id).transitions() {
                if transition.label.matches(byte) {
                    next_states.insert(transition.target);
                }
            }
        }

        next_states
    }
}
