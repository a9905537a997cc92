//! Thompson NFA Compiler
//!
//! This library turns a small regular-expression language into a
//! nondeterministic finite automaton using Thompson's construction, and
//! decides whether an input is accepted by simulating the automaton over
//! sets of states.
//!
//! The pattern language has literal bytes, alternation (`|`), concatenation,
//! zero-or-more (`*`), one-or-more (`+`) and grouping with parentheses.
//! There are no escapes, classes, anchors or captures.
//!
//! ```
//! use thompson_nfa_compiler::{Matcher, Parser};
//!
//! let nfa = Parser::new("a(b|c)*").parse().unwrap();
//! assert!(Matcher::new(&nfa).is_match(b"abcb"));
//! assert!(!Matcher::new(&nfa).is_match(b"ad"));
//! ```

#[macro_use]
mod macros;

pub mod state;
pub mod nfa;
pub mod parser;
pub mod matcher;

pub use state::{Label, State, StateId, Transition};
pub use nfa::Nfa;
pub use parser::Parser;
pub use matcher::Matcher;

/// The result of parsing a pattern into a Thompson NFA
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `(` without a closing `)`, or a `)` that closes no group. The
    /// offset is the byte position of the offending parenthesis.
    UnmatchedParen { offset: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnmatchedParen { offset } => {
                write!(f, "unmatched parenthesis at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for ParseError {}
