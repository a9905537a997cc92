/*!
This crate provides a small regular expression engine built on Thompson's
construction.

A pattern is parsed in a single left-to-right pass straight into a
nondeterministic finite automaton, and input is matched by tracking the set of
states the automaton could be in after each byte. No deterministic automaton
is ever built, and the work per input byte is bounded by the size of the NFA,
so matching never takes exponential time.

# Usage

```
use thompson_regex::Engine;

let re = Engine::new("a(b|c)*d+").compile().unwrap();
assert!(re.matches("abcbdd"));
assert!(re.matches("ad"));
assert!(!re.matches("abc"));
```

Matching is always against the entire input. There is no search for a match
inside a longer string.

# Syntax

```text
x        the literal byte x (anything other than the operators below)
xy       concatenation: x followed by y
x|y      alternation: x or y
x*       zero or more of x
x+       one or more of x
(x)      grouping
```

Precedence, from loosest to tightest: alternation, concatenation,
repetition. Repetition operators may be chained (`a*+`) and apply left to
right. There are no escapes: the operator bytes `|*+()` can never be matched
literally, and every other byte, inside a group or not, stands for itself.
Non-ASCII characters are matched as the sequence of their UTF-8 bytes, so
`é+` repeats only the last byte of `é` while `(é)+` repeats the character.

An empty pattern, an empty group `()` and an empty alternative (`a|`) all
match the empty string. More generally, wherever an atom is expected but an
operator byte (`|`, `)`, `*` or `+`) appears instead, the atom is the empty
string: `*a` matches `a` (not `*a`), and `(a|)` matches `a` or nothing.

Groups may be nested arbitrarily deep; parsing does not recurse.

# Errors

The only error is [`ParseError::UnmatchedParen`], returned for a `(` that
is never closed or a `)` that closes nothing:

```
use thompson_regex::{Engine, ParseError};

let err = Engine::new("(ab").compile().unwrap_err();
assert_eq!(err, ParseError::UnmatchedParen { offset: 0 });
```

# Crate features

* **logging** - When enabled, the `log` crate is used to emit messages about
  pattern compilation and matching. Pair it with a logger such as
  `env_logger` to see them.
*/

#![deny(missing_docs)]

#[macro_use]
mod macros;

pub use crate::engine::{Engine, Regex};
pub use thompson_nfa_compiler::{Label, Nfa, ParseError, State, StateId, Transition};

mod engine;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
