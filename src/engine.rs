use std::fmt;

use thompson_nfa_compiler::{Matcher, Nfa, ParseError, Parser};

/// A pattern waiting to be compiled.
///
/// Creating an `Engine` does no work beyond storing the pattern. Calling
/// [`Engine::compile`] consumes the engine and, on success, hands back a
/// [`Regex`] that owns the compiled automaton. Matching is only available on
/// a `Regex`, so an engine can neither be matched before it is compiled nor
/// compiled twice.
///
/// # Example
///
/// ```
/// use thompson_regex::Engine;
///
/// let re = Engine::new("a(b|c)").compile().unwrap();
/// assert!(re.matches("ac"));
/// assert!(!re.matches("ad"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    pattern: String,
}

impl Engine {
    /// Store `pattern` for later compilation.
    pub fn new<P: Into<String>>(pattern: P) -> Engine {
        Engine { pattern: pattern.into() }
    }

    /// Returns the stored pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse the stored pattern into a Thompson NFA.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnmatchedParen`] if a group is opened and never
    /// closed, or closed without being opened. No automaton is produced in
    /// that case.
    pub fn compile(self) -> Result<Regex, ParseError> {
        let nfa = match Parser::new(&self.pattern).parse() {
            Ok(nfa) => nfa,
            Err(err) => {
                debug!("failed to compile {:?}: {}", self.pattern, err);
                return Err(err);
            }
        };
        debug!("compiled {:?} into an NFA with {} states", self.pattern, nfa.len());
        trace!("{:?}", nfa);
        Ok(Regex { pattern: self.pattern, nfa })
    }
}

/// A compiled pattern.
///
/// A `Regex` always matches against the *whole* input: `matches` reports
/// whether the entire string belongs to the language of the pattern, not
/// whether some substring does.
///
/// # Example
///
/// ```
/// use thompson_regex::Regex;
///
/// let re = Regex::new("(ab)*").unwrap();
/// assert!(re.matches("abab"));
/// assert!(!re.matches("aba"));
/// ```
pub struct Regex {
    pattern: String,
    nfa: Nfa,
}

impl Regex {
    /// Compile a pattern. Shorthand for `Engine::new(pattern).compile()`.
    pub fn new(pattern: &str) -> Result<Regex, ParseError> {
        Engine::new(pattern).compile()
    }

    /// Returns true if and only if the entire input is accepted.
    ///
    /// Input is matched byte by byte.
    pub fn matches(&self, input: &str) -> bool {
        self.matches_bytes(input.as_bytes())
    }

    /// Returns true if and only if the entire byte string is accepted.
    pub fn matches_bytes(&self, input: &[u8]) -> bool {
        Matcher::new(&self.nfa).is_match(input)
    }

    /// Returns the original pattern.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled automaton.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl fmt::Display for Regex {
    /// Shows the original pattern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_keeps_pattern_until_compiled() {
        let engine = Engine::new("a|b");
        assert_eq!(engine.pattern(), "a|b");
        let re = engine.compile().unwrap();
        assert_eq!(re.as_str(), "a|b");
        assert_eq!(re.to_string(), "a|b");
        assert_eq!(format!("{:?}", re), "Regex(\"a|b\")");
    }

    #[test]
    fn compile_error_produces_no_regex() {
        let err = Engine::new("(a").compile().unwrap_err();
        assert_eq!(err, ParseError::UnmatchedParen { offset: 0 });
        assert_eq!(err.to_string(), "unmatched parenthesis at offset 0");
    }

    #[test]
    fn compiled_nfa_has_single_accepting_state() {
        let re = Regex::new("(a|b)*c+").unwrap();
        let nfa = re.nfa();
        let accepting: Vec<_> =
            nfa.states().iter().filter(|s| s.is_accepting()).collect();
        assert_eq!(accepting.len(), 1);
        assert!(nfa.state(nfa.accept()).is_accepting());
    }

    #[test]
    fn matches_bytes_outside_utf8() {
        let re = Regex::new("a*").unwrap();
        assert!(re.matches_bytes(b"aaa"));
        assert!(!re.matches_bytes(b"a\xFF"));
    }
}
