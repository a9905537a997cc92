use crate::{nfa::Nfa, ParseError, ParseResult};

/// Parser translating a pattern into a Thompson NFA
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// Expr        := Union
/// Union       := Concat ('|' Concat)*
/// Concat      := Duplication+
/// Duplication := Atom ('*' | '+')*
/// Atom        := <byte> | '(' Expr ')'
/// ```
///
/// The pattern is read byte by byte and there is no escape syntax: every
/// byte other than `|`, `*`, `+`, `(` and `)` is a literal. An atom
/// position with nothing in it (end of input, or an operator) denotes the
/// empty string, so `""`, `()` and `a|` are all valid.
///
/// The descent into groups is kept on an explicit stack of [`Group`]
/// frames rather than the call stack, so nesting depth is limited only by
/// memory.
pub struct Parser<'p> {
    pattern: &'p [u8],
    pos: usize,
}

/// The enclosing expression saved while the body of a group is parsed
struct Group {
    /// Offset of the `(` that opened the group
    open: usize,
    /// The enclosing expression's alternatives folded so far
    alternatives: Option<Nfa>,
    /// The enclosing alternative's concatenation so far
    sequence: Option<Nfa>,
}

impl<'p> Parser<'p> {
    /// Create a new parser for the given pattern
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern: pattern.as_bytes(),
            pos: 0,
        }
    }

    /// Parse the whole pattern into an NFA
    pub fn parse(mut self) -> ParseResult<Nfa> {
        let mut groups: Vec<Group> = Vec::new();
        let mut alternatives: Option<Nfa> = None;
        let mut sequence: Option<Nfa> = None;

        while !self.is_at_end() {
            let atom = match self.pattern[self.pos] {
                b'(' => {
                    trace!("entering group opened at offset {}", self.pos);
                    groups.push(Group {
                        open: self.pos,
                        alternatives: alternatives.take(),
                        sequence: sequence.take(),
                    });
                    self.advance();
                    continue;
                }
                b'|' => {
                    self.advance();
                    alternatives = Some(Self::alternate(alternatives, sequence.take()));
                    continue;
                }
                b')' => {
                    let group = match groups.pop() {
                        Some(group) => group,
                        None => return Err(ParseError::UnmatchedParen { offset: self.pos }),
                    };
                    self.advance();
                    trace!("closed group opened at offset {}", group.open);
                    let inner = Self::alternate(alternatives, sequence.take());
                    alternatives = group.alternatives;
                    sequence = group.sequence;
                    inner
                }
                // A repetition operator where an atom belongs repeats the
                // empty string.
                b'*' | b'+' => Nfa::epsilon(),
                byte => {
                    self.advance();
                    Nfa::byte(byte)
                }
            };
            let duplication = self.parse_repetitions(atom);
            sequence = Some(match sequence.take() {
                Some(prefix) => Nfa::concat(prefix, duplication),
                None => duplication,
            });
        }

        // Report the innermost group left open.
        if let Some(group) = groups.pop() {
            return Err(ParseError::UnmatchedParen { offset: group.open });
        }
        Ok(Self::alternate(alternatives, sequence))
    }

    /// Apply every `*` and `+` that follows an atom, left to right.
    fn parse_repetitions(&mut self, mut result: Nfa) -> Nfa {
        loop {
            let make: fn(Nfa) -> Nfa = match self.peek() {
                Some(b'*') => Nfa::kleene_star,
                Some(b'+') => Nfa::plus,
                _ => break,
            };
            self.advance();
            result = make(result);
        }
        result
    }

    /// Fold a finished alternative into the alternatives before it. An
    /// alternative with no atoms in it is the empty string.
    fn alternate(alternatives: Option<Nfa>, sequence: Option<Nfa>) -> Nfa {
        let sequence = sequence.unwrap_or_else(Nfa::epsilon);
        match alternatives {
            Some(alternatives) => Nfa::union(alternatives, sequence),
            None => sequence,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.pattern.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.pattern.len()
    }
}
