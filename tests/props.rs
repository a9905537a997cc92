use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use thompson_regex::{Engine, Regex};

/// A random pattern over a two-letter alphabet plus every operator, so
/// that unbalanced parentheses and odd operator placements show up often.
#[derive(Clone, Debug)]
struct Pattern(String);

impl Arbitrary for Pattern {
    fn arbitrary(g: &mut Gen) -> Pattern {
        Pattern(random_string(g, b"ab()|*+", 12))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Pattern>> {
        Box::new(self.0.shrink().map(Pattern))
    }
}

/// A random haystack over the pattern alphabet plus a byte no pattern
/// mentions.
#[derive(Clone, Debug)]
struct Input(String);

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Input {
        Input(random_string(g, b"abc", 10))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Input>> {
        Box::new(self.0.shrink().map(Input))
    }
}

fn random_string(g: &mut Gen, alphabet: &[u8], max_len: usize) -> String {
    let len = usize::arbitrary(g) % (max_len + 1);
    (0..len).map(|_| *g.choose(alphabet).unwrap() as char).collect()
}

/// Compile both patterns and check they agree on every input. Discards the
/// case when `base` itself does not compile.
fn equivalent(base: &Pattern, left: String, right: String, inputs: &[Input]) -> TestResult {
    if Regex::new(&base.0).is_err() {
        return TestResult::discard();
    }
    let (left, right) = match (Regex::new(&left), Regex::new(&right)) {
        (Ok(left), Ok(right)) => (left, right),
        _ => return TestResult::failed(),
    };
    TestResult::from_bool(
        inputs
            .iter()
            .all(|input| left.matches(&input.0) == right.matches(&input.0)),
    )
}

#[test]
fn compile_is_deterministic() {
    fn prop(pattern: Pattern, inputs: Vec<Input>) -> bool {
        let first = Engine::new(pattern.0.as_str()).compile();
        let second = Engine::new(pattern.0.as_str()).compile();
        match (first, second) {
            (Ok(first), Ok(second)) => inputs
                .iter()
                .all(|input| first.matches(&input.0) == second.matches(&input.0)),
            (Err(first), Err(second)) => first == second,
            _ => false,
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Pattern, Vec<Input>) -> bool);
}

#[test]
fn literal_matches_only_itself() {
    fn prop(literal: Input, other: Input) -> bool {
        let re = match Regex::new(&literal.0) {
            Ok(re) => re,
            Err(_) => return false,
        };
        re.matches(&literal.0) && re.matches(&other.0) == (literal.0 == other.0)
    }
    QuickCheck::new().quickcheck(prop as fn(Input, Input) -> bool);
}

#[test]
fn union_is_commutative() {
    fn prop(p: Pattern, q: Pattern, inputs: Vec<Input>) -> TestResult {
        if Regex::new(&q.0).is_err() {
            return TestResult::discard();
        }
        equivalent(
            &p,
            format!("({})|({})", p.0, q.0),
            format!("({})|({})", q.0, p.0),
            &inputs,
        )
    }
    QuickCheck::new().quickcheck(prop as fn(Pattern, Pattern, Vec<Input>) -> TestResult);
}

#[test]
fn plus_is_one_then_star() {
    fn prop(p: Pattern, inputs: Vec<Input>) -> TestResult {
        equivalent(
            &p,
            format!("({})+", p.0),
            format!("({})({})*", p.0, p.0),
            &inputs,
        )
    }
    QuickCheck::new().quickcheck(prop as fn(Pattern, Vec<Input>) -> TestResult);
}

#[test]
fn star_is_idempotent() {
    fn prop(p: Pattern, inputs: Vec<Input>) -> TestResult {
        equivalent(&p, format!("(({})*)*", p.0), format!("({})*", p.0), &inputs)
    }
    QuickCheck::new().quickcheck(prop as fn(Pattern, Vec<Input>) -> TestResult);
}

#[test]
fn repetition_counts() {
    fn prop(n: u8) -> bool {
        let n = usize::from(n % 50);
        let input = "ab".repeat(n);
        let star = Regex::new("(ab)*").unwrap();
        let plus = Regex::new("(ab)+").unwrap();
        star.matches(&input)
            && plus.matches(&input) == (n >= 1)
            && !star.matches(&format!("{}a", input))
    }
    QuickCheck::new().quickcheck(prop as fn(u8) -> bool);
}
