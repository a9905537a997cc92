use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use thompson_regex::Engine;

const USAGE: &str = "\
Usage: thompson [OPTIONS] [<pattern> <input>]

Matches <input> in its entirety against <pattern> and prints true or false.
Without arguments, the pattern and the input are each read as one line from
stdin.

Options:
  --dump-nfa   Print the compiled NFA to stderr before matching
  -h, --help   Print this help message

Set RUST_LOG=debug (or trace) to see what the engine is doing.";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Match(Config),
}

#[derive(Debug, PartialEq, Eq)]
struct Config {
    /// Pattern and input given on the command line. When absent, both are
    /// read from stdin.
    operands: Option<(String, String)>,
    dump_nfa: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut dump_nfa = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--dump-nfa" => dump_nfa = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unknown option: {}", other));
            }
            _ => positional.push(arg),
        }
    }

    let operands = match positional.len() {
        0 => None,
        2 => {
            let input = positional.pop().unwrap_or_default();
            let pattern = positional.pop().unwrap_or_default();
            Some((pattern, input))
        }
        n => return Err(format!("expected a pattern and an input, got {} argument(s)", n)),
    };
    Ok(Command::Match(Config { operands, dump_nfa }))
}

/// Print `prompt` and read one line, without its line terminator.
fn prompt_line<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> anyhow::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input while waiting for {:?}", prompt.trim_end());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn run<R: BufRead, W: Write, E: Write>(
    config: Config,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
) -> anyhow::Result<bool> {
    let (pattern, input) = match config.operands {
        Some(operands) => operands,
        None => {
            let pattern = prompt_line("Regex: ", stdin, stdout)?;
            let input = prompt_line("Input string: ", stdin, stdout)?;
            (pattern, input)
        }
    };

    let regex = Engine::new(pattern.as_str())
        .compile()
        .with_context(|| format!("failed to compile pattern {:?}", pattern))?;
    if config.dump_nfa {
        write!(stderr, "{:?}", regex.nfa())?;
    }

    let matched = regex.matches(&input);
    log::debug!("{:?} against {:?}: {}", pattern, input, matched);
    writeln!(stdout, "{}", matched)?;
    Ok(matched)
}

fn main() {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Ok(Command::Match(config)) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = run(config, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
