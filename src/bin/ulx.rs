//! ulatex CLI - LaTeX ↔ Unicode transcoder for bibliographic text

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use ulatex::{decode_latex, encode_to_latex, legacy_escape, legacy_unescape};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ulx")]
#[command(version)]
#[command(about = "ulatex - LaTeX ↔ Unicode transcoder for bibliographic text", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Transcoding direction
    #[arg(short, long, value_enum, default_value_t = Direction::Decode)]
    direction: Direction,

    /// Strict mode: exit with an error if any command token stays unresolved
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress unresolved-token warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum Direction {
    /// LaTeX-escaped text to normalized Unicode
    Decode,
    /// Unicode to the corpus's LaTeX conventions
    Encode,
    /// Non-ASCII code points to legacy ?[\u<dec>] tokens
    Escape,
    /// Legacy ?[\u<dec>] tokens back to Unicode
    Unescape,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = match cli.direction {
        Direction::Decode => {
            // Each line is an independent record: a bad record is reported
            // and skipped, the rest of the corpus still decodes.
            let mut lines = Vec::with_capacity(input.lines().count());
            let mut unresolved_total = 0usize;
            for (lineno, line) in input.lines().enumerate() {
                match decode_latex(line) {
                    Ok(out) => {
                        if !out.is_fully_resolved() {
                            unresolved_total += out.unresolved.len();
                            if !cli.quiet {
                                eprintln!(
                                    "warning: line {}: unresolved {}",
                                    lineno + 1,
                                    out.unresolved.join(" ")
                                );
                            }
                        }
                        lines.push(out.text);
                    }
                    Err(e) => {
                        eprintln!("error: line {}: {}", lineno + 1, e);
                        lines.push(line.to_string());
                    }
                }
            }
            if cli.strict && unresolved_total > 0 {
                eprintln!("error: {} unresolved token(s) in strict mode", unresolved_total);
                std::process::exit(1);
            }
            lines.join("\n")
        }
        Direction::Encode => match encode_to_latex(&input) {
            Ok(out) => out,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        Direction::Escape => legacy_escape(&input),
        Direction::Unescape => legacy_unescape(&input),
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install ulatex --features cli");
    eprintln!("  ulx [OPTIONS] [INPUT_FILE]");
}
