use std::io::{self, Write};

use clap::Parser;
use log::LevelFilter;
use shunt::{analyze, join_words, Error};
use shunt_parser::ParserConfig;

#[derive(Debug, Parser)]
#[command(
    name = "shunt",
    version,
    about = "Parse an expression line and show how its operators group",
    long_about = "shunt parses one line of infix operators and juxtaposed function\n\
        applications with a recursive shunting-yard parser, then prints:\n\n\
        \n  1. the expression with every application and operation wrapped in { }\n\
        \n  2. the expression reprinted with canonical spacing\n\
        \n  3. twelve lines separating the expression by nesting depth\n\n\
        EXAMPLES:\n\
        \n  shunt 'f a + b * c'\n\
        \n  shunt --strict-nonassoc 'a < b < c'"
)]
struct Cli {
    /// Expression words; joined with single spaces into one line
    #[arg(value_name = "EXPR", required = true, allow_hyphen_values = true)]
    words: Vec<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reject chains of equal-precedence non-associative operators
    #[arg(long = "strict-nonassoc")]
    strict_nonassoc: bool,

    /// Print the expression tree as JSON instead of the text renderings
    #[arg(long)]
    json: bool,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<String, Error> {
    let config = ParserConfig {
        strict_non_associative: cli.strict_nonassoc,
    };
    let line = join_words(&cli.words);
    let analysis = analyze(&line, &config)?;

    if cli.json {
        return analysis.to_json();
    }
    let mut out = String::new();
    for line in analysis.lines() {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Render everything before writing so a failure leaves stdout empty.
    let output = match run(&cli) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln_all(&mut stdout, &output) {
        eprintln!("error: failed to write output: {err}");
        std::process::exit(1);
    }
}

fn writeln_all(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
