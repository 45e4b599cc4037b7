use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{bail, Context};
use lexer::{
    config::config::{parse_config, read_source},
    display::{analyze, display_error},
    errors::errors::Error,
    lexer::lexer::Lexer,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lexer <RULES_FILE> [--whitespace] [TEXT...]";

struct Args {
    rules_file: PathBuf,
    include_whitespace: bool,
    text: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut rules_file = None;
    let mut include_whitespace = false;
    let mut words = vec![];

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--whitespace" | "-w" => include_whitespace = true,
            "--help" | "-h" => bail!(USAGE),
            _ if rules_file.is_none() => rules_file = Some(PathBuf::from(arg)),
            _ => words.push(arg),
        }
    }

    let Some(rules_file) = rules_file else {
        bail!(USAGE);
    };

    Ok(Args {
        rules_file,
        include_whitespace,
        text: if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        },
    })
}

/// Prints a lexer error the way the user should see it and hands it on.
fn report(error: Error, source: Option<&str>) -> anyhow::Error {
    eprint!("{}", display_error(&error, source));
    error.into()
}

fn run(args: Args) -> anyhow::Result<()> {
    let file_name = args.rules_file.display().to_string();
    let source = read_source(&args.rules_file).map_err(|err| report(err, None))?;

    let start = Instant::now();
    let rules = parse_config(&source, Some(file_name)).map_err(|err| report(err, Some(&source)))?;
    let mut lexer = Lexer::from(rules);
    let compiled = lexer.compiled().map_err(|err| report(err, Some(&source)))?;

    debug!(elapsed = ?start.elapsed(), rules = ?compiled.rule_names(), "rules ready");

    let inputs = match args.text {
        Some(text) => vec![text],
        None => {
            let mut stdin = String::new();
            io::stdin()
                .read_to_string(&mut stdin)
                .context("failed to read stdin")?;
            stdin.lines().map(String::from).collect()
        }
    };

    for input in inputs {
        println!("{}", analyze(&compiled, &input, args.include_whitespace));
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = parse_args().and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.downcast_ref::<Error>().is_none() {
                eprintln!("{:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
