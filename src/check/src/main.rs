mod check_args;
mod config;
mod error;
mod utils;

use std::{
    io::{self, ErrorKind, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

use crate::{
    check_args::{CheckArgs, LogFlags},
    config::{Config, DEFAULT_INPUT},
    error::CheckError,
};
use grammar::{
    cursor::Cursor,
    lexer::{tokenize, PrettyPrint},
    parse_program_with,
};

const SUCCESS_MESSAGE: &str = "Parsing successful.";

fn main() -> ExitCode {
    let args = CheckArgs::parse();

    match run_sources(&args) {
        Ok(status) => status.exit_code(),
        Err(error) => {
            eprintln!("Fatal: {}", error);
            Status::Failed.exit_code()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Status {
    Accepted,
    Rejected,
    Failed,
}

impl Status {
    fn exit_code(self) -> ExitCode {
        match self {
            Status::Accepted => ExitCode::SUCCESS,
            Status::Rejected => ExitCode::from(1),
            Status::Failed => ExitCode::from(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Input {
    Stdin,
    File { name: String, path: PathBuf },
}

impl Input {
    fn name(&self) -> &str {
        match self {
            Input::Stdin => "-",
            Input::File { name, .. } => name,
        }
    }
}

struct Settings {
    inputs: Vec<Input>,
    verbose: bool,
    log_flags: LogFlags,
}

impl Settings {
    /// Command-line values win over the config file.
    fn resolve(args: &CheckArgs, config: Config) -> Result<Settings, CheckError> {
        let sources = if !args.sources.is_empty() {
            args.sources.clone()
        } else if !config.inputs.is_empty() {
            config.inputs
        } else {
            vec![DEFAULT_INPUT.to_string()]
        };

        let mut inputs = vec![];
        for source in &sources {
            inputs.extend(expand_source(source)?);
        }

        let log_flags = match &args.logging.log_flags {
            Some(flags) => flags.clone(),
            None => config
                .log_flags
                .as_deref()
                .map(LogFlags::parse_flags)
                .unwrap_or_default(),
        };

        Ok(Settings {
            inputs,
            verbose: args.logging.verbose || config.verbose,
            log_flags,
        })
    }
}

fn is_pattern(source: &str) -> bool {
    source.contains(['*', '?', '['])
}

fn expand_source(source: &str) -> Result<Vec<Input>, CheckError> {
    if source == "-" {
        return Ok(vec![Input::Stdin]);
    }

    let path = config::resolve(source)?;

    // An existing file is taken literally even if its name has glob characters.
    if !is_pattern(source) || path.is_file() {
        return Ok(vec![Input::File {
            name: source.to_string(),
            path,
        }]);
    }

    let pattern = path.to_string_lossy().into_owned();
    let entries = glob::glob(&pattern).map_err(|source| CheckError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut inputs = vec![];
    for entry in entries {
        let path = entry.map_err(|error| CheckError::Read {
            name: error.path().display().to_string(),
            source: error.into_error(),
        })?;

        inputs.push(Input::File {
            name: path.display().to_string(),
            path,
        });
    }

    if inputs.is_empty() {
        return Err(CheckError::NoMatches(source.to_string()));
    }

    Ok(inputs)
}

fn run_sources(args: &CheckArgs) -> Result<Status, CheckError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;
    let prefix = settings.inputs.len() > 1;

    let mut worst = Status::Accepted;

    for input in &settings.inputs {
        let label = if prefix {
            format!("{}: ", input.name())
        } else {
            String::new()
        };

        let status = match check_source(input, &settings) {
            Ok(()) => {
                println!("{}{}", label, SUCCESS_MESSAGE);
                Status::Accepted
            }
            Err(error) if error.is_syntax() => {
                println!("{}{}", label, error);
                Status::Rejected
            }
            Err(error) => {
                eprintln!("{}{}", label, error);
                Status::Failed
            }
        };

        worst = worst.max(status);
    }

    Ok(worst)
}

fn check_source(input: &Input, settings: &Settings) -> Result<(), CheckError> {
    let source = read_input(input)?;
    let tokens = tokenize(&source);

    if settings.log_flags.tokens {
        eprintln!("{}\n", tokens.prettify());
    }

    let mut cursor = Cursor::new(tokens, settings.verbose);
    let result = parse_program_with(&mut cursor);

    for line in cursor.trace() {
        eprintln!("{}", line);
    }

    if settings.log_flags.position {
        eprintln!("Stopped at token {} of {}", cursor.position(), cursor.len());
    }

    Ok(result?)
}

fn read_input(input: &Input) -> Result<String, CheckError> {
    match input {
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CheckError::Read {
                    name: input.name().to_string(),
                    source,
                })?;
            Ok(source)
        }
        Input::File { name, path } => std::fs::read_to_string(path).map_err(|error| {
            if error.kind() == ErrorKind::NotFound {
                CheckError::FileNotFound(PathBuf::from(name))
            } else {
                CheckError::Read {
                    name: name.clone(),
                    source: error,
                }
            }
        }),
    }
}
