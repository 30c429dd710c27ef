use std::str::FromStr;

use clap::Parser;

/// Checks whitespace-separated token files against the statement grammar.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CheckArgs {
    /// Files or glob patterns to check. Use - to read standard input.
    /// Without sources, the `inputs` of the config file are checked, and
    /// without those, input.txt in the current directory.
    pub sources: Vec<String>,

    /// Path to a TOML config file. Defaults to descent.toml when it exists.
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(flatten)]
    pub logging: Logging,
}

#[derive(Parser, Clone)]
pub(crate) struct Logging {
    /// Trace every token the parser consumes.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Extra dumps: k prints the token list, p prints the final cursor position.
    #[arg(short = 'f', long)]
    pub log_flags: Option<LogFlags>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LogFlags {
    pub tokens: bool,
    pub position: bool,
}

impl LogFlags {
    pub fn parse_flags(s: &str) -> LogFlags {
        let mut flags = LogFlags::default();

        for flag in s.chars() {
            match flag {
                'k' => flags.tokens = true,
                'p' => flags.position = true,
                _ => {}
            }
        }

        flags
    }
}

impl FromStr for LogFlags {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogFlags::parse_flags(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_ignore_unknown_characters() {
        let flags: LogFlags = "kxz".parse().unwrap();

        assert_eq!(
            flags,
            LogFlags {
                tokens: true,
                position: false
            }
        );
    }

    #[test]
    fn args_collect_sources_and_flags() {
        let args = CheckArgs::parse_from(["descent", "-v", "-f", "kp", "a.txt", "b/*.txt"]);

        assert_eq!(args.sources, vec!["a.txt", "b/*.txt"]);
        assert!(args.logging.verbose);
        assert_eq!(
            args.logging.log_flags,
            Some(LogFlags {
                tokens: true,
                position: true
            })
        );
        assert_eq!(args.config, None);
    }

    #[test]
    fn args_default_to_no_sources() {
        let args = CheckArgs::parse_from(["descent"]);

        assert!(args.sources.is_empty());
        assert!(!args.logging.verbose);
        assert_eq!(args.logging.log_flags, None);
    }
}
