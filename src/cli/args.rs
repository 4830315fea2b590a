//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information.
    Version,
    /// Show usage text (also the fallback for malformed arguments).
    Usage,
    /// Run the viewer, optionally on a scene file.
    Run { scene: Option<PathBuf> },
}

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use optswitch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["optswitch".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut scene = None;
    let mut args = args.skip(1); // Skip the program name.
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Usage,
            "--scene" => match args.next() {
                Some(path) => scene = Some(PathBuf::from(path)),
                None => return CliCommand::Usage,
            },
            _ => return CliCommand::Usage,
        }
    }
    CliCommand::Run { scene }
}

/// Usage text for `--help` and malformed invocations.
pub fn usage() -> String {
    [
        "optswitch - cycle visibility among tagged design options",
        "",
        "USAGE:",
        "    optswitch [--scene <path>]",
        "",
        "OPTIONS:",
        "    --scene <path>    Load a scene document instead of the built-in sample",
        "    -V, --version     Print version information",
        "    -h, --help        Print this help text",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_no_args_runs_sample() {
        assert_eq!(parse(&["optswitch"]), CliCommand::Run { scene: None });
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["optswitch", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["optswitch", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_scene_path() {
        assert_eq!(
            parse(&["optswitch", "--scene", "house.json"]),
            CliCommand::Run {
                scene: Some(PathBuf::from("house.json"))
            }
        );
    }

    #[test]
    fn test_scene_flag_without_value_shows_usage() {
        assert_eq!(parse(&["optswitch", "--scene"]), CliCommand::Usage);
    }

    #[test]
    fn test_unknown_flag_shows_usage() {
        assert_eq!(parse(&["optswitch", "--frobnicate"]), CliCommand::Usage);
    }
}
