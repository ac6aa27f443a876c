//! Command line arguments.

use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_error::{Error, EXPR};
use std::ops::Range;

/// An argument starting with `--` that is not a known flag.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown flag `{}`", flag),
    label = "this flag is not recognized",
    help = format!("the only flag is {}", "--precision N".fg(EXPR)),
)]
pub struct UnknownFlag {
    /// The flag that was given.
    pub flag: String,
}

/// The value of `--precision` is missing or not a non-negative integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid precision",
    label = "expected the number of digits after the decimal point here",
)]
pub struct InvalidPrecision;

/// More than one input file was given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many input files",
    label = "the first input file is here",
    label = "this file would be ignored",
    help = "run `pdiff` once per file",
)]
pub struct TooManyFiles;

/// The parsed command line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// The number of digits to print after the decimal point.
    pub precision: Option<usize>,

    /// The file to read the input from. If [`None`], the input is read from stdin.
    pub file: Option<String>,
}

/// The command line joined into one line, used to point errors at individual arguments.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    /// The arguments joined with spaces.
    pub line: String,

    /// The span of each argument in `line`.
    spans: Vec<Range<usize>>,
}

impl CommandLine {
    /// Joins the given arguments, not including the program name.
    pub fn new(args: impl IntoIterator<Item = String>) -> (Self, Vec<String>) {
        let args = args.into_iter().collect::<Vec<_>>();
        let mut command_line = Self::default();
        for arg in &args {
            if !command_line.line.is_empty() {
                command_line.line.push(' ');
            }
            let start = command_line.line.len();
            command_line.line.push_str(arg);
            command_line.spans.push(start..command_line.line.len());
        }
        (command_line, args)
    }

    /// Returns the span of the argument at the given index, or the end of the line if there is no
    /// such argument.
    fn span(&self, index: usize) -> Range<usize> {
        self.spans.get(index)
            .cloned()
            .unwrap_or(self.line.len()..self.line.len())
    }
}

impl Args {
    /// Parses the arguments of the program, not including the program name.
    pub fn parse(command_line: &CommandLine, args: &[String]) -> Result<Self, Error> {
        let mut parsed = Self::default();
        let mut file_index = None;
        let mut index = 0;

        while index < args.len() {
            let arg = args[index].as_str();
            match arg {
                "--precision" => {
                    index += 1;
                    let precision = args.get(index)
                        .and_then(|value| value.parse().ok())
                        .ok_or_else(|| Error::new(vec![command_line.span(index)], InvalidPrecision))?;
                    parsed.precision = Some(precision);
                },
                flag if flag.starts_with("--") => {
                    return Err(Error::new(
                        vec![command_line.span(index)],
                        UnknownFlag { flag: flag.to_owned() },
                    ));
                },
                file => {
                    if let Some(first) = file_index {
                        return Err(Error::new(
                            vec![command_line.span(first), command_line.span(index)],
                            TooManyFiles,
                        ));
                    }
                    file_index = Some(index);
                    parsed.file = Some(file.to_owned());
                },
            }
            index += 1;
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use pdiff_error::ErrorKind as _;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, Error> {
        let (command_line, args) = CommandLine::new(args.iter().map(|arg| arg.to_string()));
        Args::parse(&command_line, &args)
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn precision_and_file() {
        assert_eq!(parse(&["--precision", "4", "input.txt"]).unwrap(), Args {
            precision: Some(4),
            file: Some(String::from("input.txt")),
        });
    }

    #[test]
    fn invalid_precision() {
        let err = parse(&["--precision", "-1"]).unwrap_err();
        assert_eq!(err.spans, vec![12..14]);

        let err = parse(&["--precision"]).unwrap_err();
        assert_eq!(err.spans, vec![11..11]);
    }

    #[test]
    fn unknown_flag() {
        let err = parse(&["a.txt", "--verbose"]).unwrap_err();
        assert_eq!(err.spans, vec![6..15]);
    }

    #[test]
    fn too_many_files() {
        let err = parse(&["a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.spans, vec![0..5, 6..11]);
        assert_eq!(err.kind.labels(), vec!["the first input file is here", "this file would be ignored"]);
        assert_eq!(err.kind.help().as_deref(), Some("run `pdiff` once per file"));
    }
}
