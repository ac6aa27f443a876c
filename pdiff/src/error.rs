use rustyline::error::ReadlineError;
use std::io;

/// Utility enum to package errors that can occur while running `pdiff`.
#[derive(Debug)]
pub enum Error {
    /// The command line arguments were invalid.
    Args(pdiff_error::Error),

    /// The input was invalid.
    Input(pdiff_error::Error),

    /// The input file or stdin could not be read.
    Io(io::Error),

    /// The interactive prompt failed.
    Readline(ReadlineError),
}

impl Error {
    /// Report this error to stderr. `command_line` and `input` are the sources that argument and
    /// input errors point into.
    pub fn report_to_stderr(&self, command_line: &str, input: &str) {
        let reported = match self {
            Self::Args(err) => err.report_to_stderr("arguments", command_line),
            Self::Input(err) => err.report_to_stderr("input", input),
            Self::Io(err) => {
                eprintln!("error: {}", err);
                Ok(())
            },
            Self::Readline(err) => {
                eprintln!("error: {}", err);
                Ok(())
            },
        };

        if let Err(err) = reported {
            eprintln!("error: could not write report: {}", err);
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
