mod args;
mod error;

use args::{Args, CommandLine};
use error::Error;
use pdiff_compute::{numerical::fmt::{FormatOptions, FormatOptionsBuilder}, pipeline};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, process::ExitCode};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Runs the pipeline on the given three-line input, printing the result.
fn run(input: &str, options: FormatOptions) -> Result<(), Error> {
    let output = pipeline::run_with_options(input, options).map_err(Error::Input)?;
    println!("{}", output);
    Ok(())
}

/// Reads the whole input from the given file, or from stdin if there is no file.
fn read_input(file: Option<&str>, input: &mut String) -> Result<(), Error> {
    match file {
        Some(filename) => {
            let mut file = BufReader::new(File::open(filename)?);
            file.read_to_string(input)?;
        },
        None => {
            io::stdin().read_to_string(input)?;
        },
    }
    Ok(())
}

/// Prompts for the three lines of an input. Returns [`None`] if the formula is left blank.
fn read_problem(rl: &mut DefaultEditor) -> Result<Option<String>, ReadlineError> {
    let formula = rl.readline("f> ")?;
    if formula.trim().is_empty() {
        return Ok(None);
    }
    rl.add_history_entry(&formula)?;

    let plan = rl.readline("d/d> ")?;
    rl.add_history_entry(&plan)?;

    let bindings = rl.readline("at> ")?;
    rl.add_history_entry(&bindings)?;

    Ok(Some(format!("{}\n{}\n{}", formula, plan, bindings)))
}

/// Runs the interactive mode until the user exits with Ctrl-C or Ctrl-D.
fn repl(options: FormatOptions) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match read_problem(&mut rl) {
            Ok(Some(input)) => {
                if let Err(err) = run(&input, options) {
                    err.report_to_stderr("", &input);
                }
            },
            Ok(None) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn try_main(command_line: &CommandLine, args: &[String], input: &mut String) -> Result<(), Error> {
    let args = Args::parse(command_line, args).map_err(Error::Args)?;

    let mut builder = FormatOptionsBuilder::new();
    if let Some(precision) = args.precision {
        builder = builder.precision(precision);
    }
    let options = builder.build();

    if args.file.is_some() || !io::stdin().is_terminal() {
        read_input(args.file.as_deref(), input)?;
        run(input, options)
    } else {
        repl(options)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("PDIFF_LOG"))
        .init();

    let (command_line, args) = CommandLine::new(std::env::args().skip(1));
    let mut input = String::new();
    match try_main(&command_line, &args, &mut input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(&command_line.line, &input);
            ExitCode::FAILURE
        },
    }
}
