use std::path::PathBuf;

use clap::{Args, Subcommand};
use sumlink_frame::DEFAULT_BUFFER_CAPACITY;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod add;
pub mod serve;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve sum requests on a socket.
    Serve(ServeArgs),
    /// Ask a running server for one sum.
    Add(AddArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Serve(args) => serve::run(args),
        Command::Add(args) => add::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Socket path to bind.
    pub path: PathBuf,
    /// Receive/send buffer capacity in bytes.
    #[arg(long, default_value_t = DEFAULT_BUFFER_CAPACITY)]
    pub buffer: usize,
    /// Exit after the first session ends instead of accepting again.
    #[arg(long)]
    pub once: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Socket path to connect to.
    pub path: PathBuf,
    /// First addend.
    pub one: u64,
    /// Second addend.
    pub two: u64,
}
