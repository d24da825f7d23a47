pub mod output;

mod flow;
mod io;

pub use flow::{run_cli, CliError};
