mod app;
mod args;
pub mod config;
mod errors;

pub use app::App;
pub use args::{Args, Command, FileConfig, LogFormat, RunArgs};
pub use config::{Config, Mode};
pub use errors::CliError;
