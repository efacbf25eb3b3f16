use clap::Parser;
use feature_tour::cli::{App, Args, Config, LogFormat};
use feature_tour::console::StdoutConsole;
use std::process;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() {
    let args = Args::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = App::run(&config, Rc::new(StdoutConsole)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
