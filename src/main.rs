use std::{env, process::ExitCode};

use sizes::{
    config::Config,
    output::{errors::print_errors, rows::print_rows},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // help, version and usage errors are rendered by clap itself
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            print_errors(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::parse(env::args_os())?;
    print_rows(&config)
}
