use std::process::ExitCode;

use clap::error::ErrorKind;
use pretrain_path::PretrainError;

fn main() -> ExitCode {
    match pretrain_path::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(PretrainError::Usage(err)) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage problems go to stderr, but always exit with 1.
                let _ = err.print();
                ExitCode::from(1)
            }
        },
        Err(err) => {
            println!("{}", err);
            ExitCode::from(1)
        }
    }
}
