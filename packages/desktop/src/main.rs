// gamepage desktop entry point.
// Opens the bundled web page in a native window and exits when it is closed.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use gamepage_desktop_lib::cli::LaunchArgs;
use gamepage_desktop_lib::exit_code::ExitCode;

fn main() -> std::process::ExitCode {
    let args = LaunchArgs::parse();
    gamepage_desktop_lib::init_tracing();

    match gamepage_desktop_lib::run(args) {
        Ok(()) => ExitCode::Success.into(),
        Err(error) => {
            eprintln!("gamepage: {error:#}");
            ExitCode::from_error(&error).into()
        }
    }
}
