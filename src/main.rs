use crate::core::cli::CliPaths;
use crate::core::context::AppContext;
use crate::logging::LogTarget;
use crate::prompter::flows::main_flow::MainFlow;
use crate::prompter::prompter::Prompter;

pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod extensions;
pub mod logging;
pub mod prompter;
pub mod select;
pub mod ui;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    // Load failures (missing roster, bad rows, broken config) abort here;
    // the interactive loop never starts on a partial dataset.
    let mut ctx = match AppContext::new_with_paths(
        paths.roster_path,
        paths.config_path,
        paths.exports_dir,
        paths.logs_dir,
    ) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow, false) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
