mod cli;
mod outline_cmd;
mod shared;
mod toc_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Outline { ref file, ref format } => outline_cmd::run(file, format),
        cli::Commands::Toc { ref file, ref format } => toc_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
