use clap::Parser;
use snip_cli::cli::Snip;
use snip_cli::commands::handle_command;
use snip_cli::output;
use std::process;

fn main() {
    let cli = Snip::parse();

    if let Err(e) = handle_command(cli) {
        output::error(&e);
        process::exit(1);
    }
}
