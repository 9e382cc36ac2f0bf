mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    // Initialize logging as early as possible.
    talkfetch_core::logging::init_logging(cli.log_level.filter());

    if let Err(err) = cli.run() {
        eprintln!("talkfetch error: {:#}", err);
        std::process::exit(1);
    }
}
