mod commands;
mod terminal;

use commands::{CommandLine, plot};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    plot::plot(&cfg)
}
