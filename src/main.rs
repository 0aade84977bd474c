// main.rs - CLI entry point

use chksum::output::Logger;
use chksum::runner;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut logger = Logger::stdout();
    let outcome = runner::run(&args, &mut logger);
    logger.flush();

    std::process::exit(outcome.exit_code());
}
