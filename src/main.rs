use anyhow::Result;
use taskroll::commands::Cli;
use taskroll::libs::logging;

fn main() -> Result<()> {
    logging::init();
    Cli::menu()
}
