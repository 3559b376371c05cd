mod cli;

use anyhow::Result;
use colored::*;
use tracing_subscriber::{registry::Registry, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use xmlbuildlog::{EventSource, XmlLogger};

use crate::cli::{input::read_events, CLI};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout may be carrying the XML document
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(HierarchicalLayer::new(2).with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = CLI::init()?;
    let config = cli.get_logger_config()?;
    let input = cli.get_input()?;

    let mut source = EventSource::new(vec![Box::new(XmlLogger::new(config))]);
    source.initialize()?;

    // Shut down even when replay fails so the document is still closed
    let replayed = read_events(input, &mut source);
    let shutdown = source.shutdown();

    let count = replayed?;
    shutdown?;
    tracing::debug!("Replayed {} events", count);

    Ok(())
}
