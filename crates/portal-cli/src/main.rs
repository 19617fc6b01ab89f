use crate::cli::{Cli, Commands, Coordinates};
use anyhow::{bail, Context};
use clap::Parser;
use flexi_logger::Logger;
use log::debug;
use portalcoords::{
    coords::RawCoordinate,
    dimensions::{Dimension, Direction},
};
use portalhistory::{FileStorage, Session, Storage};

mod cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let _logger = Logger::try_with_env_or_str(args.log_level())
        .context("Invalid log specification")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;

    let path = args.history_path()?;
    debug!("Using history file {}", path.display());

    let mut session = Session::new(FileStorage::new(path));

    match args.command {
        Commands::Convert(coords) => {
            apply(&mut session, coords);
            let direction = session.direction();
            println!(
                "{} ({}) -> {} ({})",
                session.inputs(),
                direction.source().name(),
                session.displayed(),
                direction.target().name()
            );
        }
        Commands::Copy(coords) => {
            apply(&mut session, coords);
            println!("{}", session.copy());
        }
        Commands::History => {
            if session.history().is_empty() {
                println!("No history yet...");
            }

            for (i, entry) in session.history().iter().enumerate() {
                println!(
                    "{:>2}. [{}] {}: {} -> {}",
                    i + 1,
                    entry.timestamp,
                    entry.dimension,
                    entry.from,
                    entry.to
                );
            }
        }
        Commands::Load { index } => {
            if index == 0 {
                bail!("History entries are numbered from 1");
            }

            let len = session.history().len();
            let displayed = session
                .restore(index - 1)
                .with_context(|| format!("No history entry {index} (history has {len} entries)"))?;

            println!(
                "{}: {} -> {}",
                session.direction().label(),
                session.inputs(),
                displayed
            );
        }
        Commands::Clear => {
            session.clear_history();
            println!("History cleared");
        }
    }

    Ok(())
}

fn apply<S: Storage>(session: &mut Session<S>, coords: Coordinates) {
    let dimension = match coords.d.as_str() {
        "nether" => Dimension::Nether,
        _ => Dimension::Overworld,
    };

    session.set_direction(Direction::from_source(dimension));
    session.set_inputs(RawCoordinate::new(coords.x, coords.y, coords.z));
}
