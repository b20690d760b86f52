use horizon::{BuildOptions, HorizonStore, HorizonUpdate};
use itertools::Itertools;
use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;
use wkt::ToWkt;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    #[cfg(feature = "tracing")]
    horizon::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let Some(arg) = std::env::args_os().nth(1) else {
        eprintln!("usage: horizon <update.json>");
        return ExitCode::FAILURE;
    };

    match run(Path::new(&arg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Failed to process horizon update. Reason: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> horizon::Result<()> {
    let reader = BufReader::new(File::open(path)?);
    let update = HorizonUpdate::from_reader(reader)?;
    info!("Loaded {} edges from {}", update.edges.len(), path.display());

    let store = HorizonStore::new(BuildOptions::from_env());
    store.apply(update)?;

    let view = store.view()?;
    let current = view.current()?;

    println!(
        "Current edge: {} ({}, {:.1}m, {:.0}% along)",
        current.id,
        current.metadata.road_class,
        current.metadata.length,
        view.position().percent_along() * 100.0
    );

    if let Some(name) = current.metadata.primary_name() {
        println!("  Road: {name}");
    }

    for (index, path) in view.paths_ahead()?.iter().enumerate() {
        println!(
            "Path {index}: {} ({:.1}m ahead)",
            path.edges.iter().join(" -> "),
            path.length
        );

        if let Some(shape) = path.shape(view.tree()) {
            println!("  {}", shape.wkt_string());
        }
    }

    Ok(())
}
