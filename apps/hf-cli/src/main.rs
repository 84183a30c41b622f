use clap::{Parser, Subcommand};
use hf_chain::{Chain, ConfigurationLibrary, ConfigurationSet, format_quantity};
use hf_components::{DeliveryComponent, Nozzle, NozzleKind, hose_friction_loss};
use hf_core::HfError;
use hf_scenarios::{
    DefinitionError, RealisticBounds, build_realistic_configurations_set, builtin_library,
    library_to_document, load_bounds_yaml, load_library, save_yaml,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HoseFlow CLI - fire-ground hydraulics practice sets", long_about = None)]
struct Cli {
    /// Extra definition file; its sets are listed after the built-in ones
    #[arg(short, long, global = true)]
    definitions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configuration sets
    Sets,
    /// Show flow rate and pump pressure for every chain in a set
    Show {
        /// Configuration set ID
        set_id: String,
    },
    /// Step through one chain from the nozzle back to the pump
    Walkthrough {
        /// Configuration set ID
        set_id: String,
        /// Chain position within the set (0-based)
        index: usize,
    },
    /// Generate a randomized realistic variant of a set
    Realistic {
        /// Configuration set ID
        set_id: String,
        /// RNG seed for a reproducible scenario
        #[arg(long)]
        seed: Option<u64>,
        /// YAML file overriding the default randomization bounds
        #[arg(long)]
        bounds: Option<PathBuf>,
    },
    /// Friction loss for a length of hose
    Friction {
        /// Hose diameter in inches (1.75, 2.5, 3, 5)
        diameter: f64,
        /// Length in feet
        length: u32,
        /// Flow rate in gpm
        flow_rate: f64,
    },
    /// Flow rate and pressure for a nozzle
    Nozzle {
        /// Nozzle kind, e.g. HandSmooth or MasterFog
        kind: NozzleKind,
        /// Tip diameter in inches
        #[arg(long)]
        diameter: Option<f64>,
        /// Model identifier (cellar nozzles)
        #[arg(long)]
        identifier: Option<String>,
    },
    /// Validate a definition file
    Validate {
        /// Path to the definition YAML file
        path: PathBuf,
    },
    /// Write all loaded sets to a definition file
    Export {
        /// Output YAML file path
        output: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Core(#[from] HfError),

    #[error("Configuration set not found: {0}")]
    SetNotFound(String),

    #[error("No chain {index} in set {set_id}")]
    ChainNotFound { set_id: String, index: usize },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let definitions = cli.definitions.as_deref();

    match cli.command {
        Commands::Sets => cmd_sets(&load_all(definitions)?),
        Commands::Show { set_id } => {
            let library = load_all(definitions)?;
            cmd_show(find_set(&library, &set_id)?)
        }
        Commands::Walkthrough { set_id, index } => {
            cmd_walkthrough(&load_all(definitions)?, &set_id, index)
        }
        Commands::Realistic {
            set_id,
            seed,
            bounds,
        } => cmd_realistic(&load_all(definitions)?, &set_id, seed, bounds.as_deref()),
        Commands::Friction {
            diameter,
            length,
            flow_rate,
        } => cmd_friction(diameter, length, flow_rate),
        Commands::Nozzle {
            kind,
            diameter,
            identifier,
        } => cmd_nozzle(Nozzle {
            kind,
            diameter,
            identifier,
        }),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Export { output } => cmd_export(&load_all(definitions)?, &output),
    }
}

fn load_all(definitions: Option<&Path>) -> CliResult<ConfigurationLibrary> {
    let mut library = builtin_library()?;
    if let Some(path) = definitions {
        library.extend(load_library(path)?);
    }
    tracing::debug!(sets = library.len(), "loaded configuration library");
    Ok(library)
}

fn find_set<'a>(library: &'a ConfigurationLibrary, set_id: &str) -> CliResult<&'a ConfigurationSet> {
    library
        .get_by_id(set_id)
        .ok_or_else(|| CliError::SetNotFound(set_id.to_string()))
}

fn cmd_sets(library: &ConfigurationLibrary) -> CliResult<()> {
    if library.is_empty() {
        println!("No configuration sets loaded");
        return Ok(());
    }
    println!("Configuration sets:");
    for set in library {
        println!("  {} - {} ({} chains)", set.id(), set.description(), set.len());
    }
    Ok(())
}

fn print_chain(index: usize, chain: &Chain) -> CliResult<()> {
    println!("[{index}] {}", chain.description()?);
    // Appliance-only items have no flow of their own.
    match chain.flow_rate() {
        Ok(flow_rate) => println!("    Flow rate: {} gpm", format_quantity(flow_rate)),
        Err(HfError::NoNozzleFound) => println!("    Flow rate: n/a"),
        Err(err) => return Err(err.into()),
    }
    println!(
        "    Pressure:  {} psi",
        format_quantity(chain.total_needed_pressure()?)
    );
    Ok(())
}

fn cmd_show(set: &ConfigurationSet) -> CliResult<()> {
    println!("{} ({})", set.description(), set.id());
    for (index, chain) in set.iter().enumerate() {
        print_chain(index, chain)?;
    }
    Ok(())
}

fn cmd_walkthrough(library: &ConfigurationLibrary, set_id: &str, index: usize) -> CliResult<()> {
    let set = find_set(library, set_id)?;
    let chain = set.get(index).ok_or_else(|| CliError::ChainNotFound {
        set_id: set_id.to_string(),
        index,
    })?;

    println!("{}", chain.description()?);
    for step in chain.walkthrough()? {
        println!("  {}", step.component.description());
        println!(
            "    flow {} gpm, adds {} psi, {} psi needed from here",
            format_quantity(step.flow_rate),
            format_quantity(step.pressure_delta),
            format_quantity(step.total_needed_pressure)
        );
    }
    Ok(())
}

fn cmd_realistic(
    library: &ConfigurationLibrary,
    set_id: &str,
    seed: Option<u64>,
    bounds: Option<&Path>,
) -> CliResult<()> {
    let base = find_set(library, set_id)?;
    let bounds = match bounds {
        Some(path) => load_bounds_yaml(path)?,
        None => RealisticBounds::default(),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let set = build_realistic_configurations_set(base, &bounds, &mut rng)?;
    cmd_show(&set)
}

fn cmd_friction(diameter: f64, length: u32, flow_rate: f64) -> CliResult<()> {
    let loss = hose_friction_loss(diameter, length, flow_rate)?;
    println!(
        "{}' of {} hose at {} gpm: {} psi",
        length,
        hf_components::diameter_description(diameter),
        format_quantity(flow_rate),
        format_quantity(loss)
    );
    Ok(())
}

fn cmd_nozzle(nozzle: Nozzle) -> CliResult<()> {
    println!("{}", nozzle.description());
    println!("  Flow rate: {} gpm", format_quantity(nozzle.flow_rate()?));
    println!(
        "  Nozzle pressure: {} psi",
        format_quantity(nozzle.nozzle_pressure())
    );
    Ok(())
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating definitions: {}", path.display());
    let library = load_library(path)?;
    println!("✓ {} sets are valid", library.len());
    Ok(())
}

fn cmd_export(library: &ConfigurationLibrary, output: &Path) -> CliResult<()> {
    let document = library_to_document(library)?;
    save_yaml(output, &document)?;
    println!("✓ Wrote {} sets to {}", document.sets.len(), output.display());
    Ok(())
}
