#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{cli, init_logging, GameEngine};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns at this terminal.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (random placements will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut engine = GameEngine::new();
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            cli::run_local(&mut engine, &mut rng, &mut stdin.lock(), &mut stdout.lock())?;
        }
    }
    Ok(())
}
