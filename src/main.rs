use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use inferdemo::MapOp;
use inferdemo::demos::{self, DEMOS};
use inferdemo::transform::render_list;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "inferdemo")]
#[command(version, about = "Generic map and type inference demonstrations", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available demos
    List,

    /// Run demos by name (all demos when none are given)
    Run {
        #[arg(value_name = "NAME")]
        names: Vec<String>,
    },

    /// Apply an element transform to each word and print the result
    Map {
        /// Transform to apply
        #[arg(short, long, value_enum, default_value = "len")]
        op: MapOp,

        #[arg(value_name = "WORD")]
        words: Vec<String>,
    },

    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => {
            let width = DEMOS.iter().map(|d| d.name.len()).max().unwrap_or(0);
            for demo in DEMOS {
                writeln!(out, "{:width$}  {}", demo.name, demo.summary, width = width)?;
            }
        }

        Commands::Run { names } => {
            if names.is_empty() {
                log::info!("running all {} demos", DEMOS.len());
                demos::run_all(&mut out)?;
            } else {
                for name in &names {
                    demos::run_demo(name, &mut out)
                        .with_context(|| format!("demo '{}' failed", name))?;
                }
            }
        }

        Commands::Map { op, words } => {
            let results = op.apply(&words)?;
            writeln!(out, "{}", render_list(&results))?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "inferdemo", &mut out);
        }
    }

    out.flush()?;
    Ok(())
}
