//! Generate the bundled users dataset from a named registry seed.
//!
//! ```text
//! example-data-generate --registry seeds.json --seed-name lendsqr-demo --output users.json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use example_data::{SeedRegistry, generate_example_users, write_dataset};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `example-data-generate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "example-data-generate",
    about = "Write a deterministic users dataset generated from a seed registry",
    version
)]
struct CliArgs {
    /// Path to the seed registry JSON file.
    #[arg(long, value_name = "path")]
    registry: Utf8PathBuf,
    /// Name of the seed to generate from.
    #[arg(long = "seed-name", value_name = "name")]
    seed_name: String,
    /// Path of the JSON file to write.
    #[arg(long, value_name = "path")]
    output: Utf8PathBuf,
    /// Overrides the seed's user count.
    #[arg(long, value_name = "n")]
    count: Option<usize>,
}

fn main() -> ExitCode {
    if let Err(err) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %err, "tracing init failed");
    }

    match run(&CliArgs::parse()) {
        Ok(summary) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{summary}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
                drop(err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String, String> {
    let registry =
        SeedRegistry::from_file(args.registry.as_std_path()).map_err(|err| err.to_string())?;
    let named = registry
        .find_seed(&args.seed_name)
        .map_err(|err| err.to_string())?;
    let seed = args
        .count
        .map_or_else(|| named.clone(), |count| named.with_user_count(count));

    let users = generate_example_users(&registry, &seed).map_err(|err| err.to_string())?;

    let parent = args
        .output
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .map_or_else(|| Utf8PathBuf::from("."), Utf8PathBuf::from);
    let file_name = args
        .output
        .file_name()
        .ok_or_else(|| format!("output path '{}' does not name a file", args.output))?;
    let dir = Dir::open_ambient_dir(&parent, ambient_authority())
        .map_err(|err| format!("failed to open '{parent}': {err}"))?;

    write_dataset(&dir, Utf8Path::new(file_name), &users).map_err(|err| err.to_string())?;

    info!(
        seed = seed.name(),
        users = users.len(),
        output = %args.output,
        "wrote example users dataset"
    );
    Ok(format!("Wrote {} with {} users", args.output, users.len()))
}
