use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use umbrelfab::{
    AppError, ComposeDescriptor, ComposeOptions, ManifestDescriptor, ManifestOptions,
    QuotingProfile, render_compose, render_manifest, validate_manifest,
};

#[derive(Parser)]
#[command(name = "umbrelfab")]
#[command(version)]
#[command(
    about = "Render Umbrel app manifests and docker-compose files from descriptor files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an umbrel-app.yml manifest from a descriptor file
    Manifest {
        /// Descriptor file (YAML or JSON)
        file: PathBuf,
        /// Render this release value instead of the descriptor's version
        #[arg(long)]
        pin_version: Option<String>,
        /// Write the output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a docker-compose.yml from a descriptor file
    Compose {
        /// Descriptor file (YAML or JSON)
        file: PathBuf,
        /// Skip the forced-quoting post-processing pass
        #[arg(long)]
        minimal_quoting: bool,
        /// Write the output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a manifest descriptor for missing required fields
    Validate {
        /// Descriptor file (YAML or JSON)
        file: PathBuf,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Manifest { file, pin_version, output } => {
            run_manifest(&file, pin_version, output.as_deref())
        }
        Commands::Compose { file, minimal_quoting, output } => {
            run_compose(&file, minimal_quoting, output.as_deref())
        }
        Commands::Validate { file, json } => run_validate(&file, json),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_manifest(
    file: &Path,
    pin_version: Option<String>,
    output: Option<&Path>,
) -> Result<i32, AppError> {
    let descriptor: ManifestDescriptor = load_descriptor(file)?;

    // Missing fields warn but never block the render.
    let validation = validate_manifest(&descriptor);
    if !validation.is_valid {
        eprintln!("Warning: missing required fields: {}", validation.missing_fields.join(", "));
    }

    let options = ManifestOptions { pinned_version: pin_version };
    emit(&render_manifest(&descriptor, &options)?, output)?;
    Ok(0)
}

fn run_compose(file: &Path, minimal_quoting: bool, output: Option<&Path>) -> Result<i32, AppError> {
    let descriptor: ComposeDescriptor = load_descriptor(file)?;
    let options = ComposeOptions {
        quoting: if minimal_quoting { QuotingProfile::Minimal } else { QuotingProfile::Strict },
    };
    emit(&render_compose(&descriptor, &options)?, output)?;
    Ok(0)
}

fn run_validate(file: &Path, json: bool) -> Result<i32, AppError> {
    let descriptor: ManifestDescriptor = load_descriptor(file)?;
    let validation = validate_manifest(&descriptor);

    if json {
        println!("{}", serde_json::to_string_pretty(&validation)?);
    } else if validation.is_valid {
        println!("All required fields are present");
    } else {
        println!("Missing required fields:");
        for label in &validation.missing_fields {
            println!("  - {label}");
        }
    }

    Ok(if validation.is_valid { 0 } else { 1 })
}

/// Read a descriptor file. YAML parsing accepts JSON as a subset, so both
/// file formats go through the same path.
fn load_descriptor<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_yaml::from_str(&raw).map_err(|err| AppError::MalformedDescriptor {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

fn emit(text: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
