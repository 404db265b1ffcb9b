use std::path::PathBuf;

use clap::Parser;
use spv_embed::{batch::config_from_folder, generate_shader_headers, BatchConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Convert SPIR-V shaders to headers with one hex literal per byte.
struct Cli {
    /// Shader names to convert like "vert" for "vert.spv".
    /// Defaults to "vert" and "frag".
    names: Vec<String>,

    /// The folder containing the .spv files and output .h files.
    #[arg(long, default_value = "shaders")]
    base_dir: PathBuf,

    /// Convert every .spv file in the base folder instead of the listed names.
    #[arg(long, conflicts_with = "names")]
    all: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let config = if cli.all {
        config_from_folder(&cli.base_dir)?
    } else if cli.names.is_empty() {
        BatchConfig {
            base_dir: cli.base_dir,
            ..Default::default()
        }
    } else {
        BatchConfig {
            shader_names: cli.names,
            base_dir: cli.base_dir,
        }
    };

    let start = std::time::Instant::now();
    generate_shader_headers(&config)?;
    log::info!("Finished in {:?}", start.elapsed());

    Ok(())
}
