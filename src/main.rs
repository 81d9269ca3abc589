use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ext_icons::IconConfig;

#[derive(Parser)]
#[command(
    name = "ext-icons",
    version,
    about = "Generate the 16/48/128 px PNG icons for a browser extension"
)]
struct Cli {
    /// Directory to write icon{size}.png files into
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the per-icon report
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = IconConfig {
        out_dir: cli.out_dir,
        ..Default::default()
    };

    ext_icons::generate_icons(&config, |path, icon| {
        println!("✓ Created {} ({}x{})", path.display(), icon.width, icon.height);
    })
    .with_context(|| format!("failed to generate icons in {}", config.out_dir.display()))?;

    println!("\nAll icons generated!");
    Ok(())
}
