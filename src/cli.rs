use crate::config::load_config;
use crate::figures;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "figgen", version, about = "Renders the survey paper figures (PDF + PNG)")]
pub struct Args {
    /// Directory the figure files are written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// JSON file with palette / render overrides
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Raster resolution for the PNG outputs (overrides the config file)
    #[arg(long = "dpi")]
    pub dpi: Option<f32>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dpi) = args.dpi {
        config.render.raster_dpi = dpi;
    }

    println!("Generating figures for XAI Survey Paper...");
    println!("{}", "=".repeat(50));
    for figure in figures::all(&config.palette) {
        figure.export(&args.out_dir, &config.render)?;
        println!("Created: {}.pdf and .png", figure.name);
    }
    println!("{}", "=".repeat(50));
    println!("All figures generated successfully!");
    Ok(())
}
