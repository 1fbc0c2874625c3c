// Entry point: runs the three standard sweeps and writes one chart per sweep.
use bloom_fp_rate::{plot, ImageFormat, PlotConfig, Sweep};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory the charts are written to
    #[arg(long, default_value = "target/plots")]
    out_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Image format
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    format: ImageFormat,
}

impl From<Args> for PlotConfig {
    fn from(args: Args) -> Self {
        Self {
            out_dir: args.out_dir,
            width: args.width,
            height: args.height,
            format: args.format,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PlotConfig::from(Args::parse());

    for sweep in Sweep::standard().iter() {
        let result = sweep.run()?;
        if let (Some(lo), Some(hi)) = (result.min_point(), result.max_point()) {
            info!(
                chart = result.title(),
                legend = result.legend(),
                min_at = lo.0,
                min = lo.1,
                max_at = hi.0,
                max = hi.1,
                "evaluated"
            );
        }
        plot::render(&result, &config)?;
    }

    println!("Saved charts to {}", config.out_dir.display());
    Ok(())
}
