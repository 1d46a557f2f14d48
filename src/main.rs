use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettizer::models::{CompressionSetting, IndexPolicySetting, ScanOrderSetting, Settings};
use palettizer::services::{RecolorJob, RecolorService};

#[derive(Parser)]
#[command(name = "palettizer")]
#[command(
    about = "Recolor an image using the palette of another image, matched by brightness"
)]
struct Cli {
    /// Image whose brightness structure is kept
    source: PathBuf,

    /// Image whose colors are used
    palette: PathBuf,

    /// Output PNG file path
    output: PathBuf,

    /// Settings file (YAML); defaults to $PALETTIZER_CONFIG if set
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixel scan order, decides the order of equally bright colors
    #[arg(long, value_enum)]
    scan_order: Option<ScanOrderSetting>,

    /// Handling of scaled indices past the end of the target palette
    #[arg(long, value_enum)]
    index_policy: Option<IndexPolicySetting>,

    /// PNG compression level
    #[arg(long, value_enum)]
    compression: Option<CompressionSetting>,

    /// Re-compress the output with oxipng
    #[arg(long)]
    optimize: bool,
}

impl Cli {
    /// Command-line flags take precedence over the settings file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(order) = self.scan_order {
            settings.scan_order = order;
        }
        if let Some(policy) = self.index_policy {
            settings.index_policy = policy;
        }
        if let Some(compression) = self.compression {
            settings.compression = compression;
        }
        if self.optimize {
            settings.optimize = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let job = RecolorJob {
        source: cli.source,
        palette: cli.palette,
        output: cli.output,
    };

    let report = RecolorService::new(&settings)
        .run(&job)
        .with_context(|| format!("Failed to recolor {}", job.source.display()))?;

    println!(
        "Wrote {} ({} bytes, {} -> {} colors)",
        job.output.display(),
        report.bytes_written,
        report.stats.source_colors,
        report.stats.target_colors
    );

    Ok(())
}
