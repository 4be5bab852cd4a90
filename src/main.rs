use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use warrant_press::{Locale, PipelineError, WarrantPressBuilder, read_record, suggested_file_name};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Fr,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Fr => Locale::French,
        }
    }
}

/// Render a warrant record (JSON) to a PDF document.
#[derive(Debug, Parser)]
#[command(name = "warrant-press", version)]
struct Cli {
    /// Path to the warrant record JSON file.
    record: PathBuf,

    /// Output PDF path. Defaults to `warrant-<id>.pdf` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document language; overrides the configuration file.
    #[arg(long, value_enum)]
    locale: Option<LocaleArg>,

    /// Render configuration JSON (locale, label overrides, geometry).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = WarrantPressBuilder::new();
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(locale) = cli.locale {
        builder = builder.with_locale(locale.into());
    }
    let press = builder.build()?;

    log::info!("Loading warrant from {}", cli.record.display());
    let warrant = read_record(&cli.record)?;
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_file_name(&warrant)));

    press.render_to_file(&warrant, &output)?;
    println!("Successfully generated {}", output.display());
    Ok(())
}
