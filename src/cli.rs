use crate::config::{Flag, UiConfig, load_config};
use crate::data::{DataRecord, load_data, parse_data};
use crate::icons::IconCatalog;
use crate::locale::LocaleTable;
use crate::render::{render_card, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "statcard", version, about = "GitHub stats card renderer")]
pub struct Args {
    /// Stats data file (.json) or '-' for stdin
    #[arg(short = 'd', long = "data")]
    pub data: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// UI config file (JSON or JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Extra locale table (JSON), merged over the built-in one
    #[arg(short = 'l', long = "locales")]
    pub locales: Option<PathBuf>,

    /// Icon catalog (JSON) replacing the built-in icons
    #[arg(long = "icons")]
    pub icons: Option<PathBuf>,

    /// Locale identifier
    #[arg(long = "locale")]
    pub locale: Option<String>,

    /// Theme preset (default, light, dark)
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,

    /// Comma-separated items to hide
    #[arg(long = "hide")]
    pub hide: Option<String>,

    /// Comma-separated opt-in items to show
    #[arg(long = "show")]
    pub show: Option<String>,

    /// Disable animations
    #[arg(long = "disable-animations")]
    pub disable_animations: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let _ = env_logger::try_init();
    let args = Args::parse();

    let config = apply_overrides(load_config(args.config.as_deref())?, &args);
    let data = read_data(args.data.as_deref())?;
    let locales = match args.locales.as_deref() {
        Some(path) => LocaleTable::builtin().merged(&LocaleTable::load(path)?),
        None => LocaleTable::builtin().clone(),
    };
    let icons = match args.icons.as_deref() {
        Some(path) => IconCatalog::load(path)?,
        None => IconCatalog::builtin().clone(),
    };

    let svg = render_card(&data, &config, &locales, &icons);
    info!("rendered card for @{} ({} bytes)", data.username, svg.len());

    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, args.output.as_deref())?,
        OutputFormat::Png => write_png(&svg, args.output.as_ref())?,
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: Option<&PathBuf>) -> Result<()> {
    let output = ensure_output(output, "png")?;
    crate::render::write_output_png(svg, &output)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: Option<&PathBuf>) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(mut config: UiConfig, args: &Args) -> UiConfig {
    if let Some(locale) = &args.locale {
        config.locale = Some(locale.clone());
    }
    if let Some(theme) = &args.theme {
        config.theme = Some(theme.clone());
    }
    if let Some(hide) = &args.hide {
        config.hidden_items = Some(hide.clone());
    }
    if let Some(show) = &args.show {
        config.show_items = Some(show.clone());
    }
    if args.disable_animations {
        config.disabled_animations = Some(Flag::Bool(true));
    }
    if args.output_format == OutputFormat::Png {
        config.format = Some("png".to_string());
    }
    config
}

fn read_data(path: Option<&Path>) -> Result<DataRecord> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(load_data(path)?);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(parse_data(&buf)?)
}

#[cfg(feature = "png")]
fn ensure_output(output: Option<&PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
