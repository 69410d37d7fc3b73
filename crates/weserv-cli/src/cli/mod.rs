//! CLI for building weserv image URLs.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use weserv_core::config::{self, WeservConfig};
use weserv_core::{Alignment, Filter, Fit, MaskType, OutputFormat, ParamValue, Rotation};

use commands::{run_completions, run_config_path, run_config_show, run_url};

/// Top-level CLI for the weserv URL builder.
#[derive(Debug, Parser)]
#[command(name = "weserv")]
#[command(about = "Build image URLs for the weserv image-processing API", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build and print an image URL.
    Url(UrlArgs),

    /// Inspect the configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the default config file path.
    Path,
    /// Print the effective configuration as TOML.
    Show,
}

/// Image options; each maps to one builder call.
#[derive(Debug, Default, Args)]
pub struct UrlArgs {
    /// Source image URL (absolute or relative).
    pub image_url: String,

    /// Override the API base URL from config.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Fail instead of silently dropping out-of-range values.
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
    /// Device pixel ratio (1-8).
    #[arg(long)]
    pub dpr: Option<u32>,
    #[arg(long)]
    pub align: Option<Alignment>,
    #[arg(long)]
    pub fit: Option<Fit>,

    /// Rectangle crop as X,Y,W,H.
    #[arg(long, value_name = "X,Y,W,H", value_parser = parse_crop)]
    pub crop: Option<[u32; 4]>,
    /// Apply the crop before resizing.
    #[arg(long, requires = "crop")]
    pub precrop: bool,
    /// Trim tolerance (1-254); bare `--trim` uses 10.
    #[arg(long, value_name = "TOLERANCE", num_args = 0..=1)]
    pub trim: Option<Option<u32>>,

    #[arg(long)]
    pub mask: Option<MaskType>,
    #[arg(long, requires = "mask")]
    pub mask_trim: bool,
    #[arg(long, requires = "mask", value_name = "COLOR")]
    pub mask_bg: Option<String>,

    #[arg(long)]
    pub flip: bool,
    #[arg(long)]
    pub flop: bool,
    /// `auto` or a multiple of 90.
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<Rotation>,
    #[arg(long, requires = "rotate", value_name = "COLOR")]
    pub rotate_bg: Option<String>,

    #[arg(long, value_name = "COLOR")]
    pub bg: Option<String>,
    #[arg(long)]
    pub blur: Option<f64>,
    /// Brightness delta (-100 to 100).
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<i32>,
    /// Contrast delta (-100 to 100).
    #[arg(long, allow_hyphen_values = true)]
    pub contrast: Option<i32>,
    #[arg(long)]
    pub filter: Option<Filter>,
    #[arg(long, requires = "filter", value_name = "COLOR")]
    pub filter_start: Option<String>,
    #[arg(long, requires = "filter", value_name = "COLOR")]
    pub filter_stop: Option<String>,
    /// Gamma (1-3); bare `--gamma` uses 2.2.
    #[arg(long, num_args = 0..=1)]
    pub gamma: Option<Option<f64>>,
    #[arg(long, value_name = "SIGMA")]
    pub sharpen: Option<f64>,
    #[arg(long, requires = "sharpen")]
    pub sharpen_flat: Option<f64>,
    #[arg(long, requires = "sharpen")]
    pub sharpen_jagged: Option<f64>,
    #[arg(long, value_name = "COLOR")]
    pub tint: Option<String>,

    /// Encoder quality (1-100).
    #[arg(long)]
    pub quality: Option<u32>,
    #[arg(long)]
    pub output: Option<OutputFormat>,
    #[arg(long)]
    pub interlace: bool,

    /// Extra raw parameter, repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, ParamValue)>,
}

fn parse_crop(s: &str) -> Result<[u32; 4], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected X,Y,W,H, got `{s}`"));
    }
    let mut out = [0u32; 4];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("`{part}` is not a non-negative integer"))?;
    }
    Ok(out)
}

fn parse_key_value(s: &str) -> Result<(String, ParamValue), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => {
            Ok((key.to_string(), ParamValue::parse_loose(value)))
        }
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<WeservConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Url(args) => {
                let cfg = load_config(cli.config.as_ref())?;
                run_url(&cfg, &args)?;
            }
            CliCommand::Config { action } => match action {
                ConfigAction::Path => run_config_path(cli.config.as_deref())?,
                ConfigAction::Show => {
                    let cfg = load_config(cli.config.as_ref())?;
                    run_config_show(&cfg)?;
                }
            },
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
