pub mod plot;

use clap::Parser;
use coulomb_common::config::{
    Config, DEFAULT_DPI, DEFAULT_INTERVAL, DEFAULT_MIN, DEFAULT_REFERENCE_SCALE,
};

#[derive(Parser)]
#[command(name = "coulomb")]
#[command(version)]
#[command(about = "Plots the electric field of a set of point charges.")]
pub struct CommandLine {
    /// Spacing between observation points on both axes
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL)]
    pub interval: f64,

    /// Lower bound of both plot axes
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    pub min: f64,

    /// Net field magnitude (N/C) drawn at full color intensity
    #[arg(long, default_value_t = DEFAULT_REFERENCE_SCALE)]
    pub reference_scale: f64,

    /// Resolution of the 8x8 inch canvas
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Hide headers and the summary (-q), and info logs as well (-qq)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            interval: self.interval,
            min: self.min,
            reference_scale: self.reference_scale,
            dpi: self.dpi,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
