use std::io;

use anyhow::Context;
use colored::*;
use coulomb_common::config::Config;
use coulomb_common::field::Charge;
use coulomb_common::input::{Collector, Request};
use coulomb_common::success;
use coulomb_core::pipeline::{self, PlotSummary};
use coulomb_core::render::raster::RasterSink;

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::spinner::{self, Spinner};
use crate::terminal::colors;

pub fn plot(cfg: &Config) -> anyhow::Result<()> {
    cfg.validate().context("checking options")?;

    print::header("input", cfg.quiet);
    let request: Request = Collector::new(io::stdin().lock(), io::stdout())
        .collect()
        .context("collecting input")?;

    let unit: &str = if request.charges.len() == 1 { "charge has" } else { "charges have" };
    success!("{} {unit} been read", request.charges.len());

    print::header("field", cfg.quiet);
    let sink = RasterSink::from_config(cfg);
    let spinner = (cfg.quiet == 0).then(|| Spinner::start(spinner::rendering_message(&request.output)));
    let result = pipeline::plot_field(&request, cfg, &sink);
    drop(spinner);

    let summary: PlotSummary = result.context("rendering plot")?;
    success!("Plot saved to {}", summary.output.display());

    if cfg.quiet == 0 {
        print_charges(&request.charges);
        print_summary(&summary);
    }
    Ok(())
}

fn print_charges(charges: &[Charge]) {
    if charges.is_empty() {
        return;
    }
    print::header("charges", 0);
    for (idx, charge) in charges.iter().enumerate() {
        let color = if charge.is_positive() {
            colors::POSITIVE_CHARGE
        } else {
            colors::NEGATIVE_CHARGE
        };
        print::print(&format!(
            "{} {}",
            format!("[{}]", (idx + 1).to_string().color(colors::ACCENT)).color(colors::SEPARATOR),
            charge.to_string().color(color)
        ));
    }
}

fn print_summary(summary: &PlotSummary) {
    GLOBAL_KEY_WIDTH.set(18);
    print::header("summary", 0);
    print::aligned_line("Charges", summary.charges);
    print::aligned_line("Observation points", summary.observation_points);
    print::aligned_line("Peak field", format!("{:.3e} N/C", summary.peak_magnitude));
    print::aligned_line("Output", summary.output.display());

    let done: ColoredString = "Plot complete".bold().green();
    print::fat_separator();
    print::centerln(&done.to_string());
}
