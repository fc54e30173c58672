use colored::*;
use coulomb_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::SpinnerWriter;

pub struct CoulombFormatter;

impl<S, N> FormatEvent<S, N> for CoulombFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match (*meta.level(), meta.target()) {
                    (Level::INFO, SUCCESS_TARGET) => ("[✓]", |s| s.bright_green().bold()),
                    (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                    (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                    (Level::INFO, _) => ("[+]", |s| s.green().bold()),
                    (Level::WARN, _) => ("[*]", |s| s.yellow().bold()),
                    (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the level picked from `quiet`.
pub fn init_logging(quiet: u8) {
    let default_level = match quiet {
        0 | 1 => "info",
        _ => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .event_format(CoulombFormatter)
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .init();
}
