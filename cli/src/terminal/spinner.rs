use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// The spinner currently on screen, if any. Log lines are routed through it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub struct Spinner {
    spinner: ProgressBar,
}

impl Spinner {
    pub fn start(message: String) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_strings(TICKS));
        }
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut active) = ACTIVE.lock() {
            *active = Some(pb.clone());
        }
        Self { spinner: pb }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Ok(mut active) = ACTIVE.lock() {
            active.take();
        }
        self.spinner.finish_and_clear();
    }
}

pub fn rendering_message(output: &Path) -> String {
    format!(
        "Computing the field and drawing {}...",
        output.display().to_string().green().bold()
    )
}

/// Log sink that prints above an active spinner and falls back to stderr.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active = ACTIVE.lock().ok().and_then(|active| active.clone());
        match active {
            Some(pb) => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
