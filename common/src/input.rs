//! # Input Collector
//!
//! Asks for the charges, the plot maximum and the output path, one prompt per
//! line. The collector is generic over its streams so the rest of the
//! pipeline can be driven without a terminal.
//!
//! Every malformed answer ends collection immediately with an
//! [`Error::InputFormat`]; a stream that fails or runs dry ends it with an
//! [`Error::StreamRead`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::field::Charge;
use crate::field::charge::parse_finite;

/// Everything a run needs from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub charges: Vec<Charge>,
    /// Upper bound of both plot axes.
    pub max_value: f64,
    pub output: PathBuf,
}

pub struct Collector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the full prompt sequence.
    pub fn collect(mut self) -> Result<Request> {
        let count = self.charge_count()?;

        let mut charges: Vec<Charge> = Vec::new();
        for idx in 1..=count {
            let line = self.ask(&format!(
                "Enter the position (x y) and charge value for charge {idx}, separated by spaces: "
            ))?;
            let charge: Charge = line.parse()?;
            debug!("charge {idx}: {charge}");
            charges.push(charge);
        }

        let max_value = self.ask("Enter the maximum value for the plot: ")?;
        let max_value = parse_finite(&max_value, "maximum value")?;

        let output = self.ask("Enter the filename for the final plot (e.g., my_plot.png): ")?;

        Ok(Request {
            charges,
            max_value,
            output: PathBuf::from(output),
        })
    }

    fn charge_count(&mut self) -> Result<usize> {
        let answer = self.ask("Enter the number of charges:")?;
        answer.parse::<usize>().map_err(|e| {
            Error::input_format("number of charges", format!("'{answer}': {e}"))
        })
    }

    /// Writes `prompt`, then reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::StreamRead(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all values were given",
            )));
        }
        Ok(line.trim().to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
