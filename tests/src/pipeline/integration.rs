mod util;

use std::fs;
use std::io::Cursor;
use std::path::Path;

use coulomb_common::config::Config;
use coulomb_common::error::{Error, Result};
use coulomb_common::input::{Collector, Request};
use coulomb_core::pipeline::{self, PlotSummary};
use coulomb_core::render::raster::RasterSink;
use tempfile::TempDir;
use util::single_charge_answers;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Collects `answers` as if typed at the prompts and runs the full pipeline.
fn run(answers: &str, cfg: &Config) -> Result<PlotSummary> {
    let mut prompts: Vec<u8> = Vec::new();
    let request: Request = Collector::new(Cursor::new(answers), &mut prompts).collect()?;
    pipeline::plot_field(&request, cfg, &RasterSink::from_config(cfg))
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).map(|mut entries| entries.next().is_none()).unwrap_or(false)
}

#[test]
fn single_charge_png() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("field.png");

    let summary = run(&single_charge_answers(&output), &Config::default())?;

    assert_eq!(summary.charges, 1);
    assert_eq!(summary.observation_points, 11 * 11 - 1);
    assert_eq!(summary.output, output);

    let bytes = fs::read(&output)?;
    assert!(bytes.starts_with(PNG_MAGIC), "output is not a PNG file");
    Ok(())
}

#[test]
fn single_charge_svg_carries_title() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("field.svg");

    let summary = run(&single_charge_answers(&output), &Config::default())?;
    assert_eq!(summary.observation_points, 120);

    let svg = fs::read_to_string(&output)?;
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Electric Field Vectors"));
    Ok(())
}

#[test]
fn dipole_with_finer_grid() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("dipole.bmp");
    let answers = format!("2\n2 2 1e-9\n4 2 -1e-9\n6\n{}\n", output.display());
    let cfg = Config {
        interval: 0.5,
        dpi: 40,
        ..Config::default()
    };

    let summary = run(&answers, &cfg)?;

    // 13 x 13 grid, both charges sit on it
    assert_eq!(summary.observation_points, 13 * 13 - 2);
    assert!(summary.peak_magnitude > 0.0);
    assert!(fs::metadata(&output)?.len() > 0);
    Ok(())
}

#[test]
fn charge_outside_plot_still_renders() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("outside.png");
    let answers = format!("1\n-5 -5 -1e-9\n4\n{}\n", output.display());

    let summary = run(&answers, &Config::default())?;

    assert_eq!(summary.observation_points, 25);
    assert!(output.exists());
    Ok(())
}

#[test]
fn malformed_input_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("never.png");
    let answers = format!("1\n5 five 1e-9\n10\n{}\n", output.display());

    let result = run(&answers, &Config::default());

    assert!(
        matches!(result, Err(Error::InputFormat { ref field, .. }) if field == "position y"),
        "unexpected result: {result:?}"
    );
    assert!(is_empty_dir(dir.path()));
    Ok(())
}

#[test]
fn truncated_input_is_a_stream_error() {
    let result = run("2\n1 1 1e-9\n", &Config::default());
    assert!(matches!(result, Err(Error::StreamRead(_))));
}

#[test]
fn degenerate_bounds_are_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("flat.png");
    let answers = format!("0\n0\n{}\n", output.display());

    let result = run(&answers, &Config::default());

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    assert!(is_empty_dir(dir.path()));
    Ok(())
}

#[test]
fn overflowing_charge_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("field.png");
    let answers = format!("1\n5 5 1e300\n10\n{}\n", output.display());

    let result = run(&answers, &Config::default());

    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    assert!(is_empty_dir(dir.path()));
    Ok(())
}

#[test]
fn jpeg_output_without_font_backend() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("field.jpeg");
    let cfg = Config {
        dpi: 30,
        ..Config::default()
    };

    let summary = run(&single_charge_answers(&output), &cfg)?;

    assert_eq!(summary.observation_points, 120);
    assert!(fs::metadata(&output)?.len() > 0);
    Ok(())
}

#[test]
fn unsupported_extension_is_a_render_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("field.pdf");

    let result = run(&single_charge_answers(&output), &Config::default());

    match result {
        Err(Error::Render { path, .. }) => assert_eq!(path, output),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(is_empty_dir(dir.path()));
    Ok(())
}

#[test]
fn unwritable_path_is_a_render_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("missing/subdir/field.png");

    let result = run(&single_charge_answers(&output), &Config::default());

    assert!(matches!(result, Err(Error::Render { .. })));
    assert!(!output.exists());
    Ok(())
}
