//! SVG chart output writer.
//!
//! Writes rendered charts to files, one file per registry slot.

use super::{ensure_parent_dir, validate_path};
use crate::chart::{ChartRegistry, ChartRenderer};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing SVG to: {}", output_path.display());

    validate_path(output_path)?;
    if output_path.extension().is_some_and(|ext| ext != "svg") {
        debug!("File does not have .svg extension: {}", output_path.display());
    }
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        svg_content.len(),
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Write every chart in `registry` to `<dir>/<slot>.svg`
///
/// **Public** - returns the written paths in slot order
pub fn write_charts<R: ChartRenderer>(
    registry: &ChartRegistry<R>,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, OutputError> {
    let dir = dir.as_ref();
    if dir.is_file() {
        return Err(OutputError::InvalidPath(format!(
            "Chart directory is a file: {}",
            dir.display()
        )));
    }

    let mut written = Vec::with_capacity(registry.len());
    for (slot, chart) in registry.iter() {
        let path = dir.join(format!("{}.svg", slot));
        write_svg(&chart.document, &path)?;
        written.push(path);
    }

    info!("Wrote {} charts to {}", written.len(), dir.display());
    Ok(written)
}
