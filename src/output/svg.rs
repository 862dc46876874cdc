//! SVG chart writer.

use super::prepare_output_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    prepare_output_path(output_path)?;

    if output_path.extension().map_or(true, |ext| ext != "svg") {
        debug!("Chart file does not have .svg extension: {}", output_path.display());
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(svg_content.as_bytes())?;
    writer.flush()?;

    info!(
        "Chart written ({:.2} KB)",
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}
