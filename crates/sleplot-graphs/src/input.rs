//! Line-oriented readers for sample files and point files.
//!
//! Both formats share the same rules: trailing whitespace is trimmed, a line
//! whose first character is `#` is a comment, and any other line that does
//! not parse aborts the whole read.

use sleplot_common::{InputFormat, PlotError, Point, PointSeries, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Reads one sample per line from `path`.
pub fn read_samples(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
    parse_samples(BufReader::new(file), path)
}

/// Reads one `x,y` point per line from `path`.
///
/// `position` is the 1-based position of the file on the command line.
pub fn read_series(path: &Path, position: usize) -> Result<PointSeries> {
    let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
    parse_series(BufReader::new(file), path, position)
}

/// Parses samples from any buffered reader. `path` is only used in errors.
pub fn parse_samples<R: BufRead>(reader: R, path: &Path) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for_each_data_line(reader, path, InputFormat::Samples, |line_no, line| {
        let value = parse_field(line)
            .ok_or_else(|| PlotError::parse(path, line_no, InputFormat::Samples))?;
        samples.push(value);
        Ok(())
    })?;
    debug!(path = %path.display(), count = samples.len(), "read samples");
    Ok(samples)
}

/// Parses a point series from any buffered reader. `path` is used for the
/// series label and in errors.
pub fn parse_series<R: BufRead>(reader: R, path: &Path, position: usize) -> Result<PointSeries> {
    let mut series = PointSeries::new(path, position);
    for_each_data_line(reader, path, InputFormat::Points, |line_no, line| {
        let point = parse_point(line)
            .ok_or_else(|| PlotError::parse(path, line_no, InputFormat::Points))?;
        series.points.push(point);
        Ok(())
    })?;
    debug!(path = %path.display(), position, count = series.len(), "read series");
    Ok(series)
}

/// Whether a trimmed line is a comment.
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

fn for_each_data_line<R, F>(reader: R, path: &Path, format: InputFormat, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        // Bytes that are not UTF-8 are malformed content, not a read failure.
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => PlotError::parse(path, index + 1, format),
            _ => PlotError::io(path, e),
        })?;
        let line = line.trim_end();
        if is_comment(line) {
            continue;
        }
        f(index + 1, line)?;
    }
    Ok(())
}

fn parse_field(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn parse_point(line: &str) -> Option<Point> {
    let mut fields = line.split(',');
    let x = parse_field(fields.next()?)?;
    let y = parse_field(fields.next()?)?;
    Some(Point::new(x, y))
}
