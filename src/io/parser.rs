//! Load file parser.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Load, Point};

/// Parses loads from text.
///
/// The first line is a header and is skipped, as are blank lines. Every
/// other line must read `<loadNumber> (<x1>,<y1>) (<x2>,<y2>)`. Loads are
/// built against `origin`.
///
/// # Errors
///
/// [`Error::Parse`] with the 1-based line number of the first malformed line.
///
/// # Examples
///
/// ```
/// use shift_routing::io::parse_loads;
/// use shift_routing::models::Point;
///
/// let text = "loadNumber pickup dropoff\n1 (-9.1,10.5) (-9.1,20.5)\n";
/// let loads = parse_loads(text, Point::ORIGIN).unwrap();
/// assert_eq!(loads[0].load_number(), 1);
/// assert_eq!(loads[0].dropoff(), Point::new(-9.1, 20.5));
/// ```
pub fn parse_loads(input: &str, origin: Point) -> Result<Vec<Load>> {
    let mut loads = Vec::new();
    for (idx, line) in input.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let load = parse_line(line, origin).map_err(|message| Error::Parse {
            line: idx + 1,
            message,
        })?;
        loads.push(load);
    }
    Ok(loads)
}

/// Reads and parses a load file.
pub fn read_loads(path: impl AsRef<Path>, origin: Point) -> Result<Vec<Load>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loads = parse_loads(&text, origin)?;
    debug!(path = %path.display(), loads = loads.len(), "read load file");
    Ok(loads)
}

fn parse_line(line: &str, origin: Point) -> std::result::Result<Load, String> {
    let (number, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected '<loadNumber> (<x>,<y>) (<x>,<y>)', got '{line}'"))?;
    let load_number: u32 = number
        .parse()
        .map_err(|_| format!("invalid load number '{number}'"))?;

    let (pickup, rest) = parse_point(rest)?;
    let (dropoff, rest) = parse_point(rest)?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected trailing text '{}'", rest.trim()));
    }

    Ok(Load::with_origin(load_number, pickup, dropoff, origin))
}

/// Parses a leading `(x,y)` and returns it with the unparsed remainder.
fn parse_point(s: &str) -> std::result::Result<(Point, &str), String> {
    let s = s.trim_start();
    let inner = s
        .strip_prefix('(')
        .ok_or_else(|| format!("expected '(' at '{s}'"))?;
    let close = inner
        .find(')')
        .ok_or_else(|| format!("missing ')' in '{s}'"))?;
    let (coords, rest) = (&inner[..close], &inner[close + 1..]);

    let (x, y) = coords
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{coords}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid coordinate '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid coordinate '{}'", y.trim()))?;

    Ok((Point::new(x, y), rest))
}
