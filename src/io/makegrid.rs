//! MAKEGRID coil file format (read and write).
//!
//! MAKEGRID files carry a three-line free-text header followed by
//! whitespace-delimited point records. The format has no explicit coil
//! delimiter: a record with more than four tokens (`x y z I group name`)
//! both contributes its point and terminates the coil in progress, a record
//! with exactly four tokens (`x y z I`) contributes a point and updates the
//! coil's pending current, and a record with fewer than four tokens is the
//! trailer (e.g. `end`) and stops the scan. External field-line tools
//! depend on this token-count heuristic exactly as it is, fragile as it is:
//! any interior record carrying five or more tokens would be misread as a
//! coil terminator.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::coilset::CoilSet;
use crate::errors::{CoilError, Result};
use crate::filament::Filament;
use crate::math::{Scalar, R3};

/// Reads a MAKEGRID coil file.
///
/// # Errors
///
/// `FileNotFound` if `path` does not exist (checked before any parsing),
/// `MalformedRecord` for unparseable numeric fields, `Io` for underlying
/// read failures.
pub fn read_makegrid<P: AsRef<Path>>(path: P) -> Result<CoilSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CoilError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_makegrid_from(BufReader::new(file))
}

/// Reads MAKEGRID content from any buffered reader.
///
/// The first three lines are captured verbatim as the coil set's header;
/// the remaining lines are scanned with the token-count record heuristic
/// described in the module docs. Points accumulated after the last
/// coil-terminating record are discarded, as is the trailer.
///
/// # Errors
///
/// `MalformedRecord` for unparseable numeric fields, `Io` for underlying
/// read failures.
pub fn read_makegrid_from<R: BufRead>(mut reader: R) -> Result<CoilSet> {
    let mut header = String::new();
    for _ in 0..3 {
        reader.read_line(&mut header)?;
    }

    let mut filaments = Vec::new();
    let mut points: Vec<R3> = Vec::new();
    let mut pending_current = 0.0;
    let mut line = String::new();
    let mut line_no = 3usize;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            // trailer record, not an error
            break;
        }
        let x = parse_scalar(tokens[0], "x coordinate", line_no)?;
        let y = parse_scalar(tokens[1], "y coordinate", line_no)?;
        let z = parse_scalar(tokens[2], "z coordinate", line_no)?;
        points.push(R3::new(x, y, z));
        if tokens.len() == 4 {
            pending_current = parse_scalar(tokens[3], "current", line_no)?;
        } else {
            // coil-terminal record: second-to-last token is the group id,
            // last is the name; its own fourth token is ignored
            let group_token = tokens[tokens.len() - 2];
            let group = group_token.parse::<i32>().map_err(|_| CoilError::MalformedRecord {
                line: line_no,
                reason: format!("invalid group id `{group_token}`"),
            })?;
            let name = tokens[tokens.len() - 1].to_string();
            filaments.push(Filament::new(
                std::mem::take(&mut points),
                pending_current,
                name,
                group,
            ));
        }
    }
    // `points` may still hold an unterminated accumulation; it is dropped

    debug!(coils = filaments.len(), "parsed MAKEGRID coil file");
    Ok(CoilSet::with_header(filaments, header))
}

/// Writes a coil set as a MAKEGRID file.
///
/// # Errors
///
/// `InvalidGeometry` if the set is empty or any filament has fewer than two
/// points, `Io` for underlying write failures.
pub fn write_makegrid<P: AsRef<Path>>(coils: &CoilSet, path: P, nfp: i32) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_makegrid_to(coils, &mut writer, nfp)?;
    writer.flush()?;
    Ok(())
}

/// Writes MAKEGRID content to any writer.
///
/// Each filament's first N-1 points are written as `x y z I` records in
/// `%15.7E` fixed format; the terminal record re-emits the first point with
/// a zero current followed by the group id and name, which is exactly the
/// token pattern the reader keys on to detect a coil boundary. `nfp` is the
/// toroidal periodicity written into the `periods` line.
///
/// # Errors
///
/// `InvalidGeometry` if the set is empty or any filament has fewer than two
/// points, `Io` for underlying write failures.
pub fn write_makegrid_to<W: Write>(coils: &CoilSet, mut writer: W, nfp: i32) -> Result<()> {
    if coils.is_empty() {
        return Err(CoilError::InvalidGeometry(
            "cannot write an empty coil set".into(),
        ));
    }
    writeln!(writer, "periods {nfp:>3} ")?;
    writeln!(writer, "begin filament ")?;
    writeln!(writer, "mirror NIL ")?;
    for filament in coils {
        let n = filament.len();
        if n < 2 {
            return Err(CoilError::InvalidGeometry(format!(
                "filament `{}` needs at least two points to serialize, got {n}",
                filament.name
            )));
        }
        for p in &filament.points[..n - 1] {
            writeln!(
                writer,
                "{} {} {} {}",
                format_e15(p.x),
                format_e15(p.y),
                format_e15(p.z),
                format_e15(filament.current)
            )?;
        }
        let first = filament.points[0];
        writeln!(
            writer,
            "{} {} {} {} {} {:<10} ",
            format_e15(first.x),
            format_e15(first.y),
            format_e15(first.z),
            format_e15(0.0),
            filament.group,
            filament.name
        )?;
    }
    writeln!(writer, "end ")?;
    debug!(coils = coils.len(), "wrote MAKEGRID coil file");
    Ok(())
}

fn parse_scalar(token: &str, what: &str, line: usize) -> Result<Scalar> {
    token.parse::<Scalar>().map_err(|_| CoilError::MalformedRecord {
        line,
        reason: format!("invalid {what} `{token}`"),
    })
}

/// Formats a float in Fortran/C `%15.7E` style: a 7-decimal mantissa and a
/// signed two-digit exponent, right-aligned in 15 columns.
fn format_e15(value: Scalar) -> String {
    if !value.is_finite() {
        return format!("{value:>15}");
    }
    let raw = format!("{value:.7E}");
    let (mantissa, exponent) = match raw.split_once('E') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (raw.as_str(), 0),
    };
    format!("{:>15}", format!("{mantissa}E{exponent:+03}"))
}
