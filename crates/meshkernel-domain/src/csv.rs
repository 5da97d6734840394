//! Parses the boundary CSV format: one vertex per line, columns
//! `x, y, marker[, size_hint, range_hint]`. Grounded on
//! `CSVBoundaryReader` (original_source/src/algorithm/Boundary.h).

use geo::Coord;

use crate::error::DomainError;

/// Parsed CSV rows, aligned by index: `coords[i]` carries marker
/// `markers[i]` and hint `props[i]`.
pub struct CsvBoundary {
    pub coords: Vec<Coord<f64>>,
    pub markers: Vec<i32>,
    pub props: Vec<(f64, f64)>,
}

/// Parse `data` in the CSV boundary format. Missing `size_hint`/
/// `range_hint` columns default to `(-1.0, -1.0)` (no local hint).
///
/// Blank lines are skipped. Fails with [`DomainError::InvalidCsv`] on a
/// line with fewer than 2 fields or a field that doesn't parse as a
/// number.
pub fn parse_csv(data: &str) -> Result<CsvBoundary, DomainError> {
    let mut coords = Vec::new();
    let mut markers = Vec::new();
    let mut props = Vec::new();

    for (i, line) in data.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(DomainError::InvalidCsv { line: line_no, reason: "missing input data".into() });
        }

        let parse_f64 = |s: &str| -> Result<f64, DomainError> {
            s.parse::<f64>().map_err(|_| DomainError::InvalidCsv {
                line: line_no,
                reason: format!("invalid number {s:?}"),
            })
        };
        let parse_i32 = |s: &str| -> Result<i32, DomainError> {
            s.parse::<i32>().map_err(|_| DomainError::InvalidCsv {
                line: line_no,
                reason: format!("invalid integer {s:?}"),
            })
        };

        let x = parse_f64(fields[0])?;
        let y = parse_f64(fields[1])?;
        let marker = if fields.len() > 2 { parse_i32(fields[2])? } else { -1 };
        if marker < 0 {
            return Err(DomainError::InvalidCsv { line: line_no, reason: "missing boundary marker".into() });
        }
        let size_hint = if fields.len() > 3 { parse_f64(fields[3])? } else { -1.0 };
        let range_hint = if fields.len() > 4 { parse_f64(fields[4])? } else { -1.0 };

        coords.push(Coord { x, y });
        markers.push(marker);
        props.push((size_hint, range_hint));
    }

    Ok(CsvBoundary { coords, markers, props })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_rows() {
        let data = "0,0,1\n1,0,1\n1,1,1\n";
        let b = parse_csv(data).unwrap();
        assert_eq!(b.coords.len(), 3);
        assert_eq!(b.markers, vec![1, 1, 1]);
        assert_eq!(b.props[0], (-1.0, -1.0));
    }

    #[test]
    fn parses_optional_hint_columns() {
        let data = "0,0,1,0.1,0.5\n";
        let b = parse_csv(data).unwrap();
        assert_eq!(b.props[0], (0.1, 0.5));
    }

    #[test]
    fn skips_blank_lines() {
        let data = "0,0,1\n\n1,0,1\n";
        let b = parse_csv(data).unwrap();
        assert_eq!(b.coords.len(), 2);
    }

    #[test]
    fn rejects_negative_marker() {
        let data = "0,0,-1\n";
        assert!(matches!(parse_csv(data), Err(DomainError::InvalidCsv { line: 1, .. })));
    }

    #[test]
    fn rejects_unparseable_number() {
        let data = "abc,0,1\n";
        assert!(matches!(parse_csv(data), Err(DomainError::InvalidCsv { line: 1, .. })));
    }

    #[test]
    fn rejects_too_few_fields() {
        let data = "0\n";
        assert!(matches!(parse_csv(data), Err(DomainError::InvalidCsv { line: 1, .. })));
    }
}
