//! Instance file loading.
//!
//! # Format
//!
//! - Line 1: integer node count `N`.
//! - Line 2: header, ignored.
//! - Remaining lines: whitespace-separated triples `i j d` with
//!   `i, j ∈ [1, N]` and `d` a non-negative real. Each triple sets both
//!   `d(i, j)` and `d(j, i)`. Missing pairs default to zero. Blank lines
//!   and lines with fewer than three fields are skipped silently.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::models::TspInstance;

/// Errors raised while loading an instance file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("empty instance file")]
    EmptyFile,
    #[error("invalid node count {value:?} on line 1")]
    InvalidNodeCount { value: String },
    #[error("node count must be at least 2, got {0}")]
    NodeCountTooSmall(usize),
    #[error("line {line}: invalid field {value:?}")]
    InvalidField { line: usize, value: String },
    #[error("line {line}: node {id} out of range 1..={max}")]
    NodeOutOfRange { line: usize, id: usize, max: usize },
    #[error("line {line}: negative distance {value}")]
    NegativeDistance { line: usize, value: f64 },
}

/// Loads a TSP instance from a file.
///
/// # Examples
///
/// ```no_run
/// use tsp_anytime::io::load_instance;
///
/// let instance = load_instance("instances/random_1000.txt")?;
/// # Ok::<(), tsp_anytime::io::LoadError>(())
/// ```
pub fn load_instance(path: impl AsRef<Path>) -> Result<TspInstance, LoadError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

/// Reads a TSP instance from any buffered reader.
pub fn read_instance<R: BufRead>(reader: R) -> Result<TspInstance, LoadError> {
    let mut lines = reader.lines();

    let first = lines.next().ok_or(LoadError::EmptyFile)??;
    let n: usize = first
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidNodeCount {
            value: first.trim().to_string(),
        })?;
    if n < 2 {
        return Err(LoadError::NodeCountTooSmall(n));
    }

    // Header line, ignored. A file that ends here is an all-zero instance.
    let _ = lines.next().transpose()?;

    let mut instance = TspInstance::new(n);
    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line_no = idx + 3;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }

        let i = parse_node(fields[0], line_no)?;
        let j = parse_node(fields[1], line_no)?;
        let d: f64 = fields[2].parse().map_err(|_| LoadError::InvalidField {
            line: line_no,
            value: fields[2].to_string(),
        })?;

        for id in [i, j] {
            if id < 1 || id > n {
                return Err(LoadError::NodeOutOfRange {
                    line: line_no,
                    id,
                    max: n,
                });
            }
        }
        if d < 0.0 {
            return Err(LoadError::NegativeDistance {
                line: line_no,
                value: d,
            });
        }

        instance.set_distance(i, j, d);
    }

    Ok(instance)
}

fn parse_node(field: &str, line_no: usize) -> Result<usize, LoadError> {
    field.parse().map_err(|_| LoadError::InvalidField {
        line: line_no,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TspProblem;

    #[test]
    fn test_reads_symmetric_triples() {
        let text = "3\nheader line ignored\n1 2 4.5\n2 3 2.0\n1 3 6.0\n";
        let instance = read_instance(text.as_bytes()).expect("valid instance");
        assert_eq!(instance.node_count(), 3);
        assert_eq!(instance.distance(1, 2), 4.5);
        assert_eq!(instance.distance(2, 1), 4.5);
        assert_eq!(instance.distance(3, 2), 2.0);
    }

    #[test]
    fn test_missing_pairs_default_to_zero() {
        let text = "3\nheader\n1 2 4.5\n";
        let instance = read_instance(text.as_bytes()).expect("valid instance");
        assert_eq!(instance.distance(1, 3), 0.0);
    }

    #[test]
    fn test_skips_blank_and_short_lines() {
        let text = "2\nheader\n\n1 2\n   \n1 2 7.0\n";
        let instance = read_instance(text.as_bytes()).expect("valid instance");
        assert_eq!(instance.distance(1, 2), 7.0);
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            read_instance("".as_bytes()),
            Err(LoadError::EmptyFile)
        ));
    }

    #[test]
    fn test_bad_node_count() {
        assert!(matches!(
            read_instance("abc\nheader\n".as_bytes()),
            Err(LoadError::InvalidNodeCount { .. })
        ));
        assert!(matches!(
            read_instance("1\nheader\n".as_bytes()),
            Err(LoadError::NodeCountTooSmall(1))
        ));
    }

    #[test]
    fn test_bad_distance_field() {
        assert!(matches!(
            read_instance("2\nheader\n1 2 oops\n".as_bytes()),
            Err(LoadError::InvalidField { line: 3, .. })
        ));
    }

    #[test]
    fn test_node_out_of_range() {
        assert!(matches!(
            read_instance("2\nheader\n1 5 3.0\n".as_bytes()),
            Err(LoadError::NodeOutOfRange { id: 5, max: 2, .. })
        ));
    }

    #[test]
    fn test_negative_distance() {
        assert!(matches!(
            read_instance("2\nheader\n1 2 -1.0\n".as_bytes()),
            Err(LoadError::NegativeDistance { .. })
        ));
    }

    #[test]
    fn test_header_only_file_is_all_zero() {
        let instance = read_instance("2\n".as_bytes()).expect("valid instance");
        assert_eq!(instance.node_count(), 2);
        assert_eq!(instance.distance(1, 2), 0.0);
    }
}
