use crate::core::io::traits::MoleculeFile;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const AXES: [char; 3] = ['x', 'y', 'z'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XyzOptions {
    /// Treat the first two lines as the standard XYZ header (atom count and
    /// comment) and check the declared count against the parsed atoms.
    pub standard_header: bool,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: XyzParseErrorKind,
    },
    #[error("Missing XYZ header: expected an atom count on the first line")]
    MissingHeader,
    #[error("Header declares {declared} atoms but {parsed} were read")]
    CountMismatch { declared: usize, parsed: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XyzParseErrorKind {
    #[error("Invalid float for {axis} coordinate (value: '{value}')")]
    InvalidFloat { axis: char, value: String },
    #[error("Invalid atom count in header (value: '{value}')")]
    InvalidCount { value: String },
}

/// Plain XYZ coordinates: one `<element> <x> <y> <z>` record per line.
///
/// Lines with fewer than four whitespace-separated tokens (blank lines, bare
/// counts, short comments) are skipped. Tokens after the fourth are ignored.
/// A coordinate that is not a real number aborts the read.
pub struct XyzFile;

impl XyzFile {
    fn parse_record(line: &str, line_num: usize) -> Result<Option<Atom>, XyzError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Ok(None);
        }

        let mut coords = [0.0f64; 3];
        for (i, (value, axis)) in parts[1..4].iter().zip(AXES).enumerate() {
            coords[i] = value.parse().map_err(|_| XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::InvalidFloat {
                    axis,
                    value: (*value).into(),
                },
            })?;
        }

        Ok(Some(Atom::new(
            parts[0],
            Point3::new(coords[0], coords[1], coords[2]),
        )))
    }

    fn parse_count(line: &str, line_num: usize) -> Result<usize, XyzError> {
        let value = line.trim();
        value.parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidCount {
                value: value.into(),
            },
        })
    }
}

impl MoleculeFile for XyzFile {
    type Options = XyzOptions;
    type Error = XyzError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<Atom>, Self::Error> {
        let mut atoms = Vec::new();
        let mut declared_count = None;
        let mut skipped = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if options.standard_header && line_num <= 2 {
                if line_num == 1 {
                    declared_count = Some(Self::parse_count(&line, line_num)?);
                }
                continue;
            }

            match Self::parse_record(&line, line_num)? {
                Some(atom) => atoms.push(atom),
                None => {
                    if !line.trim().is_empty() {
                        trace!("Skipping short record on line {}: {:?}", line_num, line);
                    }
                    skipped += 1;
                }
            }
        }

        if options.standard_header {
            let declared = declared_count.ok_or(XyzError::MissingHeader)?;
            if declared != atoms.len() {
                return Err(XyzError::CountMismatch {
                    declared,
                    parsed: atoms.len(),
                });
            }
        }

        debug!(
            "Read {} atoms from XYZ input ({} lines skipped).",
            atoms.len(),
            skipped
        );
        Ok(atoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<Atom>, XyzError> {
        XyzFile::read_from(&mut Cursor::new(input), &XyzOptions::default())
    }

    fn read_with_header(input: &str) -> Result<Vec<Atom>, XyzError> {
        XyzFile::read_from(
            &mut Cursor::new(input),
            &XyzOptions {
                standard_header: true,
            },
        )
    }

    #[test]
    fn reads_records_in_input_order() {
        let atoms = read(
            "C         -0.95200        0.65960       -0.65320\n\
             H         -1.72680        1.19660       -1.18500\n",
        )
        .unwrap();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].element, "C");
        assert_eq!(atoms[0].position, Point3::new(-0.952, 0.6596, -0.6532));
        assert_eq!(atoms[1].element, "H");
        assert_eq!(atoms[1].position, Point3::new(-1.7268, 1.1966, -1.185));
    }

    #[test]
    fn short_and_blank_lines_are_skipped_silently() {
        let atoms = read("16\n\nbenzene\nC 0 0\n  \nO 1.0 2.0 3.0\n").unwrap();
        assert_eq!(atoms, vec![Atom::new("O", Point3::new(1.0, 2.0, 3.0))]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let atoms = read("N 1 2 3 0.25 extra\n").unwrap();
        assert_eq!(atoms, vec![Atom::new("N", Point3::new(1.0, 2.0, 3.0))]);
    }

    #[test]
    fn non_numeric_coordinate_is_fatal_with_line_number() {
        let err = read("C 0 0 0\nH 1.0 abc 0.0\n").unwrap_err();
        match err {
            XyzError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(
                    kind,
                    XyzParseErrorKind::InvalidFloat {
                        axis: 'y',
                        value: "abc".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn four_token_comment_is_a_parse_error_without_header_mode() {
        let result = read("2\nwater molecule from file\nO 0 0 0\nH 0.96 0 0\n");
        assert!(matches!(result, Err(XyzError::Parse { line: 2, .. })));
    }

    #[test]
    fn empty_input_yields_no_atoms() {
        assert!(read("").unwrap().is_empty());
        assert!(read("\n\n").unwrap().is_empty());
    }

    #[test]
    fn standard_header_is_skipped_and_count_checked() {
        let atoms =
            read_with_header("2\nwater molecule from file\nO 0 0 0\nH 0.96 0 0\n").unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].element, "H");
    }

    #[test]
    fn standard_header_count_mismatch_is_reported() {
        let result = read_with_header("3\ncomment\nO 0 0 0\nH 0.96 0 0\n");
        assert!(matches!(
            result,
            Err(XyzError::CountMismatch {
                declared: 3,
                parsed: 2
            })
        ));
    }

    #[test]
    fn standard_header_requires_numeric_count() {
        let result = read_with_header("O 0 0 0\ncomment\n");
        assert!(matches!(
            result,
            Err(XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidCount { .. }
            })
        ));
        assert!(matches!(read_with_header(""), Err(XyzError::MissingHeader)));
    }

    #[test]
    fn read_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mol.xyz");
        std::fs::write(&path, "P 0 0 0\nO 1.7 0 0\n").unwrap();

        let atoms = XyzFile::read_from_path(&path, &XyzOptions::default()).unwrap();
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = XyzFile::read_from_path(dir.path().join("absent.xyz"), &XyzOptions::default());
        assert!(matches!(result, Err(XyzError::Io(_))));
    }
}
