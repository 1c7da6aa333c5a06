use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FixtureResult;
use crate::matrix::Matrix;

const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;

/// Serialize `matrix` into `out` in the fixture layout: one
/// dimension line, then one line per row of space-separated
/// decimal cells, every line newline-terminated.
///
/// Rows are streamed through a single reused line buffer, so
/// peak memory is one formatted row rather than the whole file.
pub fn write_matrix_to<W: Write>(
    matrix: &Matrix,
    out: &mut W,
) -> FixtureResult {
    writeln!(out, "{}", matrix.n())?;

    let mut line = String::with_capacity(4 * matrix.n());
    for row in matrix.rows() {
        line.clear();
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            // fmt into a String cannot fail
            let _ = write!(line, "{value}");
        }
        line.push('\n');

        out.write_all(line.as_bytes())?;
    }

    out.flush()?;

    Ok(())
}

/// Create or truncate `path` and serialize `matrix` into it.
///
/// The handle is scoped to this call and released on every
/// exit path. An error partway through the row loop leaves a
/// truncated file behind.
pub fn write_matrix(
    matrix: &Matrix,
    path: impl AsRef<Path>,
) -> FixtureResult {
    let file = File::create(path)?;
    let mut out = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);

    write_matrix_to(matrix, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use crate::generate;
    use crate::rng::FixtureRng;

    fn assert_well_formed(text: &str, n: usize) {
        assert!(text.ends_with('\n'));

        // Dimension line must agree with the data line count
        let mut lines = text.lines();
        let header: usize =
            lines.next().unwrap().parse().unwrap();
        assert_eq!(header, n);

        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), n);

        for row in rows {
            let tokens: Vec<&str> = row.split(' ').collect();
            assert_eq!(tokens.len(), n);

            for token in tokens {
                let value: u8 = token.parse().unwrap();
                assert!(value <= 99);
                // No leading zeros
                assert!(token == "0" || !token.starts_with('0'));
            }
        }
    }

    #[test]
    fn two_by_two_layout() {
        let mut rng = FixtureRng::new(0xA);
        let matrix = Matrix::sample(&mut rng, 2).unwrap();

        let mut sink = Vec::new();
        write_matrix_to(&matrix, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert_well_formed(&text, 2);
    }

    #[test]
    fn hundred_by_hundred_layout() {
        let mut rng = FixtureRng::new(0xB);
        let matrix = Matrix::sample(&mut rng, 100).unwrap();

        let mut sink = Vec::new();
        write_matrix_to(&matrix, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 101);
        assert_well_formed(&text, 100);
    }

    #[test]
    fn single_cell_file() {
        let mut rng = FixtureRng::new(0xC);
        let matrix = Matrix::sample(&mut rng, 1).unwrap();

        let mut sink = Vec::new();
        write_matrix_to(&matrix, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_well_formed(&text, 1);
    }

    #[test]
    fn rows_serialize_in_generation_order() {
        let mut rng = FixtureRng::new(0xD);
        let matrix = Matrix::sample(&mut rng, 3).unwrap();

        let mut sink = Vec::new();
        write_matrix_to(&matrix, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        for (line, row) in text.lines().skip(1).zip(matrix.rows()) {
            let cells: Vec<u8> = line
                .split(' ')
                .map(|token| token.parse().unwrap())
                .collect();
            assert_eq!(cells, row);
        }
    }

    #[test]
    fn regeneration_keeps_structure() {
        // Different seeds, same dimension
        let mut a = FixtureRng::new(1);
        let mut b = FixtureRng::new(2);

        for mut rng in [&mut a, &mut b] {
            let matrix = Matrix::sample(&mut rng, 5).unwrap();
            let mut sink = Vec::new();
            write_matrix_to(&matrix, &mut sink).unwrap();
            assert_well_formed(&String::from_utf8(sink).unwrap(), 5);
        }
    }

    #[test]
    fn overwrites_existing_file() {
        let path = std::env::temp_dir()
            .join("matrix_fixture_overwrite_test.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut rng = FixtureRng::new(0xE);
        generate(&mut rng, 4, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_well_formed(&text, 4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_file_access_error() {
        let mut rng = FixtureRng::new(0xF);

        let err = generate(
            &mut rng,
            2,
            Path::new("/nonexistent-fixture-dir/m.txt"),
        )
        .unwrap_err();

        assert!(matches!(err, FixtureError::FileAccess(_)));
    }
}
