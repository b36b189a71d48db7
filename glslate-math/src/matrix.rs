use std::{cmp::min, fmt};

use crate::{error::MathError, vector::Vector};

/// Selects whether an index-based matrix operation targets a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// A rows x cols dense grid of `f32`, stored row-major in one flat buffer.
///
/// Immutable value type: every arithmetic operation returns a new `Matrix`.
/// The only in-place mutation is [`Matrix::set`] on an owned instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Builds a matrix from a rectangular 2D source.
    ///
    /// Fails with [`MathError::InvalidShape`] when the source is empty or
    /// rows have unequal lengths.
    pub fn from_rows(source: &[Vec<f32>]) -> Result<Self, MathError> {
        if source.is_empty() || source[0].is_empty() {
            return Err(MathError::empty_source());
        }

        let rows = source.len();
        let cols = source[0].len();

        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in source.iter().enumerate() {
            if row.len() != cols {
                return Err(MathError::jagged_source(i, cols, row.len()));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The backing store as a flat row-major float buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Element at `(row, col)`. Bounds are a caller precondition; the
    /// index maps to `row * cols + col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// Writes `value` at `(row, col)` in this instance's own buffer.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Element-wise scalar multiple.
    pub fn scale(&self, scalar: f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }

    /// Standard matrix product.
    ///
    /// Fails with [`MathError::DimensionMismatch`] when `self.cols !=
    /// other.rows`. Accumulates block-wise (block size = min of 32 and the
    /// three loop extents) for cache locality on larger operands; the result
    /// is numerically identical to the naive triple loop within f32
    /// rounding. O(rows * cols * inner).
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != other.rows {
            return Err(MathError::matrix_shapes(
                "multiplication",
                self.size(),
                other.size(),
            ));
        }

        let (m, inner, p) = (self.rows, self.cols, other.cols);
        let block = min(32, min(m, min(p, inner)));

        let mut data = vec![0.0f32; m * p];

        for i0 in (0..m).step_by(block) {
            let i_limit = min(i0 + block, m);
            for j0 in (0..p).step_by(block) {
                let j_limit = min(j0 + block, p);
                for k0 in (0..inner).step_by(block) {
                    let k_limit = min(k0 + block, inner);

                    for i in i0..i_limit {
                        for j in j0..j_limit {
                            let mut sum = data[i * p + j];
                            for k in k0..k_limit {
                                sum += self.data[i * inner + k] * other.data[k * p + j];
                            }
                            data[i * p + j] = sum;
                        }
                    }
                }
            }
        }

        Ok(Matrix { rows: m, cols: p, data })
    }

    /// Copies out the row or column at `index` as a fresh flat buffer.
    pub fn extract(&self, index: usize, axis: Axis) -> Result<Vec<f32>, MathError> {
        match axis {
            Axis::Row => {
                if index >= self.rows {
                    return Err(MathError::row_out_of_range(index, self.rows));
                }
                Ok(self.data[index * self.cols..(index + 1) * self.cols].to_vec())
            },
            Axis::Col => {
                if index >= self.cols {
                    return Err(MathError::col_out_of_range(index, self.cols));
                }
                Ok((0..self.rows).map(|i| self.data[i * self.cols + index]).collect())
            },
        }
    }

    /// Returns a new matrix with the row or column at `index` replaced.
    ///
    /// `values` must match the target line's length exactly.
    pub fn replace(&self, index: usize, values: &[f32], axis: Axis) -> Result<Matrix, MathError> {
        let mut data = self.data.clone();

        match axis {
            Axis::Row => {
                if index >= self.rows {
                    return Err(MathError::row_out_of_range(index, self.rows));
                }
                if values.len() != self.cols {
                    return Err(MathError::replacement_length(self.cols, values.len()));
                }
                data[index * self.cols..(index + 1) * self.cols].copy_from_slice(values);
            },
            Axis::Col => {
                if index >= self.cols {
                    return Err(MathError::col_out_of_range(index, self.cols));
                }
                if values.len() != self.rows {
                    return Err(MathError::replacement_length(self.rows, values.len()));
                }
                for (i, &value) in values.iter().enumerate() {
                    data[i * self.cols + index] = value;
                }
            },
        }

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Flattens a rectangular 2D grid into one row-major float buffer.
    ///
    /// An empty source yields an empty buffer; jagged rows fail with
    /// [`MathError::InvalidShape`].
    pub fn flatten_rows(source: &[Vec<f32>]) -> Result<Vec<f32>, MathError> {
        if source.is_empty() {
            return Ok(Vec::new());
        }

        let cols = source[0].len();
        let mut flat = Vec::with_capacity(source.len() * cols);
        for (i, row) in source.iter().enumerate() {
            if row.len() != cols {
                return Err(MathError::jagged_source(i, cols, row.len()));
            }
            flat.extend_from_slice(row);
        }

        Ok(flat)
    }

    /// Flattens an ordered sequence of same-dimension vectors into one
    /// row-major float buffer, one vector per row.
    ///
    /// Used to prepare geometry for GPU upload. An empty sequence yields an
    /// empty buffer; mixed dimensions fail with
    /// [`MathError::DimensionMismatch`].
    pub fn flatten_vectors(vectors: &[Vector]) -> Result<Vec<f32>, MathError> {
        let Some(first) = vectors.first() else {
            return Ok(Vec::new());
        };

        let dimension = first.dimension();
        let mut flat = Vec::with_capacity(vectors.len() * dimension);
        for v in vectors {
            if v.dimension() != dimension {
                return Err(MathError::vector_dimensions(
                    "flattening",
                    dimension,
                    v.dimension(),
                ));
            }
            flat.extend_from_slice(v.as_slice());
        }

        Ok(flat)
    }

    fn zip_with(
        &self,
        other: &Matrix,
        operation: &str,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Matrix, MathError> {
        if self.size() != other.size() {
            return Err(MathError::matrix_shapes(operation, self.size(), other.size()));
        }

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{}{}", self.rows, self.cols, if self.is_square() { " (square)" } else { "" })?;

        let cells: Vec<String> = self.data.iter().map(|v| format!("{v:.2}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| format!("{:>width$}", cells[row * self.cols + col]))
                .collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn matrix(rows: &[&[f32]]) -> Matrix {
        let source: Vec<Vec<f32>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&source).unwrap()
    }

    /// Reference triple-loop product the blocked version must agree with.
    fn naive_multiply(a: &Matrix, b: &Matrix) -> Matrix {
        let (m, inner, p) = (a.rows(), a.cols(), b.cols());
        let mut source = vec![vec![0.0f32; p]; m];
        for (i, row) in source.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..inner).map(|k| a.get(i, k) * b.get(k, j)).sum();
            }
        }
        Matrix::from_rows(&source).unwrap()
    }

    /// Deterministic but irregular fill for agreement tests.
    fn filled(rows: usize, cols: usize) -> Matrix {
        let source: Vec<Vec<f32>> = (0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| ((i * 31 + j * 7) % 13) as f32 - 6.0 + (j as f32) * 0.25)
                    .collect()
            })
            .collect();
        Matrix::from_rows(&source).unwrap()
    }

    #[test]
    fn test_construction_and_accessors() {
        let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

        assert_eq!(m.size(), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!(matches!(
            Matrix::from_rows(&[]),
            Err(MathError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(&[vec![]]),
            Err(MathError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_jagged_source_rejected() {
        let jagged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::from_rows(&jagged),
            Err(MathError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_set_mutates_own_buffer() {
        let mut m = matrix(&[&[0.0, 0.0], &[0.0, 0.0]]);
        m.set(1, 0, 7.5);

        assert_eq!(m.get(1, 0), 7.5);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 7.5, 0.0]);
    }

    #[test]
    fn test_add_subtract() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = matrix(&[&[10.0, 20.0], &[30.0, 40.0]]);

        assert_eq!(a.add(&b).unwrap(), matrix(&[&[11.0, 22.0], &[33.0, 44.0]]));
        assert_eq!(b.subtract(&a).unwrap(), matrix(&[&[9.0, 18.0], &[27.0, 36.0]]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = matrix(&[&[1.0, 2.0]]);
        let b = matrix(&[&[1.0], &[2.0]]);

        assert!(matches!(a.add(&b), Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn test_scale() {
        let m = matrix(&[&[1.0, -2.0], &[0.5, 4.0]]);
        assert_eq!(m.scale(2.0), matrix(&[&[2.0, -4.0], &[1.0, 8.0]]));
    }

    #[test]
    fn test_multiply_2x2_scenario() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product, matrix(&[&[19.0, 22.0], &[43.0, 50.0]]));
    }

    #[test]
    fn test_multiply_result_shape() {
        let a = filled(4, 7);
        let b = filled(7, 3);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.size(), (4, 3));
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        for (a, b) in [
            (filled(2, 3), filled(4, 2)),
            (filled(1, 5), filled(4, 1)),
            (filled(3, 3), filled(2, 3)),
        ] {
            assert!(matches!(
                a.multiply(&b),
                Err(MathError::DimensionMismatch(_))
            ));
        }
    }

    #[test]
    fn test_blocked_multiply_matches_naive() {
        // Extents straddling the block size exercise the partial-block paths.
        for (m, inner, p) in [(1, 1, 1), (2, 2, 2), (7, 13, 5), (33, 40, 34), (64, 32, 48)] {
            let a = filled(m, inner);
            let b = filled(inner, p);

            let blocked = a.multiply(&b).unwrap();
            let reference = naive_multiply(&a, &b);

            for i in 0..m {
                for j in 0..p {
                    assert!(
                        (blocked.get(i, j) - reference.get(i, j)).abs() < EPSILON,
                        "({m}x{inner})*({inner}x{p}) diverges at ({i},{j})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_extract_row_and_col() {
        let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

        assert_eq!(m.extract(1, Axis::Row).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.extract(2, Axis::Col).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_extract_out_of_range() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);

        assert!(matches!(m.extract(2, Axis::Row), Err(MathError::IndexOutOfRange(_))));
        assert!(matches!(m.extract(5, Axis::Col), Err(MathError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_replace_then_extract_round_trip() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);

        let row = [9.0, 10.0];
        let with_row = m.replace(1, &row, Axis::Row).unwrap();
        assert_eq!(with_row.extract(1, Axis::Row).unwrap(), row);

        let col = [-1.0, -2.0, -3.0];
        let with_col = m.replace(0, &col, Axis::Col).unwrap();
        assert_eq!(with_col.extract(0, Axis::Col).unwrap(), col);

        // the source matrix is untouched
        assert_eq!(m.extract(1, Axis::Row).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_replace_bad_index_or_length() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);

        assert!(matches!(
            m.replace(3, &[0.0, 0.0], Axis::Row),
            Err(MathError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            m.replace(0, &[0.0, 0.0, 0.0], Axis::Row),
            Err(MathError::LengthMismatch(_))
        ));
        assert!(matches!(
            m.replace(0, &[0.0], Axis::Col),
            Err(MathError::LengthMismatch(_))
        ));
    }

    #[test]
    fn test_flatten_rows() {
        let grid = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(Matrix::flatten_rows(&grid).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);

        assert!(Matrix::flatten_rows(&[]).unwrap().is_empty());

        let jagged = vec![vec![1.0], vec![2.0, 3.0]];
        assert!(matches!(
            Matrix::flatten_rows(&jagged),
            Err(MathError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_flatten_vectors() {
        let vectors = vec![Vector::new([1.0, 2.0]), Vector::new([3.0, 4.0])];
        assert_eq!(
            Matrix::flatten_vectors(&vectors).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0]
        );

        assert!(Matrix::flatten_vectors(&[]).unwrap().is_empty());

        let mixed = vec![Vector::new([1.0, 2.0]), Vector::new([3.0])];
        assert!(matches!(
            Matrix::flatten_vectors(&mixed),
            Err(MathError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_flatten_vectors_matches_matrix_storage() {
        let vectors = vec![
            Vector::new([1.0, 2.0, 3.0]),
            Vector::new([4.0, 5.0, 6.0]),
        ];
        let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

        assert_eq!(Matrix::flatten_vectors(&vectors).unwrap(), m.as_slice());
    }

    #[test]
    fn test_display_contains_dimensions() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let rendered = m.to_string();

        assert!(rendered.contains("2x2"));
        assert!(rendered.contains("square"));
    }
}
