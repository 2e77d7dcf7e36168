//! Tests for span-based selection: every addressing mode against manual
//! reference loops, plus the failure paths.

use rand::Rng;
use spanmat::{MatError, Matrix, RowEntry, Slicing, Span};

/// Build a random integer matrix and keep its nested reference alongside.
fn random_matrix(rows: usize, cols: usize) -> (Matrix<i64>, Vec<Vec<i64>>) {
    let mut rng = rand::thread_rng();
    let cells: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-100..100)).collect())
        .collect();
    (Matrix::from_rows(cells.clone()).unwrap(), cells)
}

/// A full-axis block selection reproduces the entire matrix.
#[test]
fn full_block_is_whole_matrix() {
    let (m, cells) = random_matrix(5, 7);
    assert_eq!(m.block(.., ..).unwrap(), cells);
}

/// Row and column spans agree with manual reference loops for a batch of
/// random stepped spans.
#[test]
fn spans_agree_with_reference_loops() {
    let (m, cells) = random_matrix(6, 9);
    let mut rng = rand::thread_rng();
    let steps = [-3, -2, -1, 1, 2, 3];
    for _ in 0..50 {
        let span = Span::new(
            Some(rng.gen_range(-12..12)),
            Some(rng.gen_range(-12..12)),
            steps[rng.gen_range(0..steps.len())],
        );
        let row = rng.gen_range(0..6);
        let expected: Vec<i64> = span.indices(9).unwrap().map(|j| cells[row][j]).collect();
        assert_eq!(m.row_span(row, span).unwrap(), expected);

        let col = rng.gen_range(0..9);
        let expected: Vec<i64> = span.indices(6).unwrap().map(|i| cells[i][col]).collect();
        assert_eq!(m.col_span(span, col).unwrap(), expected);
    }
}

/// Block selection walks rows outer, columns inner, for stepped spans in
/// both directions.
#[test]
fn block_respects_row_outer_order() {
    let (m, cells) = random_matrix(5, 5);
    let rows = Span::new(Some(4), None, -2);
    let cols = Span::new(Some(1), None, 2);
    let expected: Vec<Vec<i64>> = rows
        .indices(5)
        .unwrap()
        .map(|i| cols.indices(5).unwrap().map(|j| cells[i][j]).collect())
        .collect();
    assert_eq!(m.block(rows, cols).unwrap(), expected);
}

/// The documented subscript fixtures for the canonical 3x3 matrix.
#[test]
fn canonical_three_by_three() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    assert_eq!(m.col_span(.., 1).unwrap(), vec![2, 5, 8]);
    assert_eq!(m.row_span(1, ..).unwrap(), vec![4, 5, 6]);
    assert_eq!(m.block(0..2, 1..).unwrap(), vec![vec![2, 3], vec![5, 6]]);
    assert_eq!(m.block(Span::every(2), Span::every(2)).unwrap(), vec![vec![1, 3], vec![7, 9]]);
    assert_eq!(m.get_row(1).unwrap(), vec![4, 5, 6]);
    assert_eq!(m.get_col(1).unwrap(), vec![2, 5, 8]);
}

/// Bare outer indexing returns rows for tall matrices and bare elements for
/// a single-row matrix.
#[test]
fn outer_indexing_degenerates() {
    let (m, cells) = random_matrix(4, 3);
    for (i, row) in cells.iter().enumerate() {
        assert_eq!(m.row_entry(i).unwrap(), RowEntry::Row(row.clone()));
    }
    let flat = Matrix::from_vec(vec![9, 8, 7]);
    assert_eq!(flat.row_entry(0).unwrap(), RowEntry::Element(9));
    assert_eq!(flat.row_entry(2).unwrap(), RowEntry::Element(7));
}

/// A bare span projects the first column of the selected rows, not whole
/// rows.
#[test]
fn bare_span_projects_leading_column() {
    let (m, cells) = random_matrix(6, 4);
    let first: Vec<i64> = cells.iter().map(|row| row[0]).collect();
    assert_eq!(m.leading_col(..).unwrap(), first);
    assert_eq!(m.leading_col(2..5).unwrap(), first[2..5].to_vec());
}

/// Failure paths: zero steps and out-of-range scalar indices.
#[test]
fn selection_failure_paths() {
    let (m, _) = random_matrix(3, 3);
    assert_eq!(m.block(Span::every(0), ..).unwrap_err(), MatError::ZeroStep);
    assert_eq!(m.row_span(0, Span::every(0)).unwrap_err(), MatError::ZeroStep);
    assert_eq!(m.cell(5, 0).unwrap_err(), MatError::RowOutOfRange(5, 3));
    assert_eq!(m.cell(0, 5).unwrap_err(), MatError::ColOutOfRange(5, 3));
    assert_eq!(m.get_row(3).unwrap_err(), MatError::RowOutOfRange(3, 3));
    assert_eq!(m.get_col(3).unwrap_err(), MatError::ColOutOfRange(3, 3));
}

/// Spans clamp to the axis instead of failing, as slices do.
#[test]
fn spans_clamp_out_of_range_endpoints() {
    let (m, cells) = random_matrix(3, 3);
    assert_eq!(m.block(0..99, ..).unwrap(), cells);
    assert_eq!(m.row_span(0, -99..99).unwrap(), cells[0]);
    assert_eq!(m.col_span(5..9, 0).unwrap(), Vec::<i64>::new());
}
