use spanmat::{Matrix, Slicing, Span};

fn main() -> Result<(), spanmat::MatError> {
    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    println!("{m}");

    println!("column 1      = {:?}", m.col_span(.., 1)?);
    println!("row 1         = {:?}", m.row_span(1, ..)?);
    println!("rows 0..2, 1.. = {:?}", m.block(0..2, 1..)?);
    println!("every 2nd     = {:?}", m.block(Span::every(2), Span::every(2))?);
    println!("reversed rows = {:?}", m.block(Span::every(-1), ..)?);

    let mut t = m.clone();
    t.transpose();
    println!("transposed:\n{t}");

    let halves = m.map(|v| v as f64 / 2.0);
    println!("halved:\n{halves}");

    let flat = Matrix::from_vec(vec![10, 20, 30]);
    println!("flat row render: {flat}");
    Ok(())
}
