use anyhow::Result;
use smallmat::{identity, zero, Matrix};

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    println!("A =\n{}", a);
    println!("det(A) = {}", a.determinant()?);
    println!("tr(A) = {}", a.trace()?);

    let inv = a.inverse()?;
    println!("A^-1 =\n{}", inv);
    println!("A * A^-1 =\n{}", (&a * &inv)?);

    println!("2 * I =\n{}", 2.0 * identity(2));
    println!("-A =\n{}", -&a);
    println!("A - A =\n{}", (&a - &a)?);

    let wide = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    println!("W^T =\n{}", wide.transpose());
    println!("W * W^T =\n{}", wide.multiply(&wide.transpose())?);

    // Expected failures, reported rather than propagated
    if let Err(e) = wide.multiply(&wide) {
        println!("W * W failed: {}", e);
    }
    if let Err(e) = identity(3).determinant() {
        println!("det(I3) failed: {}", e);
    }
    if let Err(e) = a.add(&zero(3, 2)) {
        println!("A + 0(3x2) failed: {}", e);
    }

    Ok(())
}
