//! Prints a few prefix sums over a 10-element Fenwick tree.

use psum::FenwickTree;
use tracing_subscriber::EnvFilter;

fn main() -> psum::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut ft = FenwickTree::<i64>::new(10);

    ft.update(0, 10)?;
    ft.update(2, 5)?;
    for i in [0, 1, 2] {
        println!("Sum up to index {i}: {}", ft.query(i)?);
    }

    ft.update(5, 7)?;
    ft.update(9, 3)?;
    for i in [4, 5, 9] {
        println!("Sum up to index {i}: {}", ft.query(i)?);
    }

    Ok(())
}
