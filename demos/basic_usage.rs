// ============================================================================
// Basic Usage Example
// ============================================================================

use linear_algebra::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Vector Example ===\n");

    // Arithmetic
    let a = Vector::new(["8.218", "-9.341"])?;
    let b = Vector::new(["-1.129", "2.111"])?;
    println!("{} + {} = {}", a, b, a.plus(&b)?);
    println!("{} - {} = {}", a, b, a.minus(&b)?);
    println!("{} * 7.41 = {}", a, a.times_scalar(Decimal::new(741, 2))?);

    // Magnitude and direction
    println!("\n=== Magnitude ===");
    let v = Vector::new(["5.581", "-2.136"])?;
    println!("|{}| = {}", v, v.magnitude()?);
    println!("unit: {}", v.normalized()?);

    match Vector::zero(2)?.normalized() {
        Ok(_) => unreachable!(),
        Err(e) => println!("zero vector: {} ({:?})", e, e.kind()),
    }

    // Angles and predicates
    println!("\n=== Angles ===");
    let p = Vector::new(["7.35", "0.221", "5.188"])?;
    let q = Vector::new(["2.751", "8.259", "3.985"])?;
    println!("angle: {:.3} degrees", p.angle(&q, AngleUnit::Degrees)?);
    println!("parallel: {}", p.is_parallel(&q)?);
    println!("orthogonal: {}", p.is_orthogonal(&q)?);

    // Projections
    println!("\n=== Projections ===");
    let x = Vector::new(["3.009", "-6.172", "3.692", "-2.51"])?;
    let basis = Vector::new(["6.404", "-9.144", "2.759", "8.718"])?;
    println!("along:  {}", x.parallel_project(&basis)?);
    println!("across: {}", x.orthogonal_project(&basis)?);

    // Cross products and areas
    println!("\n=== Cross Product ===");
    let u = Vector::new(["8.462", "7.893", "-8.187"])?;
    let w = Vector::new(["6.984", "-5.975", "4.778"])?;
    println!("{} x {} = {}", u, w, u.cross(&w)?);
    println!("parallelogram area: {:.3}", u.area_parallelogram(&w)?);
    println!("triangle area: {:.3}", u.area_triangle(&w)?);

    // Truncating pairwise operations
    println!("\n=== Legacy Space ===");
    let legacy = VectorSpace::new(VectorConfig::legacy().with_display_precision(1))?;
    let long = Vector::new([1, 2, 3])?;
    let short = Vector::new([10, 20])?;
    println!("{}", legacy.display(&legacy.plus(&long, &short)?));
    if let Err(e) = long.plus(&short) {
        println!("standard space: {}", e);
    }

    Ok(())
}
