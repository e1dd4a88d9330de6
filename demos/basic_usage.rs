// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see the debug events emitted on the
// error paths.

use exact_fraction::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Exact Fraction Example ===\n");

    // Zero denominators are rejected at construction
    match Fraction::new(4, 0) {
        Ok(frac) => println!("unexpected: {}", frac),
        Err(err) => println!("Fraction::new(4, 0) failed: {}", err),
    }

    let half = Fraction::new(1, 2).expect("valid fraction");
    let third = Fraction::new(1, 3).expect("valid fraction");
    let three_quarters = Fraction::new(6, 8).expect("valid fraction");

    println!("\n=== Arithmetic ===");
    println!("{} + {} = {}", half, third, half + third);
    println!("{} - {} = {}", half, half, half - half);
    println!("{} * {} = {}", half, third, half * third);
    println!(
        "{} / {} = {}",
        three_quarters,
        three_quarters,
        three_quarters / three_quarters
    );
    println!("{} as f64 = {}", three_quarters, three_quarters.to_f64());
    println!("{} as decimal = {}", third, third.to_decimal());

    println!("\n=== Increment / Decrement ===");
    let mut x = half;
    x.increment();
    println!("1/2 incremented: {}", x);
    x.decrement();
    println!("then decremented: {}", x);

    println!("\n=== Checked Arithmetic ===");
    match half.checked_div(Fraction::ZERO) {
        Ok(frac) => println!("unexpected: {}", frac),
        Err(err) => println!("{} / 0 failed: {}", half, err),
    }
    match Fraction::from_int(i32::MAX).checked_add(Fraction::ONE) {
        Ok(frac) => println!("unexpected: {}", frac),
        Err(err) => println!("i32::MAX + 1 failed: {}", err),
    }
}
