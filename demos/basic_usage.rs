// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see rejected literals reported through
// tracing.

use float128::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Float128 Example ===\n");

    // Construction
    let third = Float128::ONE / Float128::from(3.0);
    println!("1/3            = {}", third);
    println!("1/3 as f64     = {:e}", third.to_f64());
    println!("1/3 lanes      = {:?}\n", third.to_parts());

    // Arithmetic keeps digits a double drops
    let big = Float128::from_i64(i64::MAX);
    println!("i64::MAX       = {}", big);
    println!("i64::MAX + 1   = {}", big + Float128::ONE);
    println!("(2^27+1)^2     = {}", Float128::from(134_217_729.0).sqr());
    println!("3^40           = {}", Float128::from(3.0).powi(40));
    println!("10^-20         = {}\n", Float128::TEN.powi(-20));

    // Parsing
    println!("=== Parsing ===");
    for literal in ["0.1", "-2.5e3", "3.1415926535897932384626433832795", "1e-400", "1..5"] {
        match literal.parse::<Float128>() {
            Ok(x) => println!("  {:<36} -> {}", literal, x),
            Err(err) => println!("  {:<36} -> error: {}", literal, err),
        }
    }

    let (x, used) = match Float128::parse_prefix("6.02214076e23 per mole") {
        Ok(parsed) => parsed,
        Err(err) => {
            println!("unexpected parse failure: {}", err);
            return;
        },
    };
    println!("  prefix scan read {} bytes: {}\n", used, x);

    // Formatting
    println!("=== Formatting ===");
    let pi: Float128 = "3.1415926535897932384626433832795".parse().unwrap_or(Float128::NAN);
    println!("  default        {}", pi);
    println!("  {{:.10}}         {:.10}", pi);
    let config = FormatConfig::new()
        .with_precision(8)
        .with_exponent_width(4)
        .with_plus_sign(false);
    println!("  custom         {}", pi.to_string_with(&config));
    println!("  NaN / Inf      {} {} {}", Float128::NAN, Float128::INFINITY, Float128::NEG_INFINITY);

    // Comparison
    println!("\n=== Comparison ===");
    let pi_next: Float128 = "3.1415926535897932384626433832796".parse().unwrap_or(Float128::NAN);
    println!("  pi < pi_next   {}", pi < pi_next);
    println!("  hi lanes equal {}", pi.hi() == pi_next.hi());
    println!("  compare        {:?}", pi.compare(&pi_next));

    // Decimal boundary
    println!("\n=== rust_decimal ===");
    let price = Decimal::new(5_000_025, 2);
    let scaled = Float128::from(price) / Float128::from(3.0);
    println!("  {} / 3 = {}", price, scaled);
    match scaled.to_decimal() {
        Ok(d) => println!("  back to Decimal: {}", d),
        Err(err) => println!("  back to Decimal failed: {}", err),
    }
    match Float128::from(1e40).to_decimal() {
        Ok(d) => println!("  1e40 as Decimal: {}", d),
        Err(err) => println!("  1e40 as Decimal: {}", err),
    }
}
