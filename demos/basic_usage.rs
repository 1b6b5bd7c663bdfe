// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_core::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(err) = calc_core::utils::init_tracing(tracing::Level::DEBUG) {
        eprintln!("{}", err);
    }

    println!("=== Calculator Core Example ===\n");

    println!("Integer operations:");
    println!("  7 + 5        = {}", add(7, 5));
    println!("  7 - 5        = {}", subtract(7, 5));
    println!("  -7 mod 5     = {}", modulo(-7, 5));
    println!("  gcd(36, 24)  = {}", gcd(36, 24));
    println!("  lcm(4, 6)    = {}", lcm(4, 6));
    match factorial(10) {
        Ok(n) => println!("  10!          = {}", n),
        Err(err) => println!("  10!          : {}", err),
    }

    println!("\nReal operations:");
    println!("  2.5 * 4      = {}", multiply(2.5, 4.0));
    println!("  2 ^ 0.5      = {}", power(2.0, 0.5));
    println!("  |-3.5|       = {}", absolute(-3.5));
    let (sin, cos, tan) = sin_cos_tan(std::f64::consts::FRAC_PI_4);
    println!("  trig(pi/4)   = ({:.4}, {:.4}, {:.4})", sin, cos, tan);

    println!("\nDomain errors:");
    for (label, result) in [
        ("1 / 0", divide(1.0, 0.0)),
        ("sqrt(-4)", square_root(-4.0)),
        ("log_1(8)", logarithm(8.0, 1.0)),
    ] {
        match result {
            Ok(x) => println!("  {:<12} = {}", label, x),
            Err(err) => println!("  {:<12} : {}", label, err),
        }
    }

    println!("\nNamed dispatch:");
    let requests: [(&str, &[&str]); 5] = [
        ("+", &["2", "3"]),
        ("sqrt", &["16"]),
        ("log", &["8", "2"]),
        ("mod", &["5", "0"]),
        ("fact", &["abc"]),
    ];
    for (name, args) in requests {
        match evaluate_named(name, args) {
            Ok(value) => println!("  {} {:?} = {}", name, args, value),
            Err(err) => println!("  {} {:?} : {}", name, args, err),
        }
    }
}
