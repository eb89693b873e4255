// demos/walkthrough.rs
use bs_greeks::analytics::bs_analytic::{
    black_scholes_call, call_delta, call_rho, call_theta, call_vega, BsParams,
};
use bs_greeks::error::BsError;
use bs_greeks::linearization::{error_decay, square, square_derivative, theta_decay_check};
use bs_greeks::sweep::{run_sweep, GreekSet, SweepAxis, SweepConfig};

fn main() {
    println!("Linear Approximation and Black-Scholes Greeks");
    println!("=============================================\n");

    // 1. Tangent line of f(x) = x² at x0 = 10
    println!("1. Tangent-line error for f(x) = x² at x0 = 10");
    let checks = error_decay(square, square_derivative, 10.0, &[1.0, 0.1, 0.01])
        .expect("finite perturbations");
    for c in &checks {
        println!(
            "   Δ = {:<5} actual = {:>9.6}  approx = {:>9.6}  error = {:.2e}",
            c.delta, c.actual_change, c.approx_change, c.error
        );
    }

    // 2. Price and Greeks at the example inputs
    let (s, k, t, r, sigma) = (101.0, 100.0, 1.0, 0.05, 0.2);
    println!("\n2. Call with S={}, K={}, T={}, r={}, σ={}", s, k, t, r, sigma);
    let quote = black_scholes_call(s, k, t, r, sigma).expect("valid inputs");
    println!("   price = {:.2} (d1 = {:.4}, d2 = {:.4})", quote.price, quote.d1, quote.d2);
    println!("   delta = {:.2}", call_delta(s, k, t, r, sigma).expect("valid inputs"));
    println!("   theta = {:.2}", call_theta(s, k, t, r, sigma).expect("valid inputs"));
    println!("   vega  = {:.2}", call_vega(s, k, t, r, sigma).expect("valid inputs"));
    println!("   rho   = {:.2}", call_rho(s, k, t, r, sigma).expect("valid inputs"));

    // 3. Theta as a time-decay predictor
    println!("\n3. Theta-based estimate after time passes");
    let params = BsParams::new(s, k, t, r, sigma);
    for dt in [0.1, 0.01] {
        let c = theta_decay_check(&params, dt).expect("dt inside maturity");
        println!(
            "   dt = {:<5} recomputed = {:.6}  estimate = {:.6}  error = {:.2e}",
            dt, c.actual_price, c.approx_price, c.error
        );
    }

    // 4. Delta across spot prices (what the spot slider showed)
    println!("\n4. Delta as the spot moves");
    let cfg = SweepConfig {
        base: params,
        axis: SweepAxis::Spot,
        start: 80.0,
        end: 120.0,
        points: 5,
        greeks: GreekSet::DELTA,
    };
    for p in run_sweep(&cfg).expect("valid sweep") {
        println!("   S = {:>6.1}  price = {:>7.3}  delta = {:.3}", p.value, p.price, p.delta.unwrap_or(f64::NAN));
    }

    // 5. Invalid inputs
    println!("\n5. Zero volatility is rejected");
    match black_scholes_call(s, k, t, r, 0.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(BsError::Domain { parameter, value, constraint }) => {
            println!("   ✓ Caught domain error: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }
}
