// tests/linearization_test.rs
use approx::{assert_abs_diff_eq, assert_relative_eq};
use bs_greeks::analytics::bs_analytic::{call_theta, price_call, BsParams};
use bs_greeks::linearization::{
    decays_monotonically, error_decay, square, square_derivative, tangent_check, theta_decay_check,
};

#[test]
fn test_square_error_decays_quadratically() {
    let deltas = [1.0, 0.1, 0.01];
    let checks = error_decay(square, square_derivative, 10.0, &deltas).unwrap();

    println!("\n{:>8} {:>12} {:>12} {:>12}", "delta", "actual", "approx", "error");
    for c in &checks {
        println!("{:>8} {:>12.6} {:>12.6} {:>12.3e}", c.delta, c.actual_change, c.approx_change, c.error);
    }

    assert_eq!(checks.len(), 3);
    assert!(decays_monotonically(&checks));
    // f(x) = x² has remainder exactly Δ²
    for c in &checks {
        assert_relative_eq!(c.error / (c.delta * c.delta), 1.0, max_relative = 1e-6);
    }
}

#[test]
fn test_square_example_values() {
    let c = tangent_check(square, square_derivative, 10.0, 0.1).unwrap();
    assert_abs_diff_eq!(c.actual_change, 2.01, epsilon = 1e-9);
    assert_abs_diff_eq!(c.approx_change, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.error, 0.01, epsilon = 1e-9);
}

#[test]
fn test_negative_step_also_converges() {
    let checks = error_decay(f64::exp, f64::exp, 0.0, &[-0.5, -0.05, -0.005]).unwrap();
    assert!(decays_monotonically(&checks));
}

#[test]
fn test_growing_steps_are_not_monotone_decay() {
    let checks = error_decay(square, square_derivative, 10.0, &[0.01, 0.1, 1.0]).unwrap();
    assert!(!decays_monotonically(&checks));
}

#[test]
fn test_theta_decay_example() {
    let params = BsParams::default();
    let c = theta_decay_check(&params, 0.01).unwrap();

    let base = price_call(&params).unwrap().price;
    let shorter = price_call(&params.with_t(0.99)).unwrap().price;
    let theta = call_theta(params.s, params.k, params.t, params.r, params.sigma).unwrap();

    println!("\nbase {:.6} recomputed {:.6} estimate {:.6} error {:e}", c.base_price, c.actual_price, c.approx_price, c.error);

    assert_eq!(c.base_price, base);
    assert_eq!(c.actual_price, shorter);
    assert_relative_eq!(c.approx_price, base + theta * 0.01, max_relative = 1e-12);
    assert!(c.actual_price < c.base_price, "a long call loses value as time passes");
    assert!(c.error < 1e-3, "error at dt=0.01 too large: {}", c.error);
}

#[test]
fn test_theta_decay_error_scales_with_dt_squared() {
    let params = BsParams::default();
    let coarse = theta_decay_check(&params, 0.1).unwrap();
    let fine = theta_decay_check(&params, 0.01).unwrap();

    let ratio = coarse.error / fine.error;
    println!("\nerror(dt=0.1) = {:e}, error(dt=0.01) = {:e}, ratio = {:.1}", coarse.error, fine.error, ratio);

    assert!(ratio > 50.0 && ratio < 200.0, "ratio {} is not roughly 100", ratio);
}

#[test]
fn test_theta_decay_propagates_domain_errors() {
    let bad = BsParams { sigma: 0.0, ..BsParams::default() };
    assert!(theta_decay_check(&bad, 0.01).unwrap_err().is_domain());

    let short = BsParams::default().with_t(0.05);
    assert!(theta_decay_check(&short, 0.1).is_err());
}
