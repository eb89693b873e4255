// scripts/explorer.rs
//
// Command-line explorer: price a call, sweep one input, or compare actual
// price moves with their tangent-line estimates.

use bs_greeks::analytics::bs_analytic::{call_greeks, price_call, BsParams};
use bs_greeks::linearization::{
    decays_monotonically, error_decay, square, square_derivative, theta_decay_check,
};
use bs_greeks::output;
use bs_greeks::sweep::{run_sweep, GreekSet, SweepAxis, SweepConfig};
use bs_greeks::BsResult;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "explorer")]
#[command(about = "Explore Black-Scholes call prices, Greeks and linear approximations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Copy)]
struct ParamArgs {
    /// Underlying price S
    #[arg(long, default_value_t = 101.0)]
    s: f64,

    /// Strike price K
    #[arg(long, default_value_t = 100.0)]
    k: f64,

    /// Time to maturity T in years
    #[arg(long, default_value_t = 1.0)]
    t: f64,

    /// Risk-free rate r
    #[arg(long, default_value_t = 0.05, allow_hyphen_values = true)]
    r: f64,

    /// Volatility sigma
    #[arg(long, default_value_t = 0.2)]
    sigma: f64,
}

impl From<ParamArgs> for BsParams {
    fn from(a: ParamArgs) -> Self {
        BsParams::new(a.s, a.k, a.t, a.r, a.sigma)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Price a call and print its Greeks
    Price(ParamArgs),

    /// Sweep one input across a range
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Input to vary: s, k, t, r or sigma
        #[arg(long, default_value = "s")]
        axis: SweepAxis,

        #[arg(long, default_value_t = 50.0, allow_hyphen_values = true)]
        start: f64,

        #[arg(long, default_value_t = 150.0, allow_hyphen_values = true)]
        end: f64,

        #[arg(long, default_value_t = 11)]
        points: usize,

        /// Write CSV here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Tangent-line error of f(x) = x² for shrinking steps
    Tangent {
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        x0: f64,

        #[arg(long, value_delimiter = ',', default_value = "1,0.1,0.01")]
        deltas: Vec<f64>,
    },

    /// Compare recomputed prices with theta-based estimates
    ThetaDecay {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, value_delimiter = ',', default_value = "0.1,0.01")]
        dt: Vec<f64>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> BsResult<()> {
    match command {
        Command::Price(args) => {
            let params = BsParams::from(args);
            let quote = price_call(&params)?;
            let g = call_greeks(&params)?;
            println!("price = {:.4}  (d1 = {:.4}, d2 = {:.4})", quote.price, quote.d1, quote.d2);
            println!("delta = {:.4}", g.delta);
            println!("gamma = {:.4}", g.gamma);
            println!("theta = {:.4}", g.theta);
            println!("vega  = {:.4}", g.vega);
            println!("rho   = {:.4}", g.rho);
        }
        Command::Sweep {
            params,
            axis,
            start,
            end,
            points,
            output,
        } => {
            let cfg = SweepConfig {
                base: params.into(),
                axis,
                start,
                end,
                points,
                greeks: GreekSet::ALL,
            };
            let rows = run_sweep(&cfg)?;
            match output {
                Some(path) => {
                    output::write_sweep_to_csv(&path, axis, &rows)?;
                    info!("wrote {} rows to {}", rows.len(), path.display());
                }
                None => output::write_sweep_csv(&mut io::stdout().lock(), axis, &rows)?,
            }
        }
        Command::Tangent { x0, deltas } => {
            let checks = error_decay(square, square_derivative, x0, &deltas)?;
            println!("{:>10} {:>14} {:>14} {:>14}", "delta", "actual", "approx", "error");
            for c in &checks {
                println!(
                    "{:>10} {:>14.6} {:>14.6} {:>14.3e}",
                    c.delta, c.actual_change, c.approx_change, c.error
                );
            }
            println!("monotone decay: {}", decays_monotonically(&checks));
        }
        Command::ThetaDecay { params, dt } => {
            let params = BsParams::from(params);
            println!("{:>8} {:>12} {:>12} {:>12}", "dt", "actual", "approx", "error");
            for dt in dt {
                let c = theta_decay_check(&params, dt)?;
                println!(
                    "{:>8} {:>12.6} {:>12.6} {:>12.3e}",
                    c.dt, c.actual_price, c.approx_price, c.error
                );
            }
        }
    }
    Ok(())
}
