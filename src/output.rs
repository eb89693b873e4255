// src/output.rs
use crate::sweep::{SweepAxis, SweepPoint};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write sweep rows as CSV; unselected Greeks are left empty
pub fn write_sweep_csv<W: Write>(out: &mut W, axis: SweepAxis, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(out, "{},price,delta,gamma,theta,vega,rho", axis)?;
    for p in points {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            p.value,
            p.price,
            cell(p.delta),
            cell(p.gamma),
            cell(p.theta),
            cell(p.vega),
            cell(p.rho)
        )?;
    }
    Ok(())
}

pub fn write_sweep_to_csv<P: AsRef<Path>>(
    filename: P,
    axis: SweepAxis,
    points: &[SweepPoint],
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_sweep_csv(&mut file, axis, points)?;
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>>(filename: P, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
