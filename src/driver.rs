use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::checked::axpy;
use crate::error::BlasError;

const ALPHA: f64 = 3.0;
const X: [f64; 3] = [1.0, 2.0, 3.0];

/// Runs y = 3 * [1, 2, 3] + [0, 0, 0] through BLAS and returns y.
pub fn compute() -> Result<Vec<f64>, BlasError> {
    let mut y = vec![0.0; X.len()];

    axpy(X.len(), ALPHA, &X, 1, &mut y, 1)?;
    Ok(y)
}

/// Computes the result and writes it to `out`, one value per line.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    info!("running daxpy smoke test");

    let y = compute().context("daxpy call rejected")?;
    for z in y.iter() {
        writeln!(out, "{z}").context("failed to write result")?;
    }
    out.flush().context("failed to flush output")?;

    info!(len = y.len(), "done");
    Ok(())
}
