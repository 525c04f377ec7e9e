use tracing::{debug, warn};

use crate::error::BlasError;
use crate::routines::BlasRoutines;

/// Minimum slice length needed to address `n` elements at stride `inc`. `None` on overflow.
pub fn required_len(n: usize, inc: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    (n - 1).checked_mul(inc)?.checked_add(1)
}

fn blas_int(n: usize) -> Result<i32, BlasError> {
    i32::try_from(n).map_err(|_| BlasError::CountOutOfRange { n })
}

fn blas_stride(arg: &'static str, inc: usize) -> Result<i32, BlasError> {
    if inc == 0 {
        return Err(BlasError::ZeroStride { arg });
    }
    i32::try_from(inc).map_err(|_| BlasError::StrideOutOfRange { arg, inc })
}

fn check_len(arg: &'static str, len: usize, n: usize, inc: usize) -> Result<(), BlasError> {
    let required = required_len(n, inc).ok_or(BlasError::LengthOverflow { arg, n, inc })?;
    if len < required {
        return Err(BlasError::TooShort { arg, len, required });
    }
    Ok(())
}

fn validate_axpy(n: usize, x_len: usize, incx: usize, y_len: usize, incy: usize) -> Result<(i32, i32, i32), BlasError> {
    let incx_blas = blas_stride("x", incx)?;
    let incy_blas = blas_stride("y", incy)?;
    let n_blas = blas_int(n)?;
    check_len("x", x_len, n, incx)?;
    check_len("y", y_len, n, incy)?;
    Ok((n_blas, incx_blas, incy_blas))
}

fn validate_scal(n: usize, x_len: usize, incx: usize) -> Result<(i32, i32), BlasError> {
    let incx_blas = blas_stride("x", incx)?;
    let n_blas = blas_int(n)?;
    check_len("x", x_len, n, incx)?;
    Ok((n_blas, incx_blas))
}

/// y += alpha * x, over `n` elements of each vector at the given strides.
///
/// All arguments are validated before anything is handed to BLAS; on error `y` is left
///  unchanged. Elements of `y` that are not addressed by the strided access are never touched.
pub fn axpy<T: BlasRoutines>(n: usize, alpha: T, x: &[T], incx: usize, y: &mut [T], incy: usize) -> Result<(), BlasError> {
    let (n_blas, incx_blas, incy_blas) = validate_axpy(n, x.len(), incx, y.len(), incy)
        .inspect_err(|e| warn!("rejected axpy call: {e}"))?;
    if n == 0 {
        return Ok(());
    }

    debug!(n, incx, incy, "calling axpy");
    unsafe {
        T::axpy(n_blas, alpha, x, incx_blas, y, incy_blas);
    }
    Ok(())
}

/// x *= alpha, over `n` elements at stride `incx`.
pub fn scal<T: BlasRoutines>(n: usize, alpha: T, x: &mut [T], incx: usize) -> Result<(), BlasError> {
    let (n_blas, incx_blas) = validate_scal(n, x.len(), incx)
        .inspect_err(|e| warn!("rejected scal call: {e}"))?;
    if n == 0 {
        return Ok(());
    }

    debug!(n, incx, "calling scal");
    unsafe {
        T::scal(n_blas, alpha, x, incx_blas);
    }
    Ok(())
}

/// y += alpha * x for two contiguous vectors of the same length
pub fn axpy_slices<T: BlasRoutines>(alpha: T, x: &[T], y: &mut [T]) -> Result<(), BlasError> {
    if x.len() != y.len() {
        warn!(x = x.len(), y = y.len(), "rejected axpy call: length mismatch");
        return Err(BlasError::LengthMismatch { x: x.len(), y: y.len() });
    }
    axpy(x.len(), alpha, x, 1, y, 1)
}
