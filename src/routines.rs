use blas::{daxpy, dscal, saxpy, sscal};

/// Precision-generic access to the raw BLAS Level-1 entry points, so callers can be written
///  once for `f32` and `f64`.
///
/// These are thin forwards to BLAS. See [crate::checked] for the validating wrappers.
pub trait BlasRoutines: Copy {
    /// y += alpha * x
    ///
    /// # Safety
    ///
    /// Nothing checks `n` and the strides against the slice lengths. The caller must ensure
    ///  `n >= 0`, `incx >= 1`, `incy >= 1`, `x.len() >= (n-1)*incx + 1` and
    ///  `y.len() >= (n-1)*incy + 1`, otherwise BLAS reads or writes out of bounds.
    unsafe fn axpy(n: i32, alpha: Self, x: &[Self], incx: i32, y: &mut [Self], incy: i32);

    /// x *= alpha
    ///
    /// # Safety
    ///
    /// Nothing checks `n` and the stride against the slice length. The caller must ensure
    ///  `n >= 0`, `incx >= 1` and `x.len() >= (n-1)*incx + 1`.
    unsafe fn scal(n: i32, alpha: Self, x: &mut [Self], incx: i32);
}

impl BlasRoutines for f64 {
    unsafe fn axpy(n: i32, alpha: f64, x: &[f64], incx: i32, y: &mut [f64], incy: i32) {
        daxpy(n, alpha, x, incx, y, incy);
    }

    unsafe fn scal(n: i32, alpha: f64, x: &mut [f64], incx: i32) {
        dscal(n, alpha, x, incx);
    }
}

impl BlasRoutines for f32 {
    unsafe fn axpy(n: i32, alpha: f32, x: &[f32], incx: i32, y: &mut [f32], incy: i32) {
        saxpy(n, alpha, x, incx, y, incy);
    }

    unsafe fn scal(n: i32, alpha: f32, x: &mut [f32], incx: i32) {
        sscal(n, alpha, x, incx);
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use crate::routines::BlasRoutines;

    #[rstest]
    #[case(3.0, vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0], vec![3.0, 6.0, 9.0])]
    #[case(-1.0, vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0])]
    #[case(0.5, vec![2.0, 4.0], vec![1.0, 1.0], vec![2.0, 3.0])]
    fn test_axpy_f64(#[case] alpha: f64, #[case] x: Vec<f64>, #[case] y: Vec<f64>, #[case] expected: Vec<f64>) {
        let mut y = y;
        unsafe {
            f64::axpy(x.len() as i32, alpha, &x, 1, &mut y, 1);
        }
        assert_eq!(y, expected);
    }

    #[rstest]
    #[case(3.0, vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0], vec![3.0, 6.0, 9.0])]
    #[case(2.0, vec![1.0, 1.0], vec![1.0, -1.0], vec![3.0, 1.0])]
    fn test_axpy_f32(#[case] alpha: f32, #[case] x: Vec<f32>, #[case] y: Vec<f32>, #[case] expected: Vec<f32>) {
        let mut y = y;
        unsafe {
            f32::axpy(x.len() as i32, alpha, &x, 1, &mut y, 1);
        }
        assert_eq!(y, expected);
    }

    #[test]
    fn test_axpy_strided() {
        let x = [1.0, 100.0, 2.0, 100.0, 3.0];
        let mut y = [0.0; 7];
        unsafe {
            f64::axpy(3, 2.0, &x, 2, &mut y, 3);
        }
        assert_eq!(y, [2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 6.0]);
    }

    #[test]
    fn test_scal() {
        let mut x = vec![1.0f64, 2.0, 3.0, 4.0];
        unsafe {
            f64::scal(2, -2.0, &mut x, 2);
        }
        assert_eq!(x, vec![-2.0, 2.0, -6.0, 4.0]);

        let mut x = vec![1.0f32, 2.0];
        unsafe {
            f32::scal(2, 0.5, &mut x, 1);
        }
        assert_eq!(x, vec![0.5, 1.0]);
    }
}
