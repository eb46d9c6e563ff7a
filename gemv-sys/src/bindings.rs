use std::os::raw::{c_char, c_int};

extern "C" {
    /// DGEMV performs one of the matrix-vector operations
    ///
    /// ```text
    /// y := alpha*A*x + beta*y,   or   y := alpha*A**T*x + beta*y,
    /// ```
    ///
    /// where alpha and beta are scalars, x and y are vectors and A is an
    /// m by n matrix stored column-major with leading dimension `lda`.
    /// All arguments are passed by pointer (Fortran calling convention).
    pub fn dgemv_(
        trans: *const c_char,
        m: *const c_int,
        n: *const c_int,
        alpha: *const f64,
        a: *const f64,
        lda: *const c_int,
        x: *const f64,
        incx: *const c_int,
        beta: *const f64,
        y: *mut f64,
        incy: *const c_int,
    );
}
