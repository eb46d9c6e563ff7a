// Copyright © 2021 HQS Quantum Simulations GmbH. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the
// License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied. See the License for the specific language governing permissions and
// limitations under the License.

use std::os::raw::{c_char, c_int};

/// Computes `result = matrix · vector` for a row-major matrix via BLAS dgemv.
///
/// BLAS stores matrices column-major. A row-major m×n matrix read column-major
/// is the n×m transpose of itself, so the product is issued in transpose mode
/// with the dimension arguments swapped: `dgemv('T', n, m, ...)` with
/// `lda = n`. The convention lives in this one function only.
///
/// Callers must guarantee `matrix.len() == rows * cols`,
/// `vector.len() == cols` and `result.len() == rows`.
pub(crate) fn dgemv_row_major(
    matrix: &[f64],
    vector: &[f64],
    rows: c_int,
    cols: c_int,
    result: &mut [f64],
) {
    debug_assert_eq!(matrix.len(), rows as usize * cols as usize);
    debug_assert_eq!(vector.len(), cols as usize);
    debug_assert_eq!(result.len(), rows as usize);

    let trans = b'T' as c_char;
    let alpha: f64 = 1.0;
    let beta: f64 = 0.0;
    let inc_one: c_int = 1;
    unsafe {
        gemv_sys::dgemv_(
            &trans,
            &cols,
            &rows,
            &alpha,
            matrix.as_ptr(),
            &cols,
            vector.as_ptr(),
            &inc_one,
            &beta,
            result.as_mut_ptr(),
            &inc_one,
        );
    }
}
