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

use crate::error::LightningBlasError;
use crate::gemv::dgemv_row_major;
use ndarray::{Array1, ArrayView1, ArrayView2};
use std::convert::TryFrom;
use std::mem::size_of;
use std::os::raw::c_int;

/// Computes the dense matrix-vector product `b = A·v` with the BLAS backend.
///
/// The matrix is interpreted as a row-major `rows`×`cols` buffer. All
/// preconditions are validated before the backend is called, a dimension
/// mismatch can never read out of bounds. The inputs are borrowed read-only
/// for the duration of the call; the result is a freshly allocated buffer
/// owned by the caller.
///
/// # Arguments
///
/// * `matrix` - The flat row-major matrix buffer of length `rows * cols`
/// * `vector` - The vector buffer of length `cols`
/// * `rows` - The number of matrix rows, positive
/// * `cols` - The number of matrix columns, positive
///
/// # Returns
///
/// * `Ok(Vec<f64>)` - The product `A·v` of length `rows`
/// * `Err(LightningBlasError)` - Dimensions are invalid or the result buffer cannot be allocated
pub fn mat_vec_product(
    matrix: &[f64],
    vector: &[f64],
    rows: usize,
    cols: usize,
) -> Result<Vec<f64>, LightningBlasError> {
    let (m, n) = validate_dimensions(matrix.len(), vector.len(), rows, cols)?;
    let mut result = allocate_result(rows)?;
    dgemv_row_major(matrix, vector, m, n, &mut result);
    Ok(result)
}

/// Computes the dense matrix-vector product `b = A·v` for ndarray views.
///
/// The shape is taken from the matrix view itself, so declared dimensions can
/// never disagree with the buffer. Views in standard (row-major, contiguous)
/// layout are passed to the backend directly; other layouts are copied to a
/// standard-layout buffer first.
///
/// # Arguments
///
/// * `matrix` - A two-dimensional view of the matrix
/// * `vector` - A one-dimensional view of the vector, length equal to the number of matrix columns
///
/// # Returns
///
/// * `Ok(Array1<f64>)` - The product `A·v` with one entry per matrix row
/// * `Err(LightningBlasError)` - Dimensions are invalid or the result buffer cannot be allocated
pub fn mat_vec_product_array(
    matrix: ArrayView2<'_, f64>,
    vector: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, LightningBlasError> {
    let (rows, cols) = matrix.dim();
    let result = match (matrix.as_slice(), vector.as_slice()) {
        (Some(matrix_slice), Some(vector_slice)) => {
            mat_vec_product(matrix_slice, vector_slice, rows, cols)?
        }
        _ => {
            // iteration order of a view is the logical row-major order
            let matrix_buffer: Vec<f64> = matrix.iter().copied().collect();
            let vector_buffer: Vec<f64> = vector.iter().copied().collect();
            mat_vec_product(&matrix_buffer, &vector_buffer, rows, cols)?
        }
    };
    Ok(Array1::from_vec(result))
}

// BLAS takes 32-bit dimensions, everything is checked down to c_int here.
fn validate_dimensions(
    matrix_len: usize,
    vector_len: usize,
    rows: usize,
    cols: usize,
) -> Result<(c_int, c_int), LightningBlasError> {
    if rows == 0 || cols == 0 {
        return Err(LightningBlasError::InvalidDimension {
            msg: format!("rows and cols must be positive, got {}x{}", rows, cols),
        });
    }
    let m = c_int::try_from(rows).map_err(|_| LightningBlasError::InvalidDimension {
        msg: format!("rows {} exceeds the BLAS dimension limit {}", rows, c_int::MAX),
    })?;
    let n = c_int::try_from(cols).map_err(|_| LightningBlasError::InvalidDimension {
        msg: format!("cols {} exceeds the BLAS dimension limit {}", cols, c_int::MAX),
    })?;
    let expected_matrix_len = rows
        .checked_mul(cols)
        .ok_or_else(|| LightningBlasError::InvalidDimension {
            msg: format!("matrix size {}x{} overflows", rows, cols),
        })?;
    if matrix_len != expected_matrix_len {
        return Err(LightningBlasError::InvalidDimension {
            msg: format!(
                "matrix buffer has length {} but {}x{} requires {}",
                matrix_len, rows, cols, expected_matrix_len
            ),
        });
    }
    if vector_len != cols {
        return Err(LightningBlasError::InvalidDimension {
            msg: format!(
                "vector buffer has length {} but the matrix has {} columns",
                vector_len, cols
            ),
        });
    }
    Ok((m, n))
}

fn allocate_result(rows: usize) -> Result<Vec<f64>, LightningBlasError> {
    let mut result: Vec<f64> = Vec::new();
    result
        .try_reserve_exact(rows)
        .map_err(|_| LightningBlasError::AllocationFailure {
            bytes: rows * size_of::<f64>(),
        })?;
    result.resize(rows, 0.0);
    Ok(result)
}
