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

use numpy::{IntoPyArray, PyArray1, PyReadonlyArrayDyn};
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use rolightning_blas::LightningBlasError;

/// Compute the dense matrix-vector product ``b = A·v``.
///
/// The matrix is interpreted as a row-major ``rows`` by ``cols`` buffer; it
/// may be passed flat or two-dimensional, only the total element count is
/// significant. The input arrays are borrowed read-only for the duration of
/// the call. The returned array owns a freshly allocated buffer that is
/// reclaimed by the Python runtime.
///
/// Args:
///     matrix (numpy.ndarray): C-contiguous float64 matrix buffer of rows * cols elements.
///     vector (numpy.ndarray): C-contiguous float64 vector of cols elements.
///     rows (int): Number of matrix rows.
///     cols (int): Number of matrix columns.
///
/// Returns:
///     numpy.ndarray: The product A·v with one float64 entry per matrix row.
///
/// Raises:
///     ValueError: Dimensions are non-positive or inconsistent with the buffer lengths.
///     MemoryError: The result buffer could not be allocated.
#[pyfunction]
#[pyo3(name = "matVecProduct")]
pub fn mat_vec_product<'py>(
    py: Python<'py>,
    matrix: PyReadonlyArrayDyn<'py, f64>,
    vector: PyReadonlyArrayDyn<'py, f64>,
    rows: usize,
    cols: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let matrix_slice = matrix.as_slice()?;
    let vector_slice = vector.as_slice()?;
    let result = rolightning_blas::mat_vec_product(matrix_slice, vector_slice, rows, cols)
        .map_err(into_py_err)?;
    Ok(result.into_pyarray(py))
}

fn into_py_err(err: LightningBlasError) -> PyErr {
    match err {
        LightningBlasError::InvalidDimension { .. } => PyValueError::new_err(format!("{}", err)),
        LightningBlasError::AllocationFailure { .. } => PyMemoryError::new_err(format!("{}", err)),
    }
}
