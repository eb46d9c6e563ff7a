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

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

//! Python interface to the lightning BLAS matrix-vector kernel.
//!
//! The extension module `lightning` exposes the dense double-precision
//! matrix-vector product `b = A·v` computed by the system BLAS backend.

use pyo3::prelude::*;
mod matvec;
pub use matvec::mat_vec_product;

/// BLAS matrix-vector kernel for the lightning plugin.
///
///
/// Computes dense double-precision matrix-vector products with a system
/// BLAS backend.
///
/// .. autosummary::
///     :toctree: generated/
///
///     matVecProduct
///
#[pymodule]
fn lightning(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(matvec::mat_vec_product, module)?)?;
    Ok(())
}
