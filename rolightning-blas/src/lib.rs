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

//! # rolightning-blas
//!
//! BLAS matrix-vector kernel for the lightning plugin.
//!
//! rolightning-blas computes the dense double-precision matrix-vector product `b = A·v`
//! for row-major matrices by delegating to the `dgemv` routine of a system BLAS library.
//! The kernel is a pure function: inputs are borrowed for the duration of one call,
//! the result buffer is freshly allocated and handed to the caller, and no state is
//! retained between calls.

mod error;
pub use error::LightningBlasError;
mod gemv;
mod matvec;
pub use matvec::{mat_vec_product, mat_vec_product_array};
