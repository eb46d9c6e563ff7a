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

use thiserror::Error;

/// Errors of the lightning matrix-vector kernel.
///
/// Absence of the BLAS backend is not represented here: the backend is linked
/// statically and its absence fails the build of the gemv-sys crate, it can
/// never occur per-call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightningBlasError {
    /// Declared dimensions are non-positive or inconsistent with the supplied buffer lengths.
    #[error("Invalid dimensions: {msg}")]
    InvalidDimension {
        /// The precondition that failed.
        msg: String,
    },
    /// The result buffer could not be allocated.
    #[error("Cannot allocate result buffer of {bytes} bytes")]
    AllocationFailure {
        /// Size of the failed allocation in bytes.
        bytes: usize,
    },
}
