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

use ndarray::{arr1, arr2, Array2};
use rolightning_blas::{mat_vec_product, mat_vec_product_array, LightningBlasError};
use test_case::test_case;

const TOLERANCE: f64 = 1e-9;

fn assert_close(result: &[f64], expected: &[f64]) {
    assert_eq!(result.len(), expected.len());
    for (res, exp) in result.iter().zip(expected.iter()) {
        let scale = exp.abs().max(1.0);
        assert!(
            (res - exp).abs() < TOLERANCE * scale,
            "{:?} != {:?}",
            result,
            expected
        );
    }
}

fn identity(dimension: usize) -> Vec<f64> {
    let mut matrix = vec![0.0; dimension * dimension];
    for index in 0..dimension {
        matrix[index * dimension + index] = 1.0;
    }
    matrix
}

#[test_case(1; "one")]
#[test_case(2; "two")]
#[test_case(5; "five")]
fn test_identity_is_exact(dimension: usize) {
    let matrix = identity(dimension);
    let vector: Vec<f64> = (0..dimension).map(|i| 0.3 + i as f64).collect();
    let result = mat_vec_product(&matrix, &vector, dimension, dimension).unwrap();
    assert_eq!(result, vector);
}

#[test_case(1, 1; "1x1")]
#[test_case(3, 2; "3x2")]
#[test_case(2, 3; "2x3")]
#[test_case(7, 7; "7x7")]
fn test_zero_matrix(rows: usize, cols: usize) {
    let matrix = vec![0.0; rows * cols];
    let vector: Vec<f64> = (0..cols).map(|i| 1.5 * i as f64 - 2.0).collect();
    let result = mat_vec_product(&matrix, &vector, rows, cols).unwrap();
    assert_eq!(result.len(), rows);
    assert!(result.iter().all(|&x| x == 0.0));
}

#[test]
fn test_reference_scenario() {
    let matrix = [1.0, 0.0, 1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 3.0];
    let vector = [1.1, 2.2, 3.3];
    let result = mat_vec_product(&matrix, &vector, 3, 3).unwrap();
    assert_close(&result, &[4.4, 4.4, 12.1]);
}

#[test_case(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[1.0, 10.0, 100.0], &[321.0, 654.0]; "wide")]
#[test_case(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[1.0, 10.0], &[21.0, 43.0, 65.0]; "tall")]
fn test_rectangular(rows: usize, cols: usize, matrix: &[f64], vector: &[f64], expected: &[f64]) {
    let result = mat_vec_product(matrix, vector, rows, cols).unwrap();
    assert_close(&result, expected);
}

#[test]
fn test_linearity() {
    let matrix = [0.5, -1.0, 2.5, 3.0, 0.0, -0.25, 1.25, 4.0, -2.0, 0.75, 0.5, 1.0];
    let v = [1.0, -2.0, 0.5, 3.0];
    let w = [-0.5, 1.5, 2.0, -1.0];
    let sum: Vec<f64> = v.iter().zip(w.iter()).map(|(a, b)| a + b).collect();

    let product_v = mat_vec_product(&matrix, &v, 3, 4).unwrap();
    let product_w = mat_vec_product(&matrix, &w, 3, 4).unwrap();
    let product_sum = mat_vec_product(&matrix, &sum, 3, 4).unwrap();

    let superposition: Vec<f64> = product_v
        .iter()
        .zip(product_w.iter())
        .map(|(a, b)| a + b)
        .collect();
    assert_close(&product_sum, &superposition);
}

#[test_case(1, 4; "single row")]
#[test_case(4, 1; "single column")]
#[test_case(6, 3; "rectangular")]
fn test_result_length_matches_rows(rows: usize, cols: usize) {
    let matrix = vec![0.125; rows * cols];
    let vector = vec![1.0; cols];
    let result = mat_vec_product(&matrix, &vector, rows, cols).unwrap();
    assert_eq!(result.len(), rows);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let matrix = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    let vector = [1.1, 2.2, 3.3];
    let first = mat_vec_product(&matrix, &vector, 3, 3).unwrap();
    let second = mat_vec_product(&matrix, &vector, 3, 3).unwrap();
    let first_bits: Vec<u64> = first.iter().map(|x| x.to_bits()).collect();
    let second_bits: Vec<u64> = second.iter().map(|x| x.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn test_short_vector_is_rejected() {
    let matrix = [1.0, 0.0, 1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 3.0];
    let vector = [1.1, 2.2];
    let result = mat_vec_product(&matrix, &vector, 3, 3);
    assert!(matches!(
        result,
        Err(LightningBlasError::InvalidDimension { .. })
    ));
}

#[test]
fn test_short_matrix_buffer_is_rejected() {
    let matrix = [1.0; 8];
    let vector = [1.0, 2.0, 3.0];
    let result = mat_vec_product(&matrix, &vector, 3, 3);
    assert!(matches!(
        result,
        Err(LightningBlasError::InvalidDimension { .. })
    ));
}

#[test_case(0, 3; "zero rows")]
#[test_case(3, 0; "zero cols")]
fn test_zero_dimension_is_rejected(rows: usize, cols: usize) {
    let result = mat_vec_product(&[], &[], rows, cols);
    assert!(matches!(
        result,
        Err(LightningBlasError::InvalidDimension { .. })
    ));
}

#[test]
fn test_array_view_contiguous() {
    let matrix = arr2(&[[1.0, 0.0, 1.0], [0.0, 2.0, 0.0], [2.0, 0.0, 3.0]]);
    let vector = arr1(&[1.1, 2.2, 3.3]);
    let result = mat_vec_product_array(matrix.view(), vector.view()).unwrap();
    assert_close(result.as_slice().unwrap(), &[4.4, 4.4, 12.1]);
}

#[test]
fn test_array_view_transposed() {
    // a transposed view is not in standard layout and takes the copy path
    let matrix = arr2(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    let transposed = matrix.t();
    let vector = arr1(&[1.0, 10.0, 100.0]);
    let result = mat_vec_product_array(transposed, vector.view()).unwrap();
    assert_close(result.as_slice().unwrap(), &[321.0, 654.0]);
}

#[test]
fn test_array_view_length_mismatch() {
    let matrix: Array2<f64> = Array2::zeros((3, 3));
    let vector = arr1(&[1.0, 2.0]);
    let result = mat_vec_product_array(matrix.view(), vector.view());
    assert!(matches!(
        result,
        Err(LightningBlasError::InvalidDimension { .. })
    ));
}
