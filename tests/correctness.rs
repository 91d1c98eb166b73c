use parmat::matrix::transpose::transpose;
use parmat::config::hardware_concurrency;
use parmat::{Matrix, MatrixError, ParallelConfig, add, scalar_multiply, subtract};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_matrices_equal(expected: &[i64], actual: &Matrix<i64>, name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for (i, (e, a)) in expected.iter().zip(actual.as_slice()).enumerate() {
        assert_eq!(e, a, "{}: mismatch at index {}: expected {}, got {}", name, i, e, a);
    }
}

fn pattern(rows: usize, cols: usize, seed: i64) -> Matrix<i64> {
    let data = (0..(rows * cols) as i64).map(|i| (i * seed) % 97 - 48).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn naive_binary(a: &Matrix<i64>, b: &Matrix<i64>, op: fn(i64, i64) -> i64) -> Vec<i64> {
    a.as_slice().iter().zip(b.as_slice()).map(|(&x, &y)| op(x, y)).collect()
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_add() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();

    let sum = add(&a, &b).unwrap();
    assert_eq!(sum, Matrix::from_vec(2, 2, vec![6, 8, 10, 12]).unwrap());
}

#[test]
fn test_2x2_subtract() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();

    let diff = subtract(&a, &b).unwrap();
    assert_eq!(diff, Matrix::from_vec(2, 2, vec![-4, -4, -4, -4]).unwrap());
}

#[test]
fn test_2x2_scalar_both_sides() {
    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();

    let left = 3 * &a;
    let right = &a * 3;
    assert_eq!(left, Matrix::from_vec(2, 2, vec![3, 6, 9, 12]).unwrap());
    assert_eq!(left, right);
}

#[test]
fn test_2x3_transpose() {
    let mut a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    a.transpose();

    assert_eq!(a.rows(), 3);
    assert_eq!(a.cols(), 2);
    assert_eq!(a, Matrix::from_vec(3, 2, vec![1, 4, 2, 5, 3, 6]).unwrap());
}

// ============================================================
// Error handling
// ============================================================

#[test]
fn test_mismatched_shapes() {
    let a = pattern(2, 3, 5);
    let b = pattern(3, 2, 5);

    for result in [&a + &b, &a - &b] {
        match result {
            Err(MatrixError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, (2, 3));
                assert_eq!(actual, (3, 2));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }
}

#[test]
fn test_csv_errors_are_explicit() {
    let missing = std::env::temp_dir().join("parmat-correctness-missing.csv");
    assert!(matches!(
        Matrix::<i64>::from_csv_path(&missing, 2, 2),
        Err(MatrixError::SourceUnavailable { .. })
    ));

    assert!(matches!(
        Matrix::<i64>::from_csv_str("1,2\n3,x", 2, 2),
        Err(MatrixError::MalformedToken { row: 1, col: 1, .. })
    ));
}

// ============================================================
// Threshold boundary (10 sequential, 11 parallel)
// ============================================================

#[test]
fn test_threshold_boundary() {
    init_logger();

    for (rows, cols) in [(2, 5), (1, 10), (1, 11), (11, 1), (3, 4)] {
        let a = pattern(rows, cols, 7).with_workers(4);
        let b = pattern(rows, cols, 3).with_workers(4);

        assert_matrices_equal(
            &naive_binary(&a, &b, |x, y| x + y),
            &add(&a, &b).unwrap(),
            &format!("add_{}x{}", rows, cols),
        );
        assert_matrices_equal(
            &naive_binary(&a, &b, |x, y| x - y),
            &subtract(&a, &b).unwrap(),
            &format!("subtract_{}x{}", rows, cols),
        );
        let scaled: Vec<i64> = a.as_slice().iter().map(|&x| -2 * x).collect();
        assert_matrices_equal(&scaled, &scalar_multiply(-2, &a), &format!("scale_{}x{}", rows, cols));
    }
}

// ============================================================
// Determinism across worker counts
// ============================================================

#[test]
fn test_worker_count_determinism() {
    init_logger();

    let a = pattern(37, 29, 11);
    let b = pattern(37, 29, 13);
    let with = |m: &Matrix<i64>, w: usize| m.clone().with_config(ParallelConfig::new(w));

    let baseline_sum = add(&with(&a, 1), &b).unwrap();
    let baseline_diff = subtract(&with(&a, 1), &b).unwrap();
    let baseline_scaled = scalar_multiply(5, &with(&a, 1));
    let mut baseline_t = with(&a, 1);
    baseline_t.transpose();

    for workers in [2, hardware_concurrency()] {
        assert_eq!(add(&with(&a, workers), &b).unwrap(), baseline_sum);
        assert_eq!(subtract(&with(&a, workers), &b).unwrap(), baseline_diff);
        assert_eq!(scalar_multiply(5, &with(&a, workers)), baseline_scaled);

        let mut t = with(&a, workers);
        t.transpose();
        assert_eq!(t, baseline_t);
    }
}

#[test]
fn test_float_determinism() {
    let data: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();
    let a = Matrix::from_vec(25, 40, data).unwrap();

    let one = (&a.clone().with_workers(1) + &a).unwrap();
    let many = (&a.clone().with_workers(7) + &a).unwrap();
    let bits = |m: &Matrix<f64>| m.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&one), bits(&many));
}

// ============================================================
// Transpose
// ============================================================

#[test]
fn test_transpose_non_square() {
    let shapes = [(1, 7), (7, 1), (2, 9), (9, 2), (13, 17), (64, 3), (100, 50)];

    for (rows, cols) in shapes {
        let a = pattern(rows, cols, 17).with_workers(6);

        let mut expected = vec![0; rows * cols];
        transpose(a.as_slice(), &mut expected, rows, cols);

        let t = a.transposed();
        assert_eq!(t.shape(), (cols, rows));
        assert_matrices_equal(&expected, &t, &format!("transpose_{}x{}", rows, cols));
    }
}

#[test]
fn test_transpose_many_workers_tiny_matrix() {
    let mut a = Matrix::from_vec(1, 2, vec![9, 8]).unwrap().with_config(
        ParallelConfig::new(64).with_sequential_threshold(0),
    );
    a.transpose();
    assert_eq!(a.shape(), (2, 1));
    assert_eq!(a.as_slice(), &[9, 8]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_parallel_matches_naive(
        rows in 1usize..20,
        cols in 1usize..20,
        workers in 1usize..12,
        seed in 1i64..50,
        k in -1_000i64..1_000,
    ) {
        let a = pattern(rows, cols, seed).with_workers(workers);
        let b = pattern(rows, cols, seed + 1);

        prop_assert_eq!(add(&a, &b).unwrap().into_vec(), naive_binary(&a, &b, |x, y| x + y));
        prop_assert_eq!(subtract(&a, &b).unwrap().into_vec(), naive_binary(&a, &b, |x, y| x - y));

        let scaled: Vec<i64> = a.as_slice().iter().map(|&x| k * x).collect();
        prop_assert_eq!(scalar_multiply(k, &a).into_vec(), scaled.clone());
        prop_assert_eq!((&a * k).into_vec(), scaled);
    }

    #[test]
    fn prop_transpose_involution(rows in 1usize..40, cols in 1usize..40, workers in 1usize..12) {
        let original = pattern(rows, cols, 31).with_workers(workers);

        let mut m = original.clone();
        m.transpose();
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(m[(c, r)], original[(r, c)]);
            }
        }
        m.transpose();
        prop_assert_eq!(m, original);
    }
}
