//! Driver for the parallel matrix operations.
//!
//! `parmat [FILE ROWS COLS]` loads a CSV matrix, otherwise runs on
//! synthesized square matrices. Worker count and threshold come from
//! `PARMAT_WORKERS` / `PARMAT_SEQUENTIAL_THRESHOLD`.

use parmat::{Matrix, ParallelConfig};
use std::env;
use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ParallelConfig::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    if let [path, rows, cols] = args.as_slice() {
        let a: Matrix<i64> = Matrix::from_csv_path(path, rows.parse()?, cols.parse()?)?;
        let a = a.with_config(config);
        println!("Loaded {}x{} from {}:", a.rows(), a.cols(), path);
        print!("{}", a.render());

        let sum = (&a + &a)?;
        println!("\nA + A:");
        print!("{}", sum.render());

        let mut t = a.clone();
        t.transpose();
        println!("\nA^T:");
        print!("{}", t.render());
        return Ok(());
    }

    println!("=== Parallel Matrix Operations ===\n");
    println!(
        "Workers: {}, sequential threshold: {}\n",
        config.workers(),
        config.sequential_threshold()
    );

    let sizes = [256, 512, 1024];
    let iterations = 3;

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a = synth(size, size, 100)?.with_config(config);
        let b = synth(size, size, 37)?.with_config(config);

        let results = [
            ("add", bench(iterations, || drop(black_box(&a + &b)))),
            ("subtract", bench(iterations, || drop(black_box(&a - &b)))),
            ("scalar multiply", bench(iterations, || drop(black_box(3.0 * &a)))),
            ("transpose (cyclic)", bench(iterations, || drop(black_box(a.transposed())))),
            (
                "transpose (direct)",
                bench(iterations, || {
                    let mut t = a.clone();
                    black_box(t.transpose_direct());
                }),
            ),
        ];

        for (i, (name, time_ms)) in results.iter().enumerate() {
            println!("{}. {:20} {:8.2} ms", i + 1, name, time_ms);
        }

        let mut t = a.transposed();
        t.transpose();
        println!("transpose involution holds: {}\n", t == a);
    }

    Ok(())
}

fn synth(rows: usize, cols: usize, modulus: usize) -> parmat::Result<Matrix<f64>> {
    let data = (0..rows * cols).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(rows, cols, data)
}

/// Average wall time in ms over `iterations` runs after one warmup.
fn bench<F: FnMut()>(iterations: usize, mut f: F) -> f64 {
    f();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }
    total / iterations as f64 * 1000.0
}
