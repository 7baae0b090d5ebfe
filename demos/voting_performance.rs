use std::time::{Duration, Instant};

use env_logger::Builder;
use log::info;

use hough_circle::{cast_votes, cast_votes_parallel, Accumulator, AngleTable, EdgeMap};

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    let (width, height) = (320u32, 240u32);
    let (r_min, r_max) = (10u32, 40u32);

    // Several concentric and offset rings for a realistic edge density
    let rings: [(f64, f64, f64); 4] = [
        (80.0, 80.0, 30.0),
        (200.0, 120.0, 25.0),
        (200.0, 120.0, 38.0),
        (150.0, 190.0, 15.0),
    ];
    let edges = EdgeMap::from_fn(width, height, |x, y| {
        rings.iter().any(|&(cx, cy, r)| {
            ((x as f64 - cx).hypot(y as f64 - cy) - r).abs() < 0.5
        })
    });
    info!(
        "Synthetic edge map {}x{} with {} edge pixels, radii {}..={}",
        width,
        height,
        edges.edge_count(),
        r_min,
        r_max
    );

    let angles = AngleTable::new();
    let runs = 5;
    let mut sequential_times = Vec::new();
    let mut parallel_times = Vec::new();

    for i in 0..runs {
        info!("Run {}/{}", i + 1, runs);

        let mut sequential = match Accumulator::new(width, height, r_min, r_max) {
            Ok(acc) => acc,
            Err(err) => {
                info!("Cannot allocate accumulator: {err}");
                return;
            }
        };
        let mut parallel = sequential.clone();

        let start = Instant::now();
        let cast_seq = cast_votes(&edges, &mut sequential, &angles);
        let sequential_time = start.elapsed();

        let start = Instant::now();
        let cast_par = cast_votes_parallel(&edges, &mut parallel, &angles);
        let parallel_time = start.elapsed();

        info!(
            "  Sequential: {:?}, Parallel: {:?}, Speedup: {:.2}x",
            sequential_time,
            parallel_time,
            sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
        );
        info!(
            "  Votes - Sequential: {}, Parallel: {}, identical accumulators: {}",
            cast_seq,
            cast_par,
            sequential == parallel
        );

        sequential_times.push(sequential_time);
        parallel_times.push(parallel_time);
    }

    let avg_sequential = sequential_times.iter().sum::<Duration>() / runs;
    let avg_parallel = parallel_times.iter().sum::<Duration>() / runs;

    info!("=== Performance Summary ===");
    info!("Average Sequential Time: {:?}", avg_sequential);
    info!("Average Parallel Time: {:?}", avg_parallel);
    info!(
        "Average Speedup: {:.2}x",
        avg_sequential.as_secs_f64() / avg_parallel.as_secs_f64()
    );
}
