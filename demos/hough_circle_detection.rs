use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use env_logger::Builder;
use image::open;
use log::info;

use hough_circle::{
    hough_circle_transform_with_params, visualize_circles, CannyParams, EdgeMap, HoughCircleParams,
};

/// Hough circle transform with custom parameters.
#[derive(Parser, Debug)]
struct Args {
    /// Path to input image.
    #[arg(long, default_value = "test_image/image_hough_small.png")]
    image: PathBuf,
    /// Minimum circle radius.
    #[arg(long, default_value_t = 30)]
    r_min: u32,
    /// Maximum circle radius.
    #[arg(long, default_value_t = 40)]
    r_max: u32,
    /// Accumulator threshold.
    #[arg(long, default_value_t = 150)]
    threshold: u32,
    /// Canny low hysteresis threshold.
    #[arg(long, default_value_t = 50.0)]
    canny_low: f32,
    /// Canny high hysteresis threshold.
    #[arg(long, default_value_t = 150.0)]
    canny_high: f32,
    /// Vote on a single thread.
    #[arg(long)]
    sequential: bool,
    /// Directory receiving edges.png and hough_circles.png.
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_default_env().format_timestamp_nanos().init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.output_dir)?;

    let image = open(&args.image)?;
    let gray = image.to_luma8();
    info!("Loaded image: {}x{}", gray.width(), gray.height());

    let canny = CannyParams {
        low_threshold: args.canny_low,
        high_threshold: args.canny_high,
    };
    let edges = EdgeMap::from_canny(&gray, &canny);
    info!("Edge pixels: {}", edges.edge_count());

    let params = HoughCircleParams::new(args.r_min, args.r_max, args.threshold)
        .with_parallel(!args.sequential);

    let instance = Instant::now();
    let circles = hough_circle_transform_with_params(&edges, &params)?;
    info!("Transform took {:?}", instance.elapsed());
    info!("Found {} circle candidates", circles.len());

    let edges_path = args.output_dir.join("edges.png");
    let output_path = args.output_dir.join("hough_circles.png");
    edges.to_gray_image().save(&edges_path)?;
    visualize_circles(&image.to_rgb8(), &circles).save(&output_path)?;

    info!("Saved edges image to {}", edges_path.display());
    info!("Saved Hough circles result to {}", output_path.display());
    Ok(())
}
