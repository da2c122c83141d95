use segcut::config;
use segcut::image::io::{load_rgb_image, save_mask_png, write_json_file};
use segcut::{DinicSolver, Matte, Segmenter, Trimap};
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "segment_demo".to_string());
    let config = config::parse_cli(&program)?;

    let image = load_rgb_image(&config.input_path)?;
    let trimap = Trimap::from_rect(image.w, image.h, config.rect);
    let matte = Matte::from_rect(image.w, image.h, config.rect);

    let segmenter = Segmenter::new(config.params);
    let (result, trace) = segmenter
        .run_pass_with_trace(&image, &trimap, &matte, &DinicSolver)
        .map_err(|e| format!("Segmentation failed: {e}"))?;

    println!(
        "{}x{}: foreground={} ({} clipped by matte), {:.3} ms",
        result.w, result.h, result.foreground_count, trace.solve.clipped_by_matte, result.latency_ms
    );
    for stage in &trace.timings.stages {
        println!("  {:<12} {:>8.3} ms", stage.label, stage.elapsed_ms);
    }

    if let Some(path) = &config.output.mask_out {
        save_mask_png(result.w, result.h, &result.mask, path)?;
        println!("Mask written to {}", path.display());
    }
    if let Some(path) = &config.output.trace_out {
        write_json_file(path, &trace)?;
        println!("Trace written to {}", path.display());
    }
    Ok(())
}
