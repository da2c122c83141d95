use segcut::prelude::*;

fn main() {
    // Demo stub: segments a synthetic bright block on a dark background
    let w = 64usize;
    let h = 48usize;
    let block = Rect {
        x: 24,
        y: 16,
        w: 16,
        h: 16,
    };

    let mut image = ImageRgbF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let inside = x >= block.x && x < block.x + block.w && y >= block.y && y < block.y + block.h;
            let base = if inside { 220.0 } else { 30.0 };
            let r = base + ((x * 31 + y * 17) % 7) as f32 - 3.0;
            let g = base + ((x * 13 + y * 29) % 7) as f32 - 3.0;
            let b = base + ((x * 23 + y * 11) % 7) as f32 - 3.0;
            image.set(x, y, [r, g, b]);
        }
    }

    let working_rect = Rect {
        x: 20,
        y: 12,
        w: 24,
        h: 24,
    };
    let trimap = Trimap::from_rect(w, h, working_rect);
    let matte = Matte::from_rect(w, h, working_rect);

    let segmenter = Segmenter::new(SegmenterParams::default());
    match segmenter.run_pass(&image, &trimap, &matte, &DinicSolver) {
        Ok(result) => println!(
            "foreground={} latency_ms={:.3}",
            result.foreground_count, result.latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
