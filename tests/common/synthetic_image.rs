use segcut::image::ImageRgbF32;
use segcut::Rect;

/// Generates a bright rectangular block on a dark background.
///
/// A small deterministic per-channel dither keeps the color covariance of
/// both regions full-rank without blurring the block boundary.
pub fn block_rgb(width: usize, height: usize, block: Rect, dark: f32, bright: f32) -> ImageRgbF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageRgbF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let inside =
                x >= block.x && x < block.x + block.w && y >= block.y && y < block.y + block.h;
            let base = if inside { bright } else { dark };
            let r = base + ((x * 31 + y * 17) % 7) as f32 - 3.0;
            let g = base + ((x * 13 + y * 29) % 7) as f32 - 3.0;
            let b = base + ((x * 23 + y * 11) % 7) as f32 - 3.0;
            img.set(x, y, [r, g, b]);
        }
    }
    img
}

/// True for every pixel inside `rect`.
pub fn rect_mask(width: usize, height: usize, rect: Rect) -> Vec<bool> {
    let mut mask = vec![false; width * height];
    for y in 0..height {
        for x in 0..width {
            mask[y * width + x] =
                x >= rect.x && x < rect.x + rect.w && y >= rect.y && y < rect.y + rect.h;
        }
    }
    mask
}
