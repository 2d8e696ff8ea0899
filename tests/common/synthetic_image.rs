#![allow(dead_code)]

use image::{GrayImage, Luma};
use std::path::Path;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Dark filled disk centred on a white background.
pub fn disk_u8(width: usize, height: usize, radius: f32) -> Vec<u8> {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let mut img = vec![255u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img[y * width + x] = 10;
            }
        }
    }
    img
}

/// Write a row-major 8-bit buffer as a grayscale PNG.
pub fn write_gray_png(path: &Path, width: usize, height: usize, data: &[u8]) {
    let img = GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([data[y as usize * width + x as usize]])
    });
    img.save(path).expect("save synthetic png");
}
