mod common;

use common::synthetic_image::{checkerboard_u8, disk_u8, write_gray_png};
use hdl_bitmap::image::io::load_source_image;
use hdl_bitmap::normalize::normalize;
use hdl_bitmap::threshold::threshold;
use hdl_bitmap::{BitmapConverter, ConversionParams, DecodeError, TargetSize, Threshold};
use image::{Rgb, RgbImage};

const SCENARIO: &str = "\
type vader_bitmap_t is array(0 to 1) of std_logic_vector(1 downto 0);
constant DARK_VADER_BITMAP : vader_bitmap_t := (
  \"10\",
  \"01\"
);
";

fn converter(w: usize, h: usize, t: u8) -> BitmapConverter {
    BitmapConverter::new(ConversionParams {
        size: TargetSize::new(w, h).unwrap(),
        threshold: Threshold(t),
        ..Default::default()
    })
}

#[test]
fn two_by_two_png_produces_exact_declaration() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("diag.png");
    write_gray_png(&path, 2, 2, &[0, 255, 255, 0]);

    let out = converter(2, 2, 150).convert_path(&path).expect("convert");
    assert_eq!(out.declaration.to_string(), SCENARIO);
    assert!(out.report.timings.stage("load").is_some());
}

#[test]
fn every_row_has_width_digits_and_grammar_holds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checker.png");
    write_gray_png(&path, 120, 90, &checkerboard_u8(120, 90, 15));

    let (w, h) = (24, 10);
    let out = converter(w, h, 150).convert_path(&path).expect("convert");
    let lines = out.declaration.lines();
    assert_eq!(lines.len(), h + 3);
    assert_eq!(
        lines[0],
        format!(
            "type vader_bitmap_t is array(0 to {}) of std_logic_vector({} downto 0);",
            h - 1,
            w - 1
        )
    );
    assert_eq!(lines[1], "constant DARK_VADER_BITMAP : vader_bitmap_t := (");
    for (i, line) in lines[2..2 + h].iter().enumerate() {
        let last = i + 1 == h;
        let body = line.trim_start();
        let body = if last {
            assert!(!body.ends_with(','), "last row must not end with a comma");
            body
        } else {
            body.strip_suffix(',').expect("non-final row ends with a comma")
        };
        let digits = body
            .strip_prefix('"')
            .and_then(|b| b.strip_suffix('"'))
            .expect("row is quoted");
        assert_eq!(digits.len(), w);
        assert!(digits.chars().all(|c| c == '0' || c == '1'));
    }
    assert_eq!(lines[h + 2], ");");
}

#[test]
fn dark_disk_survives_downscale() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("disk.png");
    write_gray_png(&path, 256, 256, &disk_u8(256, 256, 80.0));

    let out = converter(64, 64, 150).convert_path(&path).expect("convert");
    let grid = &out.grid;
    assert!(grid.get(32, 32), "centre of the disk is ink");
    assert!(!grid.get(0, 0) && !grid.get(63, 63), "corners are background");
    // Disk area is pi * 20^2 ≈ 1257 pixels at 64x64.
    let ink = grid.ink_count();
    assert!((1100..1400).contains(&ink), "ink={ink}");
    // Symmetric source gives a symmetric bitmap.
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(grid.get(x, y), grid.get(63 - x, y), "mirror at ({x},{y})");
        }
    }
}

#[test]
fn color_input_goes_through_luma() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rgb.png");
    let mut img = RgbImage::new(3, 1);
    img.put_pixel(0, 0, Rgb([255, 0, 0])); // luma 76
    img.put_pixel(1, 0, Rgb([0, 255, 0])); // luma 150
    img.put_pixel(2, 0, Rgb([0, 0, 255])); // luma 29
    img.save(&path).expect("save png");

    let src = load_source_image(&path).expect("load");
    let gray = normalize(&src, TargetSize::new(3, 1).unwrap());
    assert_eq!(gray.data(), &[76, 150, 29]);
    let bits = threshold(gray.as_view(), Threshold(150));
    assert_eq!(bits.row(0), &[true, false, true]);
}

#[test]
fn output_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checker.png");
    write_gray_png(&path, 77, 51, &checkerboard_u8(77, 51, 7));

    let c = converter(64, 64, 150);
    let a = c.convert_path(&path).expect("convert").declaration.to_string();
    let b = c.convert_path(&path).expect("convert").declaration.to_string();
    assert_eq!(a, b);
}

#[test]
fn nonexistent_path_is_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vader.png");
    let err = converter(64, 64, 150)
        .convert_path(&path)
        .expect_err("missing input");
    assert!(matches!(err, DecodeError::NotFound { .. }));
    assert!(err.to_string().contains("vader.png"));
}
