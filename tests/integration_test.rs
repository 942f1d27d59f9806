//! Integration tests for the complete analysis pipeline
//!
//! Exercises decode -> metric extraction -> scoring end to end on small
//! synthetic images encoded in memory, so no on-disk assets are needed.

use gemba_scan::{
    analyze_image, decode_image, extract_metrics, AnalysisError, ColorSample,
};
use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use std::io::Cursor;

fn encode_png(img: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn solid_rgb_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode_png(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
        width,
        height,
        Rgb(color),
    )))
}

// ============================================================================
// Reference images
// ============================================================================

#[test]
fn test_uniform_gray_image() {
    let bytes = solid_rgb_png(2, 2, [128, 128, 128]);

    let metrics = extract_metrics(&decode_image(&bytes).unwrap());
    assert_eq!(metrics.contrast, 0.0);
    assert_eq!(metrics.brightness, 128.0);
    assert_eq!(
        metrics.dominant_colors,
        vec![(ColorSample::rgb(128, 128, 128), 4)]
    );

    let result = analyze_image(&bytes).unwrap();
    // Zero contrast: Seiri bottoms out with both low-contrast messages.
    assert_eq!(result.seiri.score, 0);
    assert_eq!(result.seiri.recommendations.len(), 2);
    // Moderate lighting band, no floor adjustment.
    assert_eq!(result.seiton.score, 50);
    // Neutral palette.
    assert_eq!(result.seiso.score, 100);
    assert_eq!(result.seiketsu.score, 60);
    assert_eq!(result.shitsuke.score, 70);
    // (0 + 50 + 100 + 60 + 70) / 5
    assert_eq!(result.overall_score, 56);
}

#[test]
fn test_pure_black_image_floors_seiton() {
    let result = analyze_image(&solid_rgb_png(4, 4, [0, 0, 0])).unwrap();

    // Raw formula gives 0; the low-light rule forces max(30, 0 - 20).
    assert_eq!(result.seiton.score, 30);
    assert_eq!(result.seiton.recommendations.len(), 1);
    // The floored value, not the raw 0, feeds the overall average.
    assert_eq!(result.overall_score as u32, (0u32 + 30 + 100 + 60 + 70) / 5);
}

#[test]
fn test_pure_white_image_optimal_lighting() {
    let result = analyze_image(&solid_rgb_png(4, 4, [255, 255, 255])).unwrap();

    assert_eq!(result.seiton.score, 100);
    assert_eq!(
        result.seiton.recommendations,
        vec!["Optimal lighting. The arrangement is clearly visible.".to_string()]
    );
}

#[test]
fn test_grayscale_image_placeholders() {
    let bytes = encode_png(DynamicImage::ImageLuma8(ImageBuffer::from_pixel(
        3,
        3,
        Luma([128u8]),
    )));

    let metrics = extract_metrics(&decode_image(&bytes).unwrap());
    assert_eq!(metrics.dominant_colors, vec![(ColorSample::gray(128), 0); 3]);
    assert_eq!(metrics.saturation, 0.0);

    let result = analyze_image(&bytes).unwrap();
    assert_eq!(result.seiso.score, 100);
    assert_eq!(
        result.seiso.recommendations[0],
        "Consistent color palette. The space looks visually clean."
    );
}

#[test]
fn test_saturated_image_penalizes_seiso() {
    let result = analyze_image(&solid_rgb_png(2, 2, [255, 0, 0])).unwrap();

    // Pure red: saturation 255 -> raw 70, then max(40, 70 - 15).
    assert_eq!(result.seiso.score, 55);
    assert_eq!(result.seiso.recommendations.len(), 2);
    // Red channel spread saturates the contrast cap.
    assert_eq!(result.seiri.score, 100);
}

#[test]
fn test_single_pixel_image_does_not_crash() {
    let result = analyze_image(&solid_rgb_png(1, 1, [42, 42, 42])).unwrap();
    assert_eq!(result.seiri.score, 0);
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_non_image_bytes_fail_with_decode_error() {
    let result = analyze_image(b"just some text, not an image");

    let err = result.unwrap_err();
    let AnalysisError::DecodeError { ref message, .. } = err;
    // The message survives verbatim in the Display output for the boundary.
    assert!(err.to_string().contains(message));
    assert!(err.to_string().starts_with("Failed to decode image"));
}

#[test]
fn test_truncated_image_fails() {
    let mut bytes = solid_rgb_png(16, 16, [10, 20, 30]);
    bytes.truncate(24);
    assert!(analyze_image(&bytes).is_err());
}

// ============================================================================
// Determinism and serialization
// ============================================================================

#[test]
fn test_pipeline_is_idempotent() {
    let bytes = solid_rgb_png(8, 8, [13, 37, 200]);

    let first = analyze_image(&bytes).unwrap();
    let second = analyze_image(&bytes).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_json_contract_shape() {
    let result = analyze_image(&solid_rgb_png(2, 2, [90, 90, 90])).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 6);
    for key in ["seiri", "seiton", "seiso", "seiketsu", "shitsuke"] {
        let category = obj[key].as_object().unwrap();
        assert_eq!(category.len(), 2);
        assert!(category["score"].is_u64());
        assert!(!category["recommendations"].as_array().unwrap().is_empty());
    }
    assert!(obj["overall_score"].is_u64());
}

#[test]
fn test_overall_is_truncated_mean() {
    for color in [[0, 0, 0], [128, 128, 128], [255, 0, 0], [7, 200, 90]] {
        let result = analyze_image(&solid_rgb_png(3, 3, color)).unwrap();
        let sum = result.seiri.score as u32
            + result.seiton.score as u32
            + result.seiso.score as u32
            + result.seiketsu.score as u32
            + result.shitsuke.score as u32;
        assert_eq!(result.overall_score as u32, sum / 5);
    }
}

// ============================================================================
// Dominant colors through a real encode/decode cycle
// ============================================================================

#[test]
fn test_dominant_color_tie_break_survives_decode() {
    // Two colors, two pixels each; the first-scanned color must rank first.
    let img = ImageBuffer::from_fn(2, 2, |x, _| {
        if x == 0 {
            Rgb([0u8, 0, 255])
        } else {
            Rgb([255u8, 0, 0])
        }
    });
    let bytes = encode_png(DynamicImage::ImageRgb8(img));

    let metrics = extract_metrics(&decode_image(&bytes).unwrap());
    assert_eq!(
        metrics.dominant_colors,
        vec![
            (ColorSample::rgb(0, 0, 255), 2),
            (ColorSample::rgb(255, 0, 0), 2),
        ]
    );
}

#[test]
fn test_metric_invariants_on_noisy_image() {
    let img = ImageBuffer::from_fn(32, 32, |x, y| {
        Rgb([
            (x * 8) as u8,
            (y * 8) as u8,
            ((x * 7 + y * 13) % 256) as u8,
        ])
    });
    let bytes = encode_png(DynamicImage::ImageRgb8(img));

    let metrics = extract_metrics(&decode_image(&bytes).unwrap());
    assert!(metrics.brightness >= 0.0 && metrics.brightness <= 255.0);
    assert!(metrics.contrast >= 0.0 && metrics.contrast <= 100.0);
    assert!(metrics.saturation >= 0.0 && metrics.saturation <= 255.0);
    assert!(metrics.dominant_colors.len() <= 3);
    assert_eq!(metrics.image_size, (32, 32));
}
