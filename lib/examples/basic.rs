/// Basic example: Convert a generated test image to an ASCII banner
///
/// Draws a circle on a gray background and prints it as text and as SVG
/// `<tspan>` rows.
use std::path::Path;

use ascii_banner::{
    BannerConfig, ImageDecoder, LoadError, OutputFormat, convert_with, render,
};
use image::{DynamicImage, Rgba, RgbaImage};

/// Hands out an in-memory image instead of reading a file
struct TestPattern;

impl ImageDecoder for TestPattern {
    fn decode(&self, _path: &Path) -> Result<DynamicImage, LoadError> {
        let (width, height) = (400, 240);
        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        let radius = 90.0;

        let img = RgbaImage::from_fn(width, height, |x, y| {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // Dark disc
                Rgba([20, 20, 20, 255])
            } else if (dist - radius).abs() < 6.0 {
                // Mid-tone ring
                Rgba([120, 120, 120, 255])
            } else {
                // Light background
                Rgba([235, 235, 235, 255])
            }
        });

        Ok(DynamicImage::ImageRgba8(img))
    }
}

fn main() -> Result<(), ascii_banner::Error> {
    println!("ASCII Banner - Basic Example");
    println!("============================\n");

    let mut config = BannerConfig {
        width: 40,
        height: 16,
        ..Default::default()
    };

    let art = convert_with(&TestPattern, "test-pattern", &config)?;
    println!("{}\n", render(&art, &config));

    config.format = OutputFormat::Svg;
    println!("{}", render(&art, &config));

    Ok(())
}
