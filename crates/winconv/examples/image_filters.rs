//! Image Filtering Examples
//!
//! This example demonstrates the 2-D filters on a synthetic RGB test card:
//! - Box blur with both boundary policies
//! - Sobel edge detection
//! - Pixel-wise transforms (brightness, contrast, grayscale, chroma key,
//!   channel zeroing, shift, rotation)
//!
//! The image is synthesized in place; decoding and encoding image files is
//! the caller's concern and stays outside the crate.

use ndarray::Array3;
use winconv::prelude::*;

fn main() -> Result<(), FilterError> {
    println!("{}", "=".repeat(72));
    println!("winconv - Image Filtering Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_blur()?;
    example_2_edges()?;
    example_3_pixel_ops()?;
    example_4_geometry()?;

    Ok(())
}

// A test card: bright square on a dark field, with a green key stripe.
fn test_card() -> Array3<u8> {
    Array3::from_shape_fn((64, 64, 3), |(r, c, ch)| {
        if c < 4 {
            // Key stripe
            [0, 255, 1][ch]
        } else if (16..48).contains(&r) && (24..56).contains(&c) {
            220
        } else {
            40
        }
    })
}

/// Example 1: Box Blur
fn example_1_blur() -> Result<(), FilterError> {
    println!("Example 1: Box Blur");
    println!("{}", "-".repeat(72));

    let image = test_card();

    let zero = BoxBlur::new().kernel_size(5).build()?.apply_image(image.view())?;
    let reflect = BoxBlur::new()
        .kernel_size(5)
        .boundary(Reflect)
        .build()?
        .apply_image(image.view())?;

    println!("  corner under zero padding:  {}", zero[[0, 10, 0]]);
    println!("  corner under reflection:    {}", reflect[[0, 10, 0]]);
    println!();

    Ok(())
}

/// Example 2: Edge Detection
fn example_2_edges() -> Result<(), FilterError> {
    println!("Example 2: Edge Detection");
    println!("{}", "-".repeat(72));

    let image = test_card();
    let edges = detect_edges_rgb(image.view())?;

    let strong = edges.iter().filter(|&&e| e > 128).count();
    println!("  edge plane: {:?}, strong pixels: {}", edges.dim(), strong);
    println!();

    Ok(())
}

/// Example 3: Pixel Operations
fn example_3_pixel_ops() -> Result<(), FilterError> {
    println!("Example 3: Pixel Operations");
    println!("{}", "-".repeat(72));

    let image = test_card();

    let brighter = adjust_brightness(image.view(), 50);
    let contrasted = adjust_contrast(image.view(), 1.5)?;
    let negative = invert(image.view());
    let gray = to_grayscale(image.view(), Rec601)?;
    let keyed = chroma_key(image.view(), [0, 255, 1])?;
    let no_red = zero_channel(image.view(), Red)?;

    let transparent = keyed
        .index_axis(ndarray::Axis(2), 3)
        .iter()
        .filter(|&&a| a == 0)
        .count();

    println!("  brightness +50 sample: {} -> {}", image[[0, 10, 0]], brighter[[0, 10, 0]]);
    println!("  contrast x1.5 sample:  {} -> {}", image[[20, 30, 0]], contrasted[[20, 30, 0]]);
    println!("  inverted sample:       {} -> {}", image[[0, 10, 0]], negative[[0, 10, 0]]);
    println!("  gray plane:            {:?}", gray.dim());
    println!("  keyed-out pixels:      {}", transparent);
    println!("  red channel zeroed:    {}", no_red[[20, 30, 0]]);
    println!();

    Ok(())
}

/// Example 4: Geometry
fn example_4_geometry() -> Result<(), FilterError> {
    println!("Example 4: Geometry");
    println!("{}", "-".repeat(72));

    let image = test_card();

    let shifted = shift(image.view(), 50, 30);
    let rotated = rotate(image.view(), 90)?;

    println!("  shifted canvas: {:?} -> {:?}", image.dim(), shifted.dim());
    println!("  rotated canvas: {:?} -> {:?}", image.dim(), rotated.dim());
    println!();

    Ok(())
}
