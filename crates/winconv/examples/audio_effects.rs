//! Audio Filtering Examples
//!
//! This example demonstrates the 1-D filter chain on a synthetic signal:
//! - Bass emphasis via moving-average smoothing (both strategies)
//! - Treble emphasis via the complementary high-pass
//! - Volume changes, reversal, and a single-tap echo
//!
//! The signal is synthesized in place; reading and writing WAV files is the
//! caller's concern and stays outside the crate.

use winconv::prelude::*;

fn main() -> Result<(), FilterError> {
    println!("{}", "=".repeat(72));
    println!("winconv - Audio Filtering Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_bass_emphasis()?;
    example_2_treble_emphasis()?;
    example_3_volume_and_reversal()?;
    example_4_echo()?;

    Ok(())
}

// A second of low-frequency tone with a high-frequency flutter on top.
fn synthesize(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            0.6 * (2.0 * std::f64::consts::PI * 4.0 * t).sin()
                + 0.3 * (2.0 * std::f64::consts::PI * 90.0 * t).sin()
        })
        .collect()
}

fn peak(signal: &[f64]) -> f64 {
    signal.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()))
}

/// Example 1: Bass Emphasis
/// Smooths away the flutter with both moving-average strategies.
fn example_1_bass_emphasis() -> Result<(), FilterError> {
    println!("Example 1: Bass Emphasis");
    println!("{}", "-".repeat(72));

    let signal = synthesize(4096);

    let windowed = MovingAverage::new().window(101).build()?.smooth(&signal);
    let convolved = MovingAverage::new()
        .window(101)
        .strategy(Convolution)
        .build()?
        .smooth(&signal);

    println!("  input peak:       {:.4}", peak(&signal));
    println!("  windowed peak:    {:.4}", peak(&windowed));
    println!("  convolution peak: {:.4}", peak(&convolved));
    println!("  first sample (windowed vs. convolution): {:.4} vs. {:.4}",
        windowed[0], convolved[0]);
    println!();

    Ok(())
}

/// Example 2: Treble Emphasis
/// The high-pass complement of the bass result.
fn example_2_treble_emphasis() -> Result<(), FilterError> {
    println!("Example 2: Treble Emphasis");
    println!("{}", "-".repeat(72));

    let signal = synthesize(4096);
    let filter = MovingAverage::new().window(101).build()?;
    let treble = filter.emphasize_treble(&signal);

    println!("  input peak:  {:.4}", peak(&signal));
    println!("  treble peak: {:.4}", peak(&treble));
    println!();

    Ok(())
}

/// Example 3: Volume and Reversal
fn example_3_volume_and_reversal() -> Result<(), FilterError> {
    println!("Example 3: Volume and Reversal");
    println!("{}", "-".repeat(72));

    let signal = synthesize(4096);

    let louder = gain(&signal, 3.7);
    let quieter = gain(&signal, 0.25);
    let backwards = reverse(&signal);

    println!("  gain 3.7 peak:  {:.4} (clamping is left to the writer)", peak(&louder));
    println!("  gain 0.25 peak: {:.4}", peak(&quieter));
    println!("  reversed head == original tail: {}",
        backwards[0] == signal[signal.len() - 1]);
    println!();

    Ok(())
}

/// Example 4: Echo
/// A single delayed, attenuated copy superposed on the original.
fn example_4_echo() -> Result<(), FilterError> {
    println!("Example 4: Echo");
    println!("{}", "-".repeat(72));

    let signal = synthesize(4096);
    let echoed = Echo::new().delay(500).attenuation(0.5).build()?.apply(&signal);

    println!("  output length: {} (same as input)", echoed.len());
    println!("  sample 1000:   {:.4} -> {:.4}", signal[1000], echoed[1000]);
    println!();

    Ok(())
}
