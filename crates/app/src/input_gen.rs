//! Sample input generation for testing.
//!
//! When no input file is specified, we generate integer lines with
//! interesting compression characteristics: runs of repeated values, small
//! counter-like values, full-width magnitudes, and a share of
//! arbitrary-precision values past any machine word. This makes the
//! compression behavior visible in the printed summary.
//!
//! All randomness comes from a seeded ChaCha8 RNG: the same seed always
//! yields the same file.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` sample records as newline-terminated text.
///
/// The output goes through the same line parser as any user-supplied file.
pub fn generate_sample_text(seed: u64, count: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = String::new();

    let mut remaining = count;
    while remaining > 0 {
        let run = remaining.min(rng.gen_range(1..=64));

        match rng.gen_range(0..10u8) {
            // 30% runs of one repeated value (highly compressible)
            0..=2 => {
                let value = rng.gen_range(-999i64..=999);
                for _ in 0..run {
                    push_line(&mut out, &value.to_string());
                }
            }

            // 30% small counter-like magnitudes
            3..=5 => {
                for _ in 0..run {
                    push_line(&mut out, &rng.gen_range(-100i64..=100).to_string());
                }
            }

            // 20% full-width machine words
            6..=7 => {
                for _ in 0..run {
                    push_line(&mut out, &rng.gen::<i64>().to_string());
                }
            }

            // 20% arbitrary-precision values beyond i64
            _ => {
                for _ in 0..run {
                    push_line(&mut out, &big_decimal(&mut rng));
                }
            }
        }

        remaining -= run;
    }

    out
}

fn push_line(out: &mut String, value: &str) {
    out.push_str(value);
    out.push('\n');
}

/// A decimal literal of 20-40 digits with a nonzero leading digit.
fn big_decimal(rng: &mut ChaCha8Rng) -> String {
    let mut text = String::new();
    if rng.gen_bool(0.5) {
        text.push('-');
    }
    text.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 0..rng.gen_range(19..40usize) {
        text.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    text
}
