/// Pixel filters applied to the large image
///
/// Each filter takes an amount in `0.0..=1.0`. An amount of zero returns
/// the image unchanged.

use image::{imageops, Rgba, RgbaImage};
use rand::Rng;

use crate::state::data::FilterInfo;

/// Ripple wavelength in pixels
const RIPPLE_WAVELENGTH: f64 = 40.0;
/// Ripple amplitude at full strength, in pixels
const RIPPLE_MAX_AMPLITUDE: f64 = 10.0;
/// Noise range at full strength, per channel
const NOISE_MAX_SPREAD: f64 = 64.0;

/// Rotate every pixel's hue by `amount` of a full turn
pub fn hue(img: &RgbaImage, amount: f64) -> RgbaImage {
    let degrees = (amount * 360.0).round() as i32;
    if degrees % 360 == 0 {
        return img.clone();
    }
    imageops::huerotate(img, degrees)
}

/// Shift rows sideways along a sine wave
pub fn ripple(img: &RgbaImage, amount: f64) -> RgbaImage {
    let amplitude = amount * RIPPLE_MAX_AMPLITUDE;
    if amplitude == 0.0 || img.width() == 0 {
        return img.clone();
    }

    let max_x = i64::from(img.width()) - 1;
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let phase = f64::from(y) / RIPPLE_WAVELENGTH * std::f64::consts::TAU;
        let offset = (amplitude * phase.sin()).round() as i64;
        let src_x = (i64::from(x) + offset).clamp(0, max_x) as u32;
        *img.get_pixel(src_x, y)
    })
}

/// Add uniform per-channel noise; alpha is left alone
pub fn noise<R: Rng>(img: &RgbaImage, amount: f64, rng: &mut R) -> RgbaImage {
    let spread = amount * NOISE_MAX_SPREAD;
    if spread == 0.0 {
        return img.clone();
    }

    let mut out = img.clone();
    for Rgba(pixel) in out.pixels_mut() {
        for channel in pixel.iter_mut().take(3) {
            let jitter = rng.random_range(-spread..=spread);
            *channel = (f64::from(*channel) + jitter).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Apply filters in list order. Unknown filter names are skipped.
pub fn apply_all<R: Rng>(img: &RgbaImage, filters: &[FilterInfo], rng: &mut R) -> RgbaImage {
    let mut out = img.clone();
    for filter in filters {
        out = match filter.name.as_str() {
            "Hue" => hue(&out, filter.amount),
            "Ripple" => ripple(&out, filter.amount),
            "Noise" => noise(&out, filter.amount, rng),
            other => {
                log::warn!("Skipping unknown filter {:?}", other);
                out
            }
        };
    }
    out
}
