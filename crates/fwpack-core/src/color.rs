use std::fmt;

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Color in HSV space, every component on the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub sat: f64,
    pub val: f64,
}

/// Scales unit-interval channels to 0-255, truncating toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_from_unit(r: f64, g: f64, b: f64) -> Rgb {
    Rgb {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}

/// Formats a color as a C initializer element, e.g. `{191, 0, 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initializer(pub Rgb);

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "{{{r}, {g}, {b}}}")
    }
}

/// Six sector HSV to RGB conversion. Returns channels on the unit interval.
///
/// A hue of 1.0 wraps around to red, same as 0.0.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv2rgb_unit(hsv: Hsv) -> (f64, f64, f64) {
    let Hsv { hue, sat, val } = hsv;

    if sat == 0.0 {
        return (val, val, val);
    }

    let sector = (hue * 6.0) as i64;
    let f = hue * 6.0 - sector as f64;
    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * f);
    let t = val * (1.0 - sat * (1.0 - f));

    match sector.rem_euclid(6) {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    }
}

pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = hsv2rgb_unit(hsv);
    rgb_from_unit(r, g, b)
}
