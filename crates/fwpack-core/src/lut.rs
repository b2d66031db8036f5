//! Hue sweep lookup tables for LED firmware.
//!
//! The table is rendered as C initializer elements, one color per line, so it
//! can be `#include`d straight into an array definition.

use std::io::Write;

use log::*;

use crate::{
    color::{hsv2rgb, Hsv, Initializer, Rgb},
    FwpackError,
};

/// A sweep over the full hue circle at fixed saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedTable {
    /// Number of colors in the table
    pub count: usize,
    pub sat: f64,
    pub val: f64,
}

impl LedTable {
    /// 250 fully saturated colors at 75% brightness.
    pub const TNG: LedTable = LedTable {
        count: 250,
        sat: 1.0,
        val: 0.75,
    };

    /// Colors ordered from hue 1.0 down to hue 0.0.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        let steps = self.count.saturating_sub(1).max(1) as f64;

        (0..self.count).rev().map(move |i| {
            hsv2rgb(Hsv {
                hue: i as f64 / steps,
                sat: self.sat,
                val: self.val,
            })
        })
    }

    pub fn write(&self, mut output: impl Write) -> Result<(), FwpackError> {
        debug!(
            "Writing {} colors, saturation {}, value {}",
            self.count, self.sat, self.val
        );

        for color in self.colors() {
            writeln!(output, "{},", Initializer(color)).map_err(FwpackError::FailedToWrite)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb { r: 191, g: 0, b: 0 };

    #[test]
    fn endpoints_are_red() {
        let colors: Vec<Rgb> = LedTable::TNG.colors().collect();

        assert_eq!(colors.len(), 250);
        assert_eq!(colors.first(), Some(&RED));
        assert_eq!(colors.last(), Some(&RED));
    }

    #[test]
    fn channels_bounded_by_value() {
        // val 0.75 never exceeds 191
        for color in LedTable::TNG.colors() {
            assert!(color.r <= 191 && color.g <= 191 && color.b <= 191, "{color:?}");
        }
    }

    #[test]
    fn one_line_per_color() {
        let mut out = Vec::new();
        LedTable::TNG.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 250);
        assert!(text.lines().all(|line| line.starts_with('{') && line.ends_with("},")));
        assert_eq!(text.lines().next(), Some("{191, 0, 0},"));
        assert_eq!(text.lines().last(), Some("{191, 0, 0},"));
    }

    #[test]
    fn degenerate_counts() {
        let empty = LedTable {
            count: 0,
            ..LedTable::TNG
        };
        assert_eq!(empty.colors().count(), 0);

        let single = LedTable {
            count: 1,
            ..LedTable::TNG
        };
        assert_eq!(single.colors().collect::<Vec<_>>(), [RED]);
    }
}
