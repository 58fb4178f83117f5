//! RGB and HSL derivation for normalized hex colors.
//!
//! Both color spaces are expressed on the same integer 0..=255 scale so they
//! can be combined into a single distance metric by the matcher. HSL is
//! computed from RGB normalized to [0, 1] and scaled back by 255 with
//! truncation toward zero.

use crate::hex::HexColor;
use serde::Serialize;

/// 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triplet on the 0..=255 scale.
///
/// Hue is signed: colors whose red channel dominates with blue above green
/// (magenta toward red) accumulate a negative hue, e.g. `#FF00FF` has
/// `h == -42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

impl Rgb {
    /// Splits the six digits of `hex` into three base-16 bytes.
    pub fn from_hex(hex: &HexColor) -> Rgb {
        let digits = hex.digits().as_bytes();
        Rgb {
            r: hex_byte(digits[0], digits[1]),
            g: hex_byte(digits[2], digits[3]),
            b: hex_byte(digits[4], digits[5]),
        }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: Rgb) -> i64 {
        let dr = i64::from(self.r) - i64::from(other.r);
        let dg = i64::from(self.g) - i64::from(other.g);
        let db = i64::from(self.b) - i64::from(other.b);
        dr * dr + dg * dg + db * db
    }
}

impl Hsl {
    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: Hsl) -> i64 {
        let dh = i64::from(self.h) - i64::from(other.h);
        let ds = i64::from(self.s) - i64::from(other.s);
        let dl = i64::from(self.l) - i64::from(other.l);
        dh * dh + ds * ds + dl * dl
    }
}

// HexColor guarantees ASCII hex digits, so the fallback is unreachable.
fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_nibble(hi) << 4) | hex_nibble(lo)
}

/// Converts RGB to HSL on the 0..=255 integer scale.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let min = r.min(g.min(b));
    let max = r.max(g.max(b));
    let delta = max - min;
    let l = (min + max) / 2.0;

    let s = if l > 0.0 && l < 1.0 {
        delta / if l < 0.5 { 2.0 * l } else { 2.0 - 2.0 * l }
    } else {
        0.0
    };

    let mut h = 0.0;
    if delta > 0.0 {
        if max == r && max != g {
            h += (g - b) / delta;
        }
        if max == g && max != b {
            h += 2.0 + (b - r) / delta;
        }
        if max == b && max != r {
            h += 4.0 + (r - g) / delta;
        }
        h /= 6.0;
    }

    Hsl {
        h: scale(h),
        s: scale(s),
        l: scale(l),
    }
}

/// Scales a unit value to 0..=255, truncating toward zero.
fn scale(v: f64) -> i32 {
    (v * 255.0).trunc() as i32
}

/// Convenience: RGB and HSL of a normalized color in one call.
pub fn rgb_and_hsl(hex: &HexColor) -> (Rgb, Hsl) {
    let rgb = Rgb::from_hex(hex);
    (rgb, rgb_to_hsl(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::normalize;

    fn rgb_of(raw: &str) -> Rgb {
        Rgb::from_hex(&normalize(raw).unwrap())
    }

    #[test]
    fn parses_each_channel() {
        assert_eq!(
            rgb_of("80FF0A"),
            Rgb {
                r: 0x80,
                g: 0xFF,
                b: 0x0A
            }
        );
    }

    #[test]
    fn shorthand_parses_doubled_digits() {
        assert_eq!(
            rgb_of("f0a"),
            Rgb {
                r: 0xFF,
                g: 0x00,
                b: 0xAA
            }
        );
    }

    #[test]
    fn black_is_all_zero() {
        assert_eq!(rgb_to_hsl(rgb_of("000000")), Hsl { h: 0, s: 0, l: 0 });
    }

    #[test]
    fn white_has_full_lightness_and_no_saturation() {
        assert_eq!(rgb_to_hsl(rgb_of("FFFFFF")), Hsl { h: 0, s: 0, l: 255 });
    }

    #[test]
    fn pure_red_truncates_half_lightness() {
        // l = 0.5 -> 127.5 -> 127
        assert_eq!(
            rgb_to_hsl(rgb_of("FF0000")),
            Hsl {
                h: 0,
                s: 255,
                l: 127
            }
        );
    }

    #[test]
    fn magenta_hue_goes_negative() {
        assert_eq!(
            rgb_to_hsl(rgb_of("FF00FF")),
            Hsl {
                h: -42,
                s: 255,
                l: 127
            }
        );
    }

    #[test]
    fn grays_have_zero_hue_and_saturation() {
        for raw in ["111111", "808080", "CCCCCC"] {
            let hsl = rgb_to_hsl(rgb_of(raw));
            assert_eq!(hsl.h, 0, "{raw}");
            assert_eq!(hsl.s, 0, "{raw}");
        }
    }

    #[test]
    fn rgb_distance_is_squared_euclidean() {
        let a = Rgb { r: 0, g: 0, b: 0 };
        let b = Rgb { r: 3, g: 4, b: 0 };
        assert_eq!(a.distance_sq(b), 25);
        assert_eq!(b.distance_sq(a), 25);
    }

    #[test]
    fn hsl_distance_handles_negative_hue() {
        let a = Hsl { h: -42, s: 0, l: 0 };
        let b = Hsl { h: 42, s: 0, l: 0 };
        assert_eq!(a.distance_sq(b), 84 * 84);
    }

    #[test]
    fn rgb_and_hsl_matches_separate_calls() {
        let hex = normalize("3C8D2F").unwrap();
        let (rgb, hsl) = rgb_and_hsl(&hex);
        assert_eq!(rgb, Rgb::from_hex(&hex));
        assert_eq!(hsl, rgb_to_hsl(rgb));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn saturation_and_lightness_stay_in_byte_range(r: u8, g: u8, b: u8) {
                let hsl = rgb_to_hsl(Rgb { r, g, b });
                prop_assert!((0..=255).contains(&hsl.s), "s = {}", hsl.s);
                prop_assert!((0..=255).contains(&hsl.l), "l = {}", hsl.l);
                prop_assert!((-255..=255).contains(&hsl.h), "h = {}", hsl.h);
            }

            #[test]
            fn hex_digits_round_trip_through_rgb(r: u8, g: u8, b: u8) {
                let hex = normalize(&format!("{r:02x}{g:02x}{b:02x}")).unwrap();
                prop_assert_eq!(Rgb::from_hex(&hex), Rgb { r, g, b });
            }
        }
    }
}
