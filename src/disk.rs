//! Cell values and the disk glyph mapping.
//!
//! A cell holds one signed fixed-point number, stored in half-units so the
//! five canonical values are exact:
//!
//! | value        | real | stored |
//! |--------------|-----:|-------:|
//! | `EMPTY`      |  0   |   0    |
//! | `LIGHT`      | +1   |  +2    |
//! | `DARK`       | -1   |  -2    |
//! | `LIGHT_HINT` | +0.5 |  +1    |
//! | `DARK_HINT`  | -0.5 |  -1    |
//!
//! The sign names the player. Magnitude 1 is a placed disk, magnitude 0.5
//! is a hint that the player to move may play on that cell.

use std::fmt;
use std::ops::Neg;

/// Glyph shown for a light disk.
pub const LIGHT_GLYPH: &str = "⚪";

/// Glyph shown for a dark disk.
pub const DARK_GLYPH: &str = "⚫";

/// Map any signed number to a glyph by its sign alone.
///
/// Positive values are light, negative values are dark, and zero (or NaN)
/// has no glyph.
pub fn glyph_for_number(value: f64) -> &'static str {
    if value > 0.0 {
        LIGHT_GLYPH
    } else if value < 0.0 {
        DARK_GLYPH
    } else {
        ""
    }
}

/// The content of one board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Disk(i8);

impl Disk {
    pub const EMPTY: Disk = Disk(0);
    pub const LIGHT: Disk = Disk(2);
    pub const DARK: Disk = Disk(-2);
    pub const LIGHT_HINT: Disk = Disk(1);
    pub const DARK_HINT: Disk = Disk(-1);

    /// Build a value from a raw count of half-units.
    pub const fn from_halves(halves: i8) -> Disk {
        Disk(halves)
    }

    /// Raw count of half-units.
    pub const fn halves(self) -> i8 {
        self.0
    }

    /// Real value (`LIGHT` is `1.0`, `DARK_HINT` is `-0.5`).
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// `1` for light, `-1` for dark, `0` for empty.
    pub fn signum(self) -> i8 {
        self.0.signum()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for exactly `LIGHT` or `DARK`.
    pub fn is_disk(self) -> bool {
        self == Disk::LIGHT || self == Disk::DARK
    }

    /// True when the value carries a half-unit fraction.
    pub fn is_hint(self) -> bool {
        self.0 % 2 != 0
    }

    /// The other player's value. `EMPTY` stays `EMPTY`.
    pub fn opponent(self) -> Disk {
        -self
    }

    /// Hint value carrying this value's sign (`LIGHT` gives `LIGHT_HINT`).
    pub fn as_hint(self) -> Disk {
        Disk(self.signum())
    }

    /// `sign(v) * floor(|v|)`: drop the hint fraction, keep whole disks.
    pub fn without_hint(self) -> Disk {
        // Integer division truncates toward zero, which is floor on |v|.
        Disk(self.0 / 2 * 2)
    }

    /// Display glyph, chosen by sign like [`glyph_for_number`].
    pub fn glyph(self) -> &'static str {
        glyph_for_number(self.as_f64())
    }

    /// Human name of a player value: `"light"`, `"dark"` or `"none"`.
    pub fn player_name(self) -> &'static str {
        match self.signum() {
            1 => "light",
            -1 => "dark",
            _ => "none",
        }
    }
}

impl Neg for Disk {
    type Output = Disk;

    fn neg(self) -> Disk {
        Disk(self.0.saturating_neg())
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!(Disk::EMPTY.as_f64(), 0.0);
        assert_eq!(Disk::LIGHT.as_f64(), 1.0);
        assert_eq!(Disk::DARK.as_f64(), -1.0);
        assert_eq!(Disk::LIGHT_HINT.as_f64(), 0.5);
        assert_eq!(Disk::DARK_HINT.as_f64(), -0.5);
        assert_eq!(Disk::default(), Disk::EMPTY);
    }

    #[test]
    fn test_glyph_by_sign() {
        assert_eq!(Disk::LIGHT.glyph(), LIGHT_GLYPH);
        assert_eq!(Disk::DARK.glyph(), DARK_GLYPH);
        assert_eq!(Disk::EMPTY.glyph(), "");
        // Hints are mapped by sign too
        assert_eq!(Disk::LIGHT_HINT.glyph(), LIGHT_GLYPH);
        assert_eq!(Disk::DARK_HINT.glyph(), DARK_GLYPH);

        assert_eq!(glyph_for_number(123.0), LIGHT_GLYPH);
        assert_eq!(glyph_for_number(-0.001), DARK_GLYPH);
        assert_eq!(glyph_for_number(0.0), "");
        assert_eq!(glyph_for_number(-0.0), "");
        assert_eq!(glyph_for_number(f64::NAN), "");
    }

    #[test]
    fn test_hint_helpers() {
        assert!(Disk::LIGHT_HINT.is_hint());
        assert!(Disk::DARK_HINT.is_hint());
        assert!(!Disk::LIGHT.is_hint());
        assert!(!Disk::EMPTY.is_hint());

        assert_eq!(Disk::LIGHT.as_hint(), Disk::LIGHT_HINT);
        assert_eq!(Disk::DARK.as_hint(), Disk::DARK_HINT);
        assert_eq!(Disk::EMPTY.as_hint(), Disk::EMPTY);
    }

    #[test]
    fn test_without_hint_truncates() {
        assert_eq!(Disk::LIGHT_HINT.without_hint(), Disk::EMPTY);
        assert_eq!(Disk::DARK_HINT.without_hint(), Disk::EMPTY);
        assert_eq!(Disk::LIGHT.without_hint(), Disk::LIGHT);
        assert_eq!(Disk::DARK.without_hint(), Disk::DARK);
        // 1.5 -> 1, -2.5 -> -2
        assert_eq!(Disk::from_halves(3).without_hint(), Disk::LIGHT);
        assert_eq!(Disk::from_halves(-5).without_hint(), Disk::from_halves(-4));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Disk::LIGHT.opponent(), Disk::DARK);
        assert_eq!(-Disk::DARK, Disk::LIGHT);
        assert_eq!(Disk::EMPTY.opponent(), Disk::EMPTY);
    }
}
