#![deny(unsafe_code)]
//! Named color tables for chromatic.
//!
//! Each table is an immutable, process-wide constant mapping names to
//! [`Rgb`] colors: [`PRIMARY`](primary::PRIMARY), [`RAINBOW`](rainbow::RAINBOW)
//! and [`W3C`](w3c::W3C). Individual colors are also exported as constants,
//! e.g. [`rainbow::INDIGO`].

pub mod primary;
pub mod rainbow;
pub mod w3c;

use chromatic_core::Rgb;

pub use primary::PRIMARY;
pub use rainbow::RAINBOW;
pub use w3c::W3C;

/// A fixed table of named colors.
#[derive(Debug, Clone, Copy)]
pub struct NamedColors {
    name: &'static str,
    colors: &'static [(&'static str, Rgb)],
}

impl NamedColors {
    /// Creates a table. Usable in constants.
    pub const fn new(name: &'static str, colors: &'static [(&'static str, Rgb)]) -> Self {
        Self { name, colors }
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a color by name, ignoring ASCII case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        let name = name.trim();
        self.colors
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }

    /// Returns the number of colors in the table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the table has no colors. (Always false for the
    /// built-in tables.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(name, color)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rgb)> {
        self.colors.iter().copied()
    }
}

/// Looks up `name` in the primary, rainbow and W3C tables, in that order.
pub fn lookup(name: &str) -> Option<Rgb> {
    [PRIMARY, RAINBOW, W3C]
        .iter()
        .find_map(|table| table.get(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatic_core::{Blend, Color, Hex};

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("GhostWhite"), Some(w3c::GHOSTWHITE));
        assert_eq!(lookup("  red "), Some(primary::RED));
    }

    #[test]
    fn lookup_prefers_earlier_tables() {
        // green is 0,255,0 in the primary table but 0,128,0 in the W3C one
        assert_eq!(lookup("green"), Some(Rgb::from_u8(0, 255, 0)));
        assert_eq!(W3C.get("green"), Some(Rgb::from_u8(0, 128, 0)));
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert_eq!(lookup("not-a-color"), None);
    }

    #[test]
    fn table_colors_work_with_core_operations() {
        let inverted = primary::WHITE.invert();
        assert_eq!(inverted, primary::BLACK);
        assert_eq!(rainbow::VIOLET.to_hex(), Hex::new("ee82ee").unwrap());
    }

    #[test]
    fn tables_report_names_and_sizes() {
        assert_eq!(PRIMARY.name(), "primary");
        assert_eq!(RAINBOW.name(), "rainbow");
        assert_eq!(W3C.name(), "w3c");
        assert!(!PRIMARY.is_empty());
        assert_eq!(PRIMARY.iter().count(), PRIMARY.len());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_never_panics(name in ".{0,24}") {
                let _ = lookup(&name);
            }
        }
    }
}
