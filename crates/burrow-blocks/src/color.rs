use serde::Deserialize;

/// General display colors a material may reference.
///
/// Only the names live here; mapping to terminal or RGB values is up to the
/// renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    DarkGray,
    Gray,
    BrightGray,
    White,
    BrightWhite,
    DarkRed,
    Red,
    BrightRed,
    DarkGreen,
    Green,
    BrightGreen,
    DarkBlue,
    Blue,
    BrightBlue,
    DarkYellow,
    Yellow,
    BrightYellow,
    DarkPurple,
    Purple,
    BrightPurple,
    DarkCyan,
    Cyan,
    BrightCyan,
    DarkBrown,
    Brown,
    BrightBrown,
    DarkPink,
    Pink,
    BrightPink,
    DarkOrange,
    Orange,
    BrightOrange,
}

const NAMES: [&str; Color::COUNT] = [
    "black", "dark gray", "gray", "bright gray", "white", "bright white",
    "dark red", "red", "bright red", "dark green", "green", "bright green",
    "dark blue", "blue", "bright blue", "dark yellow", "yellow", "bright yellow",
    "dark purple", "purple", "bright purple", "dark cyan", "cyan", "bright cyan",
    "dark brown", "brown", "bright brown", "dark pink", "pink", "bright pink",
    "dark orange", "orange", "bright orange",
];

impl Color {
    pub const COUNT: usize = 33;

    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up_with_variants() {
        assert_eq!(Color::Black.name(), "black");
        assert_eq!(Color::BrightWhite.name(), "bright white");
        assert_eq!(Color::BrightOrange as usize, Color::COUNT - 1);
        assert_eq!(Color::BrightOrange.name(), "bright orange");
    }

    #[test]
    fn deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrap {
            c: Color,
        }
        let w: Wrap = toml::from_str("c = \"bright_cyan\"").unwrap();
        assert_eq!(w.c, Color::BrightCyan);
    }
}
