//! Accepted pencil colors

/// Named colors accepted out of the box
pub const DEFAULT_COLORS: [&str; 4] = ["blue", "green", "purple", "black"];

/// Set of named colors a pencil may use, in addition to hex codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Palette holding exactly the given names
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Accept one more named color
    pub fn allow(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `color` is a palette name or a hex color code
    pub fn accepts(&self, color: &str) -> bool {
        self.contains(color) || is_hex_color(color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_names(DEFAULT_COLORS)
    }
}

/// `#rgb` or `#rrggbb`, hex digits in either case
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(color.len(), 4 | 7) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let palette = Palette::default();
        for name in ["blue", "green", "purple", "black"] {
            assert!(palette.accepts(name), "{} should be accepted", name);
        }
        assert_eq!(palette.names().count(), 4);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let palette = Palette::default();
        assert!(!palette.accepts("Blue"));
        assert!(!palette.accepts("BLACK"));
        assert!(!palette.accepts("red"));
        assert!(!palette.accepts("white"));
    }

    #[test]
    fn test_hex_short_and_long() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1b"));
        assert!(is_hex_color("#012345"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(is_hex_color("#aBcDeF"));
    }

    #[test]
    fn test_hex_rejections() {
        // wrong length
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#12"));
        assert!(!is_hex_color("#1234"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#1234567"));
        // alpha forms are not accepted
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ffffffff"));
        // bad digits
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#12345z"));
        assert!(!is_hex_color("#é1"));
        // missing prefix
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("1234567"));
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("rgb(0,0,0)"));
    }

    #[test]
    fn test_allow_extends_palette() {
        let mut palette = Palette::default();
        palette.allow("red");
        palette.allow("red");

        assert!(palette.accepts("red"));
        assert!(palette.accepts("blue"));
        assert_eq!(palette.names().count(), 5);
    }

    #[test]
    fn test_with_names_replaces_defaults() {
        let palette = Palette::with_names(["white"]);
        assert!(palette.accepts("white"));
        assert!(!palette.accepts("blue"));
        assert!(palette.accepts("#000"));
    }
}
