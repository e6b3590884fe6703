// src/domain/theme.rs
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The five built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThemeName {
    Pro,
    Tec,
    Pastel,
    Elegante,
    Golden,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Pro,
        ThemeName::Tec,
        ThemeName::Pastel,
        ThemeName::Elegante,
        ThemeName::Golden,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Pro => "Pro",
            ThemeName::Tec => "Tec",
            ThemeName::Pastel => "Pastel",
            ThemeName::Elegante => "Elegante",
            ThemeName::Golden => "Golden",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeName::Pro => PRO,
            ThemeName::Tec => TEC,
            ThemeName::Pastel => PASTEL,
            ThemeName::Elegante => ELEGANTE,
            ThemeName::Golden => GOLDEN,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown theme '{s}' (expected one of: {})",
                    ThemeName::ALL.map(ThemeName::as_str).join(", ")
                )
            })
    }
}

/// Page colors: background, secondary background, text and two accents.
///
/// Eight-digit values carry alpha in the last byte (`#RRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg: &'static str,
    pub bg2: &'static str,
    pub text: &'static str,
    pub a1: &'static str,
    pub a2: &'static str,
}

const PRO: Palette = Palette {
    bg: "#121828",
    bg2: "#1E293B",
    text: "#C5D6E8FF",
    a1: "#445187FF",
    a2: "#354172FF",
};

const TEC: Palette = Palette {
    bg: "#770D50FF",
    bg2: "#770D50FF",
    text: "#E994E7FF",
    a1: "#C60CC9E4",
    a2: "#9E288EFF",
};

const PASTEL: Palette = Palette {
    bg: "#477D5AFF",
    bg2: "#3A852EFF",
    text: "#B1E8AEFF",
    a1: "#4A5A95EC",
    a2: "#377129FF",
};

const ELEGANTE: Palette = Palette {
    bg: "#000000FF",
    bg2: "#000000FF",
    text: "#E0E6ED",
    a1: "#000000FF",
    a2: "#000000FF",
};

const GOLDEN: Palette = Palette {
    bg: "#EEC336FF",
    bg2: "#D49E27FF",
    text: "#E6D18EFF",
    a1: "#EEC336FF",
    a2: "#D49E27FF",
};

/// Resolve a stored theme name; anything unrecognized gets the Golden palette.
pub fn palette_for(name: &str) -> Palette {
    name.parse::<ThemeName>()
        .unwrap_or(ThemeName::Golden)
        .palette()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pro", "#121828")]
    #[case("Tec", "#770D50FF")]
    #[case("Pastel", "#477D5AFF")]
    #[case("Elegante", "#000000FF")]
    #[case("Golden", "#EEC336FF")]
    fn given_known_theme_when_resolving_then_returns_its_background(
        #[case] name: &str,
        #[case] bg: &str,
    ) {
        assert_eq!(palette_for(name).bg, bg);
    }

    #[rstest]
    #[case("Neon")]
    #[case("")]
    #[case("pro")]
    fn given_unknown_theme_when_resolving_then_falls_back_to_golden(#[case] name: &str) {
        assert_eq!(palette_for(name), ThemeName::Golden.palette());
    }

    #[test]
    fn given_unknown_theme_when_parsing_then_lists_choices() {
        let err = "Neon".parse::<ThemeName>().unwrap_err();
        assert!(err.contains("Pro, Tec, Pastel, Elegante, Golden"));
    }
}
