//! Light/dark palettes, passed to the presentation layer as plain
//! values rather than ambient global state. The initial mode comes
//! from the persisted preference in [`crate::config::ThemeConfig`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// Hex colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#181A20",
    secondary: "#23262F",
    background: "#fff",
    surface: "#f5f5f5",
    text: "#181A20",
    text_secondary: "#444",
};

pub const DARK: Palette = Palette {
    primary: "#4F8CFF",
    secondary: "#FF6B81",
    background: "#181A20",
    surface: "#23262F",
    text: "#F4F4F4",
    text_secondary: "#B0B3B8",
};

impl Mode {
    pub fn palette(self) -> Palette {
        match self {
            Mode::Light => LIGHT,
            Mode::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_modes() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
    }

    #[test]
    fn each_mode_selects_its_palette() {
        assert_eq!(Mode::Light.palette(), LIGHT);
        assert_eq!(Mode::Dark.palette(), DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }

    #[test]
    fn mode_round_trips_through_serde() {
        let toml = "mode = \"dark\"\n";
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: Mode,
        }
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(wrapper.mode, Mode::Dark);
    }
}
