use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use pochmann::Skin;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Which sticker symbols to print.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SkinChoice {
    #[default]
    Color,
    Letter,
}

impl From<SkinChoice> for Skin {
    fn from(choice: SkinChoice) -> Self {
        match choice {
            SkinChoice::Color => Skin::Color,
            SkinChoice::Letter => Skin::Letter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub skin: SkinChoice,
    /// Paint colour stickers with ANSI colours.
    pub colored: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            skin: SkinChoice::Color,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
}

impl Config {
    /// Read the configuration file, or fall back to the defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.colored);
        assert_eq!(config.display.skin, SkinChoice::Color);
        assert_eq!(toml::from_str::<Config>("").unwrap(), config);
    }

    #[test]
    fn test_display_table() {
        let config: Config = toml::from_str(
            r#"
            [display]
            skin = "letter"
            colored = false
            "#,
        )
        .unwrap();
        assert_eq!(Skin::from(config.display.skin), Skin::Letter);
        assert!(!config.display.colored);

        let partial: Config = toml::from_str("[display]\ncolored = false\n").unwrap();
        assert_eq!(partial.display.skin, SkinChoice::Color);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("[display]\nskin = \"stickers\"\n").is_err());
        assert!(toml::from_str::<Config>("[display]\nsize = 4\n").is_err());
        assert!(Config::load(Some(Path::new("/nonexistent/pochmann.toml"))).is_err());
    }
}
