use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

use crate::notify::DEFAULT_TOAST_DURATION;
use crate::panel::DEFAULT_PANEL_ANIMATION;

static ENV_THEME: &str = "TODO_THEME";
static ENV_TOAST_MS: &str = "TODO_TOAST_MS";
static ENV_PANEL_MS: &str = "TODO_PANEL_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown theme '{0}': expected auto|dark|light")]
    InvalidTheme(String),
    #[error("Invalid {var} value '{value}': expected a whole number of milliseconds")]
    InvalidDuration { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Auto => "auto",
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "system" => Ok(ThemeChoice::Auto),
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

impl ValueEnum for ThemeChoice {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [ThemeChoice; 3] = [ThemeChoice::Auto, ThemeChoice::Dark, ThemeChoice::Light];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Values supplied on the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub theme: Option<ThemeChoice>,
    pub toast_ms: Option<u64>,
    pub panel_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    pub toast_duration: Duration,
    pub panel_animation: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            toast_duration: DEFAULT_TOAST_DURATION,
            panel_animation: DEFAULT_PANEL_ANIMATION,
        }
    }
}

impl AppConfig {
    /// Resolve settings from command-line overrides, then environment variables, then defaults.
    pub fn discover(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.theme = match overrides.theme {
            Some(theme) => theme,
            None => match lookup(ENV_THEME) {
                Some(value) => value.parse()?,
                None => config.theme,
            },
        };

        if let Some(ms) = millis_setting(overrides.toast_ms, ENV_TOAST_MS, &lookup)? {
            config.toast_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = millis_setting(overrides.panel_ms, ENV_PANEL_MS, &lookup)? {
            config.panel_animation = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn millis_setting<F>(
    cli_value: Option<u64>,
    var: &'static str,
    lookup: &F,
) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if cli_value.is_some() {
        return Ok(cli_value);
    }
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidDuration { var, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_overrides_or_env() {
        let config = AppConfig::resolve(ConfigOverrides::default(), no_env).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.toast_duration, Duration::from_millis(2000));
    }

    #[test]
    fn environment_fills_unset_overrides() {
        let config = AppConfig::resolve(ConfigOverrides::default(), |key| match key {
            "TODO_THEME" => Some("light".into()),
            "TODO_TOAST_MS" => Some("750".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.toast_duration, Duration::from_millis(750));
    }

    #[test]
    fn overrides_beat_environment() {
        let overrides = ConfigOverrides {
            theme: Some(ThemeChoice::Dark),
            toast_ms: Some(100),
            panel_ms: None,
        };
        let config = AppConfig::resolve(overrides, |key| match key {
            "TODO_THEME" => Some("light".into()),
            "TODO_TOAST_MS" => Some("not-a-number".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.toast_duration, Duration::from_millis(100));
    }

    #[test]
    fn bad_toast_value_is_reported() {
        let err = AppConfig::resolve(ConfigOverrides::default(), |key| {
            (key == "TODO_TOAST_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: "TODO_TOAST_MS",
                value: "soon".into()
            }
        );
    }

    #[test]
    fn panel_animation_follows_environment_unless_overridden() {
        let from_env = AppConfig::resolve(ConfigOverrides::default(), |key| {
            (key == "TODO_PANEL_MS").then(|| "400".to_string())
        })
        .unwrap();
        assert_eq!(from_env.panel_animation, Duration::from_millis(400));
        assert_eq!(from_env.toast_duration, DEFAULT_TOAST_DURATION);

        let overrides = ConfigOverrides {
            panel_ms: Some(0),
            ..ConfigOverrides::default()
        };
        let from_cli = AppConfig::resolve(overrides, |key| {
            (key == "TODO_PANEL_MS").then(|| "400".to_string())
        })
        .unwrap();
        assert_eq!(from_cli.panel_animation, Duration::ZERO);
    }

    #[test]
    fn bad_panel_value_names_its_variable() {
        let err = AppConfig::resolve(ConfigOverrides::default(), |key| {
            (key == "TODO_PANEL_MS").then(|| "-5".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: "TODO_PANEL_MS",
                value: "-5".into()
            }
        );
    }

    #[rstest]
    #[case("auto", ThemeChoice::Auto)]
    #[case("System", ThemeChoice::Auto)]
    #[case("DARK", ThemeChoice::Dark)]
    #[case(" light ", ThemeChoice::Light)]
    fn parses_theme_names(#[case] input: &str, #[case] expected: ThemeChoice) {
        assert_eq!(input.parse::<ThemeChoice>().unwrap(), expected);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert_eq!(
            "sepia".parse::<ThemeChoice>(),
            Err(ConfigError::InvalidTheme("sepia".into()))
        );
    }
}
