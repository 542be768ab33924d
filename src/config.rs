//! Map configuration parsed from environment variables.
//!
//! Read once at startup and handed to whatever needs it; nothing below the
//! binary reads the environment.

use std::str::FromStr;

use serde::Serialize;

pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const STYLE_VAR: &str = "MAP_STYLE";
pub const DEFAULT_STYLE: Style = Style::Streets;

const PUBLIC_TOKEN_PREFIX: &str = "pk.";
const SECRET_TOKEN_PREFIX: &str = "sk.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing access token; set MAPBOX_ACCESS_TOKEN")]
    MissingAccessToken,
    #[error("invalid access token: expected a `pk.` or `sk.` token")]
    InvalidAccessToken,
    #[error("unknown MAP_STYLE: {0}")]
    UnknownStyle(String),
}

/// Bundled basemap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Streets,
    Emerald,
    Light,
    Dark,
    Satellite,
    SatelliteStreets,
}

impl Style {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Streets => "streets",
            Self::Emerald => "emerald",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Satellite => "satellite",
            Self::SatelliteStreets => "satellite-streets",
        }
    }

    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Self::Streets => "mapbox://styles/mapbox/streets-v8",
            Self::Emerald => "mapbox://styles/mapbox/emerald-v8",
            Self::Light => "mapbox://styles/mapbox/light-v8",
            Self::Dark => "mapbox://styles/mapbox/dark-v8",
            Self::Satellite => "mapbox://styles/mapbox/satellite-v8",
            Self::SatelliteStreets => "mapbox://styles/mapbox/satellite-hybrid-v8",
        }
    }
}

impl FromStr for Style {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "streets" => Ok(Self::Streets),
            "emerald" => Ok(Self::Emerald),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "satellite" => Ok(Self::Satellite),
            "satellite-streets" => Ok(Self::SatelliteStreets),
            _ => Err(ConfigError::UnknownStyle(raw.to_owned())),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub access_token: String,
    pub style: Style,
}

impl std::fmt::Debug for MapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapConfig")
            .field("access_token", &self.redacted_token())
            .field("style", &self.style)
            .finish()
    }
}

impl MapConfig {
    /// Build typed map config from environment variables.
    ///
    /// Required:
    /// - `MAPBOX_ACCESS_TOKEN`: a `pk.` (public) or `sk.` (secret) token
    ///
    /// Optional:
    /// - `MAP_STYLE`: `streets` (default), `emerald`, `light`, `dark`,
    ///   `satellite` or `satellite-streets`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .map(|raw| raw.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;
        validate_token(&access_token)?;

        let style = match lookup(STYLE_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => DEFAULT_STYLE,
        };

        Ok(Self { access_token, style })
    }

    /// Secret tokens carry write scopes and should stay server-side.
    #[must_use]
    pub fn is_secret_token(&self) -> bool {
        self.access_token.starts_with(SECRET_TOKEN_PREFIX)
    }

    /// Token prefix only, safe for logs.
    #[must_use]
    pub fn redacted_token(&self) -> String {
        let prefix = self.access_token.get(..3).unwrap_or_default();
        format!("{prefix}***")
    }
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    let has_prefix = token.starts_with(PUBLIC_TOKEN_PREFIX) || token.starts_with(SECRET_TOKEN_PREFIX);
    if has_prefix && token.len() > PUBLIC_TOKEN_PREFIX.len() {
        Ok(())
    } else {
        Err(ConfigError::InvalidAccessToken)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
