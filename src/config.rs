use crate::rrd::{Color, ConsolidationFn};
use crate::{Error, Result};
use ringlog::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Graph style. The defaults reproduce the stock interface traffic
/// template; a TOML file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub graph: General,
    #[serde(deserialize_with = "partial::bytes")]
    pub bytes: Style,
    #[serde(deserialize_with = "partial::packets")]
    pub packets: Style,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct General {
    /// Consolidation function used when reading each data source.
    pub consolidation: ConsolidationFn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    pub vertical_label: String,
    /// Appended to `<host> / <interface>` to form the graph title.
    pub title: String,
    /// rrdtool format string for the max/average/last labels.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    pub bytes_in: Color,
    pub bytes_out: Color,
    pub packets_in: Color,
    pub packets_out: Color,
    pub drops: Color,
    pub errors: Color,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        debug!("loaded graph template config from {}", path.display());
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: General::default(),
            bytes: Style::bytes(),
            packets: Style::packets(),
            colors: Colors::default(),
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            consolidation: ConsolidationFn::Average,
        }
    }
}

impl Style {
    fn bytes() -> Self {
        Self {
            vertical_label: "Bytes".into(),
            title: "Bytes".into(),
            format: "%6.1lf %SB/s".into(),
        }
    }

    fn packets() -> Self {
        Self {
            vertical_label: "Packets".into(),
            title: "Packets".into(),
            format: "%6.1lf %S/s".into(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            bytes_in: Color::rgb(0x008800),
            bytes_out: Color::rgb(0x00cc00),
            packets_in: Color::rgb(0x00aa00),
            packets_out: Color::rgb(0x00cc00),
            drops: Color::rgb(0x0000ff),
            errors: Color::rgb(0xff0000),
        }
    }
}

// `bytes` and `packets` tables fall back field by field to their own
// defaults, which differ, so they cannot share a plain `#[serde(default)]`.
mod partial {
    use super::Style;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct PartialStyle {
        vertical_label: Option<String>,
        title: Option<String>,
        format: Option<String>,
    }

    impl PartialStyle {
        pub(super) fn merge(self, base: Style) -> Style {
            Style {
                vertical_label: self.vertical_label.unwrap_or(base.vertical_label),
                title: self.title.unwrap_or(base.title),
                format: self.format.unwrap_or(base.format),
            }
        }
    }

    pub(super) fn bytes<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Style, D::Error> {
        Ok(PartialStyle::deserialize(d)?.merge(Style::bytes()))
    }

    pub(super) fn packets<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Style, D::Error> {
        Ok(PartialStyle::deserialize(d)?.merge(Style::packets()))
    }
}
