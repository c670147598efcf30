//! Typed rrdtool graph directives.
//!
//! Graphs are assembled as an ordered list of [`Element`]s and only turned
//! into text at the end, either in the quoted form a graph template hands to
//! its host or as an argument vector for `rrdtool graph`.

mod element;

pub use element::*;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// How data points are aggregated when read or summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConsolidationFn {
    Average,
    Min,
    Max,
    Last,
}

impl ConsolidationFn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Last => "LAST",
        }
    }
}

impl FromStr for ConsolidationFn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AVERAGE" => Ok(Self::Average),
            "MIN" => Ok(Self::Min),
            "MAX" => Ok(Self::Max),
            "LAST" => Ok(Self::Last),
            _ => Err(Error::InvalidConsolidation(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConsolidationFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque RGB color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const fn rgb(value: u32) -> Self {
        Self(value & 0xff_ffff)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// rrdtool splits directives on `:`, so literal colons need a backslash.
pub(crate) fn escape_colons(text: &str) -> Cow<'_, str> {
    if text.contains(':') {
        Cow::Owned(text.replace(':', "\\:"))
    } else {
        Cow::Borrowed(text)
    }
}

pub(crate) fn escape_quotes(text: &str) -> Cow<'_, str> {
    if text.contains('"') {
        Cow::Owned(text.replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(Color::rgb(0x008800).to_string(), "#008800");
        assert_eq!("#00CC00".parse::<Color>().unwrap(), Color::rgb(0x00cc00));
        assert!("00cc00".parse::<Color>().is_err());
        assert!("#0c0".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn consolidation_names() {
        assert_eq!("average".parse::<ConsolidationFn>().unwrap(), ConsolidationFn::Average);
        assert_eq!(ConsolidationFn::Last.to_string(), "LAST");
        assert!("median".parse::<ConsolidationFn>().is_err());
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_colons("/var/lib/r.rrd"), "/var/lib/r.rrd");
        assert_eq!(escape_colons("C:/r.rrd"), "C\\:/r.rrd");
        assert_eq!(escape_quotes("my \"box\""), "my \\\"box\\\"");
    }
}
