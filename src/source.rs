use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named data source backed by a round-robin database.
///
/// Names follow the `<kind>-<interface>` convention used by the
/// `check_iftraffic` plugin, for example `in-eth0` or `dropout-bond0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub rrd_file: String,
    pub ds: String,
}

impl DataSource {
    pub fn new(name: impl Into<String>, rrd_file: impl Into<String>, ds: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rrd_file: rrd_file.into(),
            ds: ds.into(),
        }
    }

    /// Splits the name into its counter kind and interface.
    ///
    /// Returns `None` for names without a `-`, with an unknown kind prefix,
    /// or with an empty interface part.
    pub fn split_name(&self) -> Option<(CounterKind, &str)> {
        let (prefix, interface) = self.name.split_once('-')?;
        if interface.is_empty() {
            return None;
        }
        let kind = prefix.parse().ok()?;
        Some((kind, interface))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Counter {
    Bytes,
    Packets,
    Errors,
    Drops,
}

impl Counter {
    /// Prefix used in data source names and rrdtool variable names.
    /// Bytes have no prefix (`in`, `out`).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Bytes => "",
            Self::Packets => "pkt",
            Self::Errors => "err",
            Self::Drops => "drop",
        }
    }
}

/// Counter category encoded in the prefix of a data source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CounterKind {
    #[serde(rename = "in")]
    BytesIn,
    #[serde(rename = "out")]
    BytesOut,
    #[serde(rename = "pktin")]
    PacketsIn,
    #[serde(rename = "pktout")]
    PacketsOut,
    #[serde(rename = "errin")]
    ErrorsIn,
    #[serde(rename = "errout")]
    ErrorsOut,
    #[serde(rename = "dropin")]
    DropsIn,
    #[serde(rename = "dropout")]
    DropsOut,
}

impl CounterKind {
    pub const COUNT: usize = 8;

    pub const ALL: [CounterKind; Self::COUNT] = [
        Self::BytesIn,
        Self::BytesOut,
        Self::PacketsIn,
        Self::PacketsOut,
        Self::ErrorsIn,
        Self::ErrorsOut,
        Self::DropsIn,
        Self::DropsOut,
    ];

    pub fn new(counter: Counter, direction: Direction) -> Self {
        match (counter, direction) {
            (Counter::Bytes, Direction::In) => Self::BytesIn,
            (Counter::Bytes, Direction::Out) => Self::BytesOut,
            (Counter::Packets, Direction::In) => Self::PacketsIn,
            (Counter::Packets, Direction::Out) => Self::PacketsOut,
            (Counter::Errors, Direction::In) => Self::ErrorsIn,
            (Counter::Errors, Direction::Out) => Self::ErrorsOut,
            (Counter::Drops, Direction::In) => Self::DropsIn,
            (Counter::Drops, Direction::Out) => Self::DropsOut,
        }
    }

    pub fn counter(&self) -> Counter {
        match self {
            Self::BytesIn | Self::BytesOut => Counter::Bytes,
            Self::PacketsIn | Self::PacketsOut => Counter::Packets,
            Self::ErrorsIn | Self::ErrorsOut => Counter::Errors,
            Self::DropsIn | Self::DropsOut => Counter::Drops,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::BytesIn | Self::PacketsIn | Self::ErrorsIn | Self::DropsIn => Direction::In,
            _ => Direction::Out,
        }
    }

    /// The name prefix, which doubles as the rrdtool variable name of the
    /// plotted series.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BytesIn => "in",
            Self::BytesOut => "out",
            Self::PacketsIn => "pktin",
            Self::PacketsOut => "pktout",
            Self::ErrorsIn => "errin",
            Self::ErrorsOut => "errout",
            Self::DropsIn => "dropin",
            Self::DropsOut => "dropout",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for CounterKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or(())
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_names() {
        let cases = vec![
            ("in-eth0", Some((CounterKind::BytesIn, "eth0"))),
            ("pktout-eth0", Some((CounterKind::PacketsOut, "eth0"))),
            ("dropin-br-lan", Some((CounterKind::DropsIn, "br-lan"))),
            ("errout-eth0.100", Some((CounterKind::ErrorsOut, "eth0.100"))),
            ("eth0", None),
            ("in-", None),
            ("bogus-eth0", None),
            ("", None),
        ];

        for (name, expected) in cases {
            let source = DataSource::new(name, "r.rrd", "1");
            assert_eq!(source.split_name(), expected, "Failed for name: {}", name);
        }
    }

    #[test]
    fn kind_parts() {
        for kind in CounterKind::ALL {
            assert_eq!(CounterKind::new(kind.counter(), kind.direction()), kind);
            assert_eq!(kind.as_str().parse::<CounterKind>(), Ok(kind));
        }
        assert_eq!(CounterKind::ErrorsIn.counter().prefix(), "err");
        assert_eq!(CounterKind::BytesOut.direction(), Direction::Out);
    }
}
