use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("config: failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),
    #[error("invalid consolidation function: {0:?}")]
    InvalidConsolidation(String),
    #[error("perfdata: {reason} in {token:?}")]
    Perfdata { token: String, reason: &'static str },
}

impl Error {
    pub(crate) fn perfdata(token: impl Into<String>, reason: &'static str) -> Self {
        Self::Perfdata {
            token: token.into(),
            reason,
        }
    }
}
