//! Nagios performance data.
//!
//! The `check_iftraffic` plugin reports one item per counter and interface,
//! for example
//!
//! ```text
//! in-eth0=1234.00;111411200;128450560;0;131072000 pktin-eth0=12.0
//! ```
//!
//! The host stores each item as a data source named after its label, which
//! is what [`data_sources`] reproduces.

use crate::source::DataSource;
use crate::{Error, Result};
use ringlog::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Perfdata {
    pub label: String,
    /// `None` when the plugin reported `U` (undetermined).
    pub value: Option<f64>,
    pub uom: String,
    /// Threshold ranges are kept verbatim, they may be `10:20` or `@~:5`.
    pub warn: Option<String>,
    pub crit: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Where the host keeps the round-robin databases of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RrdStorage {
    /// One file holding every item as data sources `1..=n`.
    Single { rrd_file: String },
    /// One file per item, `<dir>/<service>_<label>.rrd`, data source `1`.
    Multiple { dir: PathBuf, service: String },
}

pub fn parse(perfdata: &str) -> Result<Vec<Perfdata>> {
    let mut items = Vec::new();
    let mut rest = perfdata.trim_start();

    while !rest.is_empty() {
        let (label, after_label) = parse_label(rest)?;
        let end = after_label
            .find(char::is_whitespace)
            .unwrap_or(after_label.len());
        let token = &rest[..rest.len() - after_label.len() + end];
        items.push(parse_fields(label, &after_label[..end], token)?);
        rest = after_label[end..].trim_start();
    }

    trace!("parsed {} perfdata items", items.len());
    Ok(items)
}

/// Reads the label and the `=`, returning the text after it.
fn parse_label(input: &str) -> Result<(String, &str)> {
    let token_end = |s: &str| s.find(char::is_whitespace).unwrap_or(s.len());

    let (label, rest) = if let Some(quoted) = input.strip_prefix('\'') {
        let mut label = String::new();
        let mut chars = quoted.char_indices().peekable();
        let mut close = None;
        while let Some((idx, c)) = chars.next() {
            if c != '\'' {
                label.push(c);
            } else if matches!(chars.peek(), Some((_, '\''))) {
                label.push('\'');
                chars.next();
            } else {
                close = Some(idx);
                break;
            }
        }
        let close = close.ok_or_else(|| Error::perfdata(input, "unterminated quote"))?;
        (label, &quoted[close + 1..])
    } else {
        let eq = input[..token_end(input)]
            .find('=')
            .ok_or_else(|| Error::perfdata(&input[..token_end(input)], "missing '='"))?;
        (input[..eq].to_string(), &input[eq..])
    };

    if label.is_empty() {
        return Err(Error::perfdata(&input[..token_end(input)], "empty label"));
    }
    let rest = rest
        .strip_prefix('=')
        .ok_or_else(|| Error::perfdata(&input[..token_end(input)], "missing '='"))?;
    Ok((label, rest))
}

fn parse_fields(label: String, fields: &str, token: &str) -> Result<Perfdata> {
    let mut fields = fields.split(';');
    let reading = fields.next().unwrap_or_default();

    let (value, uom) = if reading == "U" {
        (None, String::new())
    } else {
        let split = reading
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+')))
            .unwrap_or(reading.len());
        let value = parse_number(&reading[..split]).ok_or_else(|| Error::perfdata(token, "invalid value"))?;
        (Some(value), reading[split..].to_string())
    };

    let mut optional = || fields.next().filter(|f| !f.is_empty());
    let warn = optional().map(str::to_string);
    let crit = optional().map(str::to_string);
    let min = optional()
        .map(|f| parse_number(f).ok_or_else(|| Error::perfdata(token, "invalid min")))
        .transpose()?;
    let max = optional()
        .map(|f| parse_number(f).ok_or_else(|| Error::perfdata(token, "invalid max")))
        .transpose()?;

    Ok(Perfdata {
        label,
        value,
        uom,
        warn,
        crit,
        min,
        max,
    })
}

fn parse_number(field: &str) -> Option<f64> {
    field.replace(',', ".").parse().ok()
}

/// Data sources for the given items, in perfdata order.
pub fn data_sources(items: &[Perfdata], storage: &RrdStorage) -> Vec<DataSource> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match storage {
            RrdStorage::Single { rrd_file } => {
                DataSource::new(&item.label, rrd_file, (idx + 1).to_string())
            }
            RrdStorage::Multiple { dir, service } => {
                let file = dir.join(format!("{}_{}.rrd", clean(service), clean(&item.label)));
                DataSource::new(&item.label, file.display().to_string(), "1")
            }
        })
        .collect()
}

fn clean(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
