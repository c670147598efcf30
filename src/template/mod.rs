//! Interface traffic graph template.
//!
//! [`Template::build`] groups data sources by interface and produces a
//! `bytes` and a `packets` graph for each one, keyed `<interface>-bytes`
//! and `<interface>-packets`.

pub mod group;
mod traffic;

pub use group::InterfaceGroup;

use crate::config::{Config, Style};
use crate::rrd::{escape_quotes, labels, Color, ConsolidationFn, Element};
use crate::source::{Counter, CounterKind, DataSource, Direction};
use ringlog::*;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Bytes,
    Packets,
}

impl GraphKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Packets => "packets",
        }
    }
}

/// Axis label and title of a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphOptions {
    pub vertical_label: String,
    pub title: String,
}

impl GraphOptions {
    /// The option string handed to the host, e.g.
    /// `--vertical-label Bytes --title "host1 / eth0 Bytes"`.
    pub fn render(&self) -> String {
        let label = if self.vertical_label.contains(char::is_whitespace) {
            format!("\"{}\"", escape_quotes(&self.vertical_label))
        } else {
            self.vertical_label.clone()
        };
        format!(
            "--vertical-label {} --title \"{}\"",
            label,
            escape_quotes(&self.title)
        )
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "--vertical-label".to_string(),
            self.vertical_label.clone(),
            "--title".to_string(),
            self.title.clone(),
        ]
    }
}

/// One graph: its options and the ordered directives that draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    key: String,
    interface: String,
    kind: GraphKind,
    options: GraphOptions,
    elements: Vec<Element>,
}

impl Graph {
    fn new(interface: &str, kind: GraphKind, host: &str, style: &Style, elements: Vec<Element>) -> Self {
        Self {
            key: format!("{}-{}", interface, kind.as_str()),
            interface: interface.to_string(),
            kind,
            options: GraphOptions {
                vertical_label: style.vertical_label.clone(),
                title: format!("{} / {} {}", host, interface, style.title),
            },
            elements,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label used by the host; identical to the key.
    pub fn ds_name(&self) -> &str {
        &self.key
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn opt(&self) -> String {
        self.options.render()
    }

    /// All directives in template form, each followed by a space.
    pub fn def(&self) -> String {
        let mut def = String::new();
        for element in &self.elements {
            def.push_str(&element.to_string());
            def.push(' ');
        }
        def
    }

    /// Options followed by directives, ready for `rrdtool graph <file>`.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.options.args();
        args.extend(self.elements.iter().map(Element::to_arg));
        args
    }
}

/// The graphs of every interface, in the order interfaces were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Template {
    graphs: Vec<Graph>,
    #[serde(skip)]
    by_key: HashMap<String, usize>,
}

impl Template {
    pub fn build(sources: &[DataSource], host: &str) -> Self {
        Self::build_with(sources, host, &Config::default())
    }

    pub fn build_with(sources: &[DataSource], host: &str, config: &Config) -> Self {
        let groups = group::group(sources);

        let mut template = Self::default();
        for group in &groups {
            template.push(traffic::bytes(group, host, config));
            template.push(traffic::packets(group, host, config));
        }

        debug!(
            "built {} graphs for {} interfaces from {} data sources",
            template.graphs.len(),
            groups.len(),
            sources.len()
        );
        template
    }

    fn push(&mut self, graph: Graph) {
        self.by_key.insert(graph.key.clone(), self.graphs.len());
        self.graphs.push(graph);
    }

    pub fn get(&self, key: &str) -> Option<&Graph> {
        self.by_key.get(key).map(|idx| &self.graphs[*idx])
    }

    pub fn ds_name(&self, key: &str) -> Option<&str> {
        self.get(key).map(Graph::ds_name)
    }

    pub fn opt(&self, key: &str) -> Option<String> {
        self.get(key).map(Graph::opt)
    }

    pub fn def(&self, key: &str) -> Option<String> {
        self.get(key).map(Graph::def)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.graphs.iter().map(Graph::key)
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<DataSource> {
        vec![
            DataSource::new("out-eth0", "r.rrd", "2"),
            DataSource::new("in-eth0", "r.rrd", "1"),
        ]
    }

    #[test]
    fn keys_and_options() {
        let template = Template::build(&sources(), "host1");

        assert_eq!(template.keys().collect::<Vec<_>>(), vec!["eth0-bytes", "eth0-packets"]);
        assert_eq!(template.ds_name("eth0-bytes"), Some("eth0-bytes"));
        assert_eq!(
            template.opt("eth0-bytes").unwrap(),
            "--vertical-label Bytes --title \"host1 / eth0 Bytes\""
        );
        assert_eq!(
            template.opt("eth0-packets").unwrap(),
            "--vertical-label Packets --title \"host1 / eth0 Packets\""
        );
        assert!(template.get("eth1-bytes").is_none());
    }

    #[test]
    fn inbound_plotted_before_outbound() {
        let template = Template::build(&sources(), "host1");
        let def = template.def("eth0-bytes").unwrap();

        assert!(def.contains("CDEF:in=posin,-1,* "));
        let area_in = def.find("AREA:in#008800").unwrap();
        let area_out = def.find("AREA:out#00cc00").unwrap();
        assert!(area_in < area_out);
        assert_eq!(def.matches("GPRINT:").count(), 6);
    }

    #[test]
    fn packets_without_counters_is_header_only() {
        let template = Template::build(&sources(), "host1");
        assert_eq!(
            template.def("eth0-packets").unwrap(),
            "COMMENT:\"                 Max          Avg         Last\\l\" "
        );
    }

    #[test]
    fn quoted_host_and_spaced_label() {
        let mut config = Config::default();
        config.bytes.vertical_label = "Bytes per second".to_string();
        let template = Template::build_with(&sources(), "edge \"a\"", &config);

        assert_eq!(
            template.opt("eth0-bytes").unwrap(),
            "--vertical-label \"Bytes per second\" --title \"edge \\\"a\\\" / eth0 Bytes\""
        );
        assert_eq!(
            template.get("eth0-bytes").unwrap().options().args(),
            vec!["--vertical-label", "Bytes per second", "--title", "edge \"a\" / eth0 Bytes"]
        );
    }

    #[test]
    fn serializes_structure() {
        let template = Template::build(&sources(), "host1");
        let value = serde_json::to_value(&template).unwrap();

        let graph = &value["graphs"][0];
        assert_eq!(graph["key"], "eth0-bytes");
        assert_eq!(graph["kind"], "bytes");
        assert_eq!(graph["elements"][0]["type"], "def");
        assert_eq!(graph["elements"][0]["cf"], "AVERAGE");
        assert_eq!(graph["elements"][3]["type"], "comment");
        assert_eq!(graph["elements"][4]["color"], "#008800");
        assert!(value.get("by_key").is_none());
    }
}
