use crate::source::{CounterKind, DataSource};
use std::collections::HashMap;

/// The data sources found for one interface, at most one per kind.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceGroup<'a> {
    pub interface: &'a str,
    sources: [Option<&'a DataSource>; CounterKind::COUNT],
}

impl<'a> InterfaceGroup<'a> {
    pub fn new(interface: &'a str) -> Self {
        Self {
            interface,
            sources: [None; CounterKind::COUNT],
        }
    }

    pub fn get(&self, kind: CounterKind) -> Option<&'a DataSource> {
        self.sources[kind.index()]
    }

    pub fn contains(&self, kind: CounterKind) -> bool {
        self.get(kind).is_some()
    }

    /// Later sources replace earlier ones of the same kind.
    pub fn insert(&mut self, kind: CounterKind, source: &'a DataSource) {
        self.sources[kind.index()] = Some(source);
    }

    pub fn is_empty(&self) -> bool {
        self.sources.iter().all(Option::is_none)
    }
}

/// Groups data sources by interface, keeping the order in which interfaces
/// are first seen. Sources whose names do not parse are skipped.
pub fn group(sources: &[DataSource]) -> Vec<InterfaceGroup<'_>> {
    let mut groups: Vec<InterfaceGroup> = Vec::new();
    let mut by_interface: HashMap<&str, usize> = HashMap::new();

    for source in sources {
        let Some((kind, interface)) = source.split_name() else {
            continue;
        };

        let idx = *by_interface.entry(interface).or_insert_with(|| {
            groups.push(InterfaceGroup::new(interface));
            groups.len() - 1
        });
        groups[idx].insert(kind, source);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_encounter_order() {
        let sources = vec![
            DataSource::new("out-eth1", "a.rrd", "1"),
            DataSource::new("in-eth0", "a.rrd", "2"),
            DataSource::new("pktin-eth1", "a.rrd", "3"),
            DataSource::new("uptime", "a.rrd", "4"),
            DataSource::new("foo-eth2", "a.rrd", "5"),
        ];

        let groups = group(&sources);
        let names: Vec<&str> = groups.iter().map(|g| g.interface).collect();
        assert_eq!(names, vec!["eth1", "eth0"]);

        assert!(groups[0].contains(CounterKind::BytesOut));
        assert!(groups[0].contains(CounterKind::PacketsIn));
        assert!(!groups[0].contains(CounterKind::BytesIn));
        assert_eq!(groups[1].get(CounterKind::BytesIn).map(|s| s.ds.as_str()), Some("2"));
    }

    #[test]
    fn later_source_wins() {
        let sources = vec![
            DataSource::new("in-eth0", "old.rrd", "1"),
            DataSource::new("in-eth0", "new.rrd", "7"),
        ];

        let groups = group(&sources);
        assert_eq!(groups.len(), 1);
        let source = groups[0].get(CounterKind::BytesIn).unwrap();
        assert_eq!(source.rrd_file, "new.rrd");
        assert_eq!(source.ds, "7");
    }

    #[test]
    fn nothing_to_group() {
        let sources = vec![DataSource::new("eth0", "a.rrd", "1")];
        assert!(group(&sources).is_empty());
        assert!(group(&[]).is_empty());
        assert!(InterfaceGroup::new("eth0").is_empty());
    }
}
