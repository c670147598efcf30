use super::*;

const STATISTICS: [ConsolidationFn; 3] = [
    ConsolidationFn::Max,
    ConsolidationFn::Average,
    ConsolidationFn::Last,
];

const BYTES_HEADER: &str = "             Max           Avg          Last";
const PACKETS_HEADER: &str = "                 Max          Avg         Last";

/// Inbound traffic is drawn below the zero line: each `in` source is read
/// as `pos<kind>` and plotted through a negated copy named `<kind>`.
fn definitions(
    elements: &mut Vec<Element>,
    group: &InterfaceGroup,
    kind: CounterKind,
    cf: ConsolidationFn,
) {
    let Some(source) = group.get(kind) else {
        return;
    };

    match kind.direction() {
        Direction::Out => {
            elements.push(Element::def(kind.as_str(), &source.rrd_file, &source.ds, cf));
        }
        Direction::In => {
            let positive = positive_name(kind);
            elements.push(Element::def(&positive, &source.rrd_file, &source.ds, cf));
            elements.push(Element::negate(kind.as_str(), &positive));
        }
    }
}

fn positive_name(kind: CounterKind) -> String {
    format!("pos{}", kind.as_str())
}

/// Name of the series whose values the statistic labels report.
fn statistic_name(kind: CounterKind) -> String {
    match kind.direction() {
        Direction::In => positive_name(kind),
        Direction::Out => kind.as_str().to_string(),
    }
}

/// A plot fragment followed by its statistic labels.
fn plot(elements: &mut Vec<Element>, group: &InterfaceGroup, kind: CounterKind, config: &Config) {
    if !group.contains(kind) {
        return;
    }

    let colors = &config.colors;
    let vname = kind.as_str();
    let (element, format) = match kind {
        CounterKind::BytesIn => (Element::area(vname, colors.bytes_in, "In   "), &config.bytes.format),
        CounterKind::BytesOut => (Element::area(vname, colors.bytes_out, "Out  "), &config.bytes.format),
        CounterKind::PacketsIn => (
            Element::area(vname, colors.packets_in, "In       "),
            &config.packets.format,
        ),
        CounterKind::PacketsOut => (
            Element::area(vname, colors.packets_out, "Out      "),
            &config.packets.format,
        ),
        CounterKind::DropsIn => (
            Element::line(1, vname, colors.drops, "Drop In  "),
            &config.packets.format,
        ),
        CounterKind::DropsOut => (
            Element::line(1, vname, colors.drops, "Drop Out "),
            &config.packets.format,
        ),
        CounterKind::ErrorsIn => (
            Element::line(1, vname, colors.errors, "Err In   "),
            &config.packets.format,
        ),
        CounterKind::ErrorsOut => (
            Element::line(1, vname, colors.errors, "Err Out  "),
            &config.packets.format,
        ),
    };

    elements.push(element);
    elements.extend(labels(&statistic_name(kind), &STATISTICS, format));
}

pub fn bytes(group: &InterfaceGroup, host: &str, config: &Config) -> Graph {
    let cf = config.graph.consolidation;
    let mut elements = Vec::new();

    definitions(&mut elements, group, CounterKind::BytesOut, cf);
    definitions(&mut elements, group, CounterKind::BytesIn, cf);

    elements.push(Element::comment(BYTES_HEADER));
    plot(&mut elements, group, CounterKind::BytesIn, config);
    plot(&mut elements, group, CounterKind::BytesOut, config);

    Graph::new(group.interface, GraphKind::Bytes, host, &config.bytes, elements)
}

pub fn packets(group: &InterfaceGroup, host: &str, config: &Config) -> Graph {
    let cf = config.graph.consolidation;
    let mut elements = Vec::new();

    for counter in [Counter::Packets, Counter::Errors, Counter::Drops] {
        definitions(&mut elements, group, CounterKind::new(counter, Direction::Out), cf);
        definitions(&mut elements, group, CounterKind::new(counter, Direction::In), cf);
    }

    elements.push(Element::comment(PACKETS_HEADER));
    for kind in [
        CounterKind::PacketsIn,
        CounterKind::PacketsOut,
        CounterKind::DropsIn,
        CounterKind::DropsOut,
        CounterKind::ErrorsIn,
        CounterKind::ErrorsOut,
    ] {
        plot(&mut elements, group, kind, config);
    }

    Graph::new(group.interface, GraphKind::Packets, host, &config.packets, elements)
}
