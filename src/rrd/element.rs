use super::*;

/// One rrdtool graph directive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// `DEF:<vname>=<rrd_file>:<ds>:<cf>`
    Def {
        vname: String,
        rrd_file: String,
        ds: String,
        cf: ConsolidationFn,
    },
    /// `CDEF:<vname>=<rpn>`
    Cdef { vname: String, rpn: String },
    Comment { text: String, newline: bool },
    Area {
        vname: String,
        color: Color,
        legend: String,
    },
    Line {
        width: u8,
        vname: String,
        color: Color,
        legend: String,
    },
    /// A statistic label. Ends the legend line when `newline` is set,
    /// otherwise a space separates it from the next label.
    Gprint {
        vname: String,
        cf: ConsolidationFn,
        format: String,
        newline: bool,
    },
}

impl Element {
    pub fn def(
        vname: impl Into<String>,
        rrd_file: impl Into<String>,
        ds: impl Into<String>,
        cf: ConsolidationFn,
    ) -> Self {
        Self::Def {
            vname: vname.into(),
            rrd_file: rrd_file.into(),
            ds: ds.into(),
            cf,
        }
    }

    /// A series equal to `source` multiplied by -1.
    pub fn negate(vname: impl Into<String>, source: &str) -> Self {
        Self::Cdef {
            vname: vname.into(),
            rpn: format!("{source},-1,*"),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment {
            text: text.into(),
            newline: true,
        }
    }

    pub fn area(vname: impl Into<String>, color: Color, legend: impl Into<String>) -> Self {
        Self::Area {
            vname: vname.into(),
            color,
            legend: legend.into(),
        }
    }

    pub fn line(width: u8, vname: impl Into<String>, color: Color, legend: impl Into<String>) -> Self {
        Self::Line {
            width,
            vname: vname.into(),
            color,
            legend: legend.into(),
        }
    }

    pub fn is_plot(&self) -> bool {
        matches!(self, Self::Area { .. } | Self::Line { .. })
    }

    /// Renders the directive as a single `rrdtool graph` argument, without
    /// any shell quoting.
    pub fn to_arg(&self) -> String {
        match self.text() {
            Some(text) => format!("{}:{}", self.head(), text),
            None => self.head(),
        }
    }

    /// Everything before the quoted text part.
    fn head(&self) -> String {
        match self {
            Self::Def {
                vname,
                rrd_file,
                ds,
                cf,
            } => format!("DEF:{vname}={}:{ds}:{cf}", escape_colons(rrd_file)),
            Self::Cdef { vname, rpn } => format!("CDEF:{vname}={rpn}"),
            Self::Comment { .. } => "COMMENT".to_string(),
            Self::Area { vname, color, .. } => format!("AREA:{vname}{color}"),
            Self::Line {
                width,
                vname,
                color,
                ..
            } => format!("LINE{width}:{vname}{color}"),
            Self::Gprint { vname, cf, .. } => format!("GPRINT:{vname}:{cf}"),
        }
    }

    /// The free text part, escaped for rrdtool, if the directive has one.
    fn text(&self) -> Option<String> {
        match self {
            Self::Def { .. } | Self::Cdef { .. } => None,
            Self::Comment { text, newline } => Some(terminate(text, *newline, false)),
            Self::Area { legend, .. } | Self::Line { legend, .. } => {
                Some(escape_colons(legend).into_owned())
            }
            Self::Gprint {
                format, newline, ..
            } => Some(terminate(format, *newline, true)),
        }
    }
}

fn terminate(text: &str, newline: bool, separate: bool) -> String {
    let mut text = escape_colons(text).into_owned();
    if newline {
        text.push_str("\\l");
    } else if separate {
        text.push(' ');
    }
    text
}

/// The quoted template form, e.g. `AREA:in#008800:"In   "`.
impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{}:\"{}\"", self.head(), escape_quotes(&text)),
            None => f.write_str(&self.head()),
        }
    }
}

/// Statistic labels for `vname`, one per aggregation. Every label but the
/// last is followed by a space; the last one ends the legend line.
pub fn labels(vname: &str, aggregations: &[ConsolidationFn], format: &str) -> Vec<Element> {
    aggregations
        .iter()
        .enumerate()
        .map(|(idx, cf)| Element::Gprint {
            vname: vname.to_string(),
            cf: *cf,
            format: format.to_string(),
            newline: idx + 1 == aggregations.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_form() {
        let cases = vec![
            (
                Element::def("out", "/var/lib/pnp4nagios/host1/traffic.rrd", "2", ConsolidationFn::Average),
                "DEF:out=/var/lib/pnp4nagios/host1/traffic.rrd:2:AVERAGE",
            ),
            (Element::negate("in", "posin"), "CDEF:in=posin,-1,*"),
            (
                Element::comment("   Max   Avg   Last"),
                "COMMENT:\"   Max   Avg   Last\\l\"",
            ),
            (
                Element::area("in", Color::rgb(0x008800), "In   "),
                "AREA:in#008800:\"In   \"",
            ),
            (
                Element::line(1, "dropin", Color::rgb(0x0000ff), "Drop In  "),
                "LINE1:dropin#0000ff:\"Drop In  \"",
            ),
        ];

        for (element, expected) in cases {
            assert_eq!(element.to_string(), expected);
        }
    }

    #[test]
    fn argument_form() {
        let area = Element::area("out", Color::rgb(0x00cc00), "Out: tx");
        assert_eq!(area.to_arg(), "AREA:out#00cc00:Out\\: tx");

        let def = Element::def("posin", "C:/rrd/r.rrd", "1", ConsolidationFn::Average);
        assert_eq!(def.to_arg(), "DEF:posin=C\\:/rrd/r.rrd:1:AVERAGE");
    }

    #[test]
    fn statistic_labels() {
        let aggregations = [ConsolidationFn::Max, ConsolidationFn::Average, ConsolidationFn::Last];
        let rendered: Vec<String> = labels("posin", &aggregations, "%6.1lf %SB/s")
            .iter()
            .map(|label| label.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec![
                "GPRINT:posin:MAX:\"%6.1lf %SB/s \"",
                "GPRINT:posin:AVERAGE:\"%6.1lf %SB/s \"",
                "GPRINT:posin:LAST:\"%6.1lf %SB/s\\l\"",
            ]
        );
    }

    #[test]
    fn single_label_ends_line() {
        let rendered = labels("out", &[ConsolidationFn::Last], "%6.1lf");
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].to_arg(), "GPRINT:out:LAST:%6.1lf\\l");
        assert!(labels("out", &[], "%6.1lf").is_empty());
    }
}
