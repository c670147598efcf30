//! Graph templates for network interface counters.
//!
//! Data sources named `<kind>-<interface>` (`in-eth0`, `pktout-eth0`,
//! `dropin-eth0`, ...) are grouped per interface and turned into two
//! rrdtool graphs each: inbound/outbound bytes, and packets with their
//! errors and drops. Inbound series are drawn below the zero line.
//!
//! ```
//! use iftraffic_graph::{DataSource, Template};
//!
//! let sources = vec![
//!     DataSource::new("out-eth0", "r.rrd", "2"),
//!     DataSource::new("in-eth0", "r.rrd", "1"),
//! ];
//! let template = Template::build(&sources, "host1");
//!
//! assert_eq!(
//!     template.opt("eth0-bytes").unwrap(),
//!     "--vertical-label Bytes --title \"host1 / eth0 Bytes\""
//! );
//! assert!(template.def("eth0-bytes").unwrap().contains("CDEF:in=posin,-1,* "));
//! ```

pub mod config;
mod error;
pub mod perfdata;
pub mod rrd;
pub mod source;
pub mod template;

pub use config::Config;
pub use error::{Error, Result};
pub use source::{Counter, CounterKind, DataSource, Direction};
pub use template::{Graph, GraphKind, Template};
