//! Fibre Channel zone generation from host and target WWN alias lists.
//!
//! Two `<WWN> <Alias>` lists are read into ordered [`WwnTable`]s, paired by a
//! [`TopologyMode`] into a [`ZonePlan`], and rendered as NX-OS style
//! `zone` / `zoneset` configuration lines ready to paste into a switch session.
//!
//! ```
//! use wwn_zone_core::{build, parse, render_plan, TopologyMode};
//!
//! let hosts = parse("10:00:00:00:c9:01:01:01 hba1\n", "hosts").unwrap();
//! let targets = parse("50:06:01:60:b0:a0:3c:ee spA\n", "targets").unwrap();
//! let plan = build(&hosts, &targets, TopologyMode::OneToOne, "10", "prodzs");
//!
//! let lines = render_plan(&plan);
//! assert_eq!(lines[0], "zone name hba1_spA_zone vsan 10");
//! ```

pub mod builder;
pub mod format;
pub mod model;
pub mod parser;
pub mod table;
pub mod writer;

pub use builder::{build, ZonePlan};
pub use format::{format_json, format_summary};
pub use model::{ModeParseError, TopologyMode, Zone, ZoneSet};
pub use parser::{parse, parse_entries, parse_file, read_entries, NumberedEntry, ParseError};
pub use table::{WwnEntry, WwnTable};
pub use writer::{render, render_plan, stage_file, write, write_file, StagedFile, WriteError};
