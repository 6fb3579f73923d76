use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use fc_zonegen::usage::{ABOUT, AFTER_HELP};
use wwn_zone_core::TopologyMode;

#[derive(Parser, Debug)]
#[command(name = "fc-zonegen", version)]
#[command(about = ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    /// File of host adapter `<WWN> <Alias>` lines.
    #[arg(short = 'a', long = "hbalistfile", value_name = "HBA_LIST_FILE")]
    pub hba_list: Option<PathBuf>,
    /// File of SAN interface `<WWN> <Alias>` lines.
    #[arg(
        short = 's',
        long = "saninterfacelistfile",
        value_name = "SAN_INTERFACE_LIST_FILE"
    )]
    pub san_list: Option<PathBuf>,
    /// VSAN number the zones and zoneset belong to.
    #[arg(short = 'v', long)]
    pub vsan: Option<String>,
    /// Zoning model [default: 1:1].
    #[arg(short = 't', long, value_name = "1:1|1:many", value_parser = TopologyMode::from_str)]
    pub zonetype: Option<TopologyMode>,
    /// Name of the generated zoneset.
    #[arg(short = 'z', long = "zonesetName", visible_alias = "zoneset-name")]
    pub zoneset_name: Option<String>,
    /// File the configuration commands are written to.
    #[arg(short = 'o', long = "outfile", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
    /// Print help plus a guide to applying the generated commands.
    #[arg(short = 'u', long = "fullUsage", visible_alias = "full-usage")]
    pub full_usage: bool,
    /// TOML file supplying default vsan, zoneset_name and zonetype.
    #[arg(long, value_name = "DEFAULTS_FILE")]
    pub defaults: Option<PathBuf>,
    /// Also write the zone plan as JSON.
    #[arg(long, value_name = "PLAN_FILE")]
    pub plan: Option<PathBuf>,
    /// Treat input warnings as failures.
    #[arg(long)]
    pub strict: bool,
    /// Generate an empty zoneset when a list has no entries instead of failing.
    #[arg(long)]
    pub allow_empty: bool,
    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
    /// Enable debug logging on stderr.
    #[arg(long)]
    pub verbose: bool,
}
