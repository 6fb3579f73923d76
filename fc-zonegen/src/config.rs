//! Run configuration resolved from command-line values and an optional defaults file.

use std::path::PathBuf;

use thiserror::Error;
use wwn_zone_core::{ModeParseError, TopologyMode};

use crate::defaults::Defaults;

/// Errors raised while assembling a [`GenerateConfig`] or checking its inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option was supplied neither on the command line nor in defaults.
    #[error("the --{0} option was not specified")]
    MissingArgument(&'static str),
    /// The zone type from a defaults file was not a known topology.
    #[error(transparent)]
    InvalidTopologyMode(#[from] ModeParseError),
    /// An input list contained no entries.
    #[error("{path} contains no WWN entries; pass --allow-empty to generate an empty zoneset")]
    EmptyTable { path: String },
}

/// Raw, possibly incomplete values gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateInputs {
    pub hba_list: Option<PathBuf>,
    pub san_list: Option<PathBuf>,
    pub vsan: Option<String>,
    pub zonetype: Option<TopologyMode>,
    pub zoneset_name: Option<String>,
    pub output: Option<PathBuf>,
}

/// Everything one generation run needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub hba_list: PathBuf,
    pub san_list: PathBuf,
    pub vsan: String,
    pub mode: TopologyMode,
    pub zoneset_name: String,
    pub output: PathBuf,
}

impl GenerateConfig {
    /// Merge command-line values over `defaults` and require every mandatory field.
    ///
    /// The first missing option is reported, checked in this order: host
    /// list, SAN interface list, output file, VSAN, zoneset name.
    /// Blank strings count as missing.
    pub fn resolve(
        inputs: GenerateInputs,
        defaults: Option<&Defaults>,
    ) -> Result<Self, ConfigError> {
        let hba_list = inputs
            .hba_list
            .ok_or(ConfigError::MissingArgument("hbalistfile"))?;
        let san_list = inputs
            .san_list
            .ok_or(ConfigError::MissingArgument("saninterfacelistfile"))?;
        let output = inputs
            .output
            .ok_or(ConfigError::MissingArgument("outfile"))?;
        let vsan = non_blank(inputs.vsan)
            .or_else(|| defaults.and_then(|d| non_blank(d.vsan.clone())))
            .ok_or(ConfigError::MissingArgument("vsan"))?;
        let zoneset_name = non_blank(inputs.zoneset_name)
            .or_else(|| defaults.and_then(|d| non_blank(d.zoneset_name.clone())))
            .ok_or(ConfigError::MissingArgument("zonesetName"))?;

        let mode = match (inputs.zonetype, defaults.and_then(|d| d.zonetype.as_deref())) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => TopologyMode::default(),
        };

        Ok(Self {
            hba_list,
            san_list,
            vsan,
            mode,
            zoneset_name,
            output,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
