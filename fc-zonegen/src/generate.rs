//! Zone configuration generation workflow.
//!
//! 1. **Resolve** command-line values and fabric defaults into a config
//! 2. **Guard** against writing over either input list or one output over the other
//! 3. **Read** both WWN lists (malformed lines abort the run)
//! 4. **Build** the zone plan for the requested topology
//! 5. **Verify** the input and plan; warnings abort only under `--strict`
//! 6. **Stage** the configuration and the optional JSON plan beside their targets
//! 7. **Commit** the configuration, then the plan
//!
//! Nothing is written unless every earlier stage succeeds, and a file that
//! cannot be staged leaves neither output behind.

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use fc_zonegen::config::{ConfigError, GenerateConfig, GenerateInputs};
use fc_zonegen::defaults::load_defaults;
use fc_zonegen::report::{render_issues, render_summary, render_written};
use fc_zonegen::verify::{build_verify_report, ListSource};
use tracing::debug;
use wwn_zone_core::{
    build, format_json, read_entries, render_plan, stage_file, write, NumberedEntry, WwnTable,
};

use crate::cli::Cli;
use crate::path_guard::ensure_outputs_distinct;

pub fn run_generate(cli: Cli) -> Result<()> {
    let defaults = match &cli.defaults {
        Some(path) => Some(load_defaults(path)?),
        None => None,
    };

    let inputs = GenerateInputs {
        hba_list: cli.hba_list,
        san_list: cli.san_list,
        vsan: cli.vsan,
        zonetype: cli.zonetype,
        zoneset_name: cli.zoneset_name,
        output: cli.output,
    };
    let config = match GenerateConfig::resolve(inputs, defaults.as_ref()) {
        Ok(config) => config,
        Err(err @ ConfigError::MissingArgument(_)) => {
            bail!("{err}\n\n{}", Cli::command().render_usage())
        }
        Err(err) => return Err(err.into()),
    };
    debug!(?config, "resolved generate config");

    let mut outputs = vec![("output", config.output.as_path())];
    if let Some(plan_path) = &cli.plan {
        outputs.push(("plan", plan_path.as_path()));
    }
    ensure_outputs_distinct(
        &outputs,
        &[config.hba_list.as_path(), config.san_list.as_path()],
    )?;

    let host_entries = read_entries(&config.hba_list)
        .with_context(|| format!("failed to read HBA list {}", config.hba_list.display()))?;
    let target_entries = read_entries(&config.san_list).with_context(|| {
        format!(
            "failed to read SAN interface list {}",
            config.san_list.display()
        )
    })?;

    if !cli.allow_empty {
        for (entries, path) in [
            (&host_entries, &config.hba_list),
            (&target_entries, &config.san_list),
        ] {
            if entries.is_empty() {
                return Err(ConfigError::EmptyTable {
                    path: path.display().to_string(),
                }
                .into());
            }
        }
    }

    let hosts = to_table(&host_entries);
    let targets = to_table(&target_entries);
    let plan = build(
        &hosts,
        &targets,
        config.mode,
        &config.vsan,
        &config.zoneset_name,
    );

    let report = build_verify_report(
        ListSource {
            label: "HBA list",
            entries: &host_entries,
        },
        ListSource {
            label: "SAN interface list",
            entries: &target_entries,
        },
        &plan,
    );
    if !report.issues.is_empty() {
        eprintln!("{}", render_issues(&report));
    }
    if cli.strict && report.warnings > 0 {
        bail!("verify failed in strict mode: {} warnings", report.warnings);
    }

    let lines = render_plan(&plan);
    let staged_output = stage_file(&write(&lines), &config.output)
        .with_context(|| format!("failed to write output file {}", config.output.display()))?;
    let staged_plan = match &cli.plan {
        Some(plan_path) => Some(
            stage_file(&format_json(&plan)?, plan_path)
                .with_context(|| format!("failed to write plan file {}", plan_path.display()))?,
        ),
        None => None,
    };

    staged_output
        .commit()
        .with_context(|| format!("failed to write output file {}", config.output.display()))?;
    if let Some(staged) = staged_plan {
        let plan_path = staged.path().display().to_string();
        staged
            .commit()
            .with_context(|| format!("failed to write plan file {plan_path}"))?;
    }

    if !cli.quiet {
        println!("zonetype is: {}", config.mode);
        println!("{}", render_summary(&plan, hosts.len(), targets.len()));
        println!("{}", render_written(&config.output, lines.len()));
    }
    Ok(())
}

fn to_table(entries: &[NumberedEntry]) -> WwnTable {
    entries.iter().map(|numbered| numbered.entry.clone()).collect()
}
