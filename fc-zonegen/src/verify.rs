//! Pre-generation checks on the parsed WWN lists and the resulting plan.
//!
//! Every finding is a warning and never changes what is generated. Names and
//! VSANs are passed through as given; `--strict` turns any warning into a
//! failed run.

use std::collections::BTreeMap;

use serde::Serialize;
use wwn_zone_core::{NumberedEntry, ZonePlan};

/// NX-OS limit on zone and zoneset name length.
pub const MAX_NAME_LEN: usize = 64;

/// One warning: a stable snake_case code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyIssue {
    pub code: String,
    pub message: String,
}

/// All warnings for one run, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub warnings: usize,
    pub issues: Vec<VerifyIssue>,
}

/// One input list with the label used in messages.
#[derive(Debug, Clone, Copy)]
pub struct ListSource<'a> {
    pub label: &'a str,
    pub entries: &'a [NumberedEntry],
}

pub fn build_verify_report(
    hosts: ListSource<'_>,
    targets: ListSource<'_>,
    plan: &ZonePlan,
) -> VerifyReport {
    let mut issues = Vec::new();
    issues.extend(vsan_issues(&plan.zoneset.vsan));
    issues.extend(name_issues("zoneset name", &plan.zoneset.name));
    for list in [hosts, targets] {
        issues.extend(list_issues(list));
    }
    issues.extend(shared_wwn_issues(hosts, targets));
    issues.extend(zone_name_issues(plan));

    VerifyReport {
        warnings: issues.len(),
        issues,
    }
}

/// Return `true` for eight colon-separated hex pairs or sixteen bare hex digits.
pub fn is_valid_wwn(wwn: &str) -> bool {
    let is_hex_pair = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit());
    if wwn.contains(':') {
        wwn.split(':').count() == 8 && wwn.split(':').all(is_hex_pair)
    } else {
        wwn.len() == 16 && wwn.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// Return `true` if `name` only uses characters the switch accepts in zone names.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '$' | '^'))
}

fn vsan_issues(vsan: &str) -> Vec<VerifyIssue> {
    match vsan.parse::<u16>() {
        Ok(id) if (1..=4094).contains(&id) => Vec::new(),
        _ => vec![warn(
            "invalid_vsan",
            format!("VSAN {vsan:?} is not a number between 1 and 4094"),
        )],
    }
}

fn name_issues(what: &str, name: &str) -> Vec<VerifyIssue> {
    let mut issues = Vec::new();
    if !is_valid_name(name) {
        issues.push(warn(
            "invalid_name_char",
            format!("{what} {name:?} may only contain letters, digits, '_', '-', '$' and '^'"),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        issues.push(warn(
            "name_too_long",
            format!("{what} {name:?} is longer than {MAX_NAME_LEN} characters"),
        ));
    }
    issues
}

fn list_issues(list: ListSource<'_>) -> Vec<VerifyIssue> {
    let mut issues = Vec::new();
    let mut by_wwn: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    let mut by_alias: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for numbered in list.entries {
        let entry = &numbered.entry;
        if !is_valid_wwn(&entry.wwn) {
            issues.push(warn(
                "malformed_wwn",
                format!(
                    "{} line {}: {:?} is not a 64-bit WWN (xx:xx:xx:xx:xx:xx:xx:xx)",
                    list.label, numbered.line, entry.wwn
                ),
            ));
        }
        if !is_valid_name(&entry.alias) {
            issues.push(warn(
                "invalid_name_char",
                format!(
                    "{} line {}: alias {:?} may only contain letters, digits, '_', '-', '$' and '^'",
                    list.label, numbered.line, entry.alias
                ),
            ));
        }
        by_wwn.entry(entry.wwn.as_str()).or_default().push(numbered.line);
        by_alias.entry(entry.alias.as_str()).or_default().push(numbered.line);
    }

    for (wwn, lines) in by_wwn.into_iter().filter(|(_, lines)| lines.len() > 1) {
        issues.push(warn(
            "duplicate_wwn",
            format!(
                "{}: {wwn} appears on lines {}; the alias from line {} is used",
                list.label,
                join_lines(&lines),
                lines.last().copied().unwrap_or_default()
            ),
        ));
    }
    for (alias, lines) in by_alias.into_iter().filter(|(_, lines)| lines.len() > 1) {
        issues.push(warn(
            "duplicate_alias",
            format!(
                "{}: alias {alias} is used on lines {}",
                list.label,
                join_lines(&lines)
            ),
        ));
    }
    issues
}

fn shared_wwn_issues(hosts: ListSource<'_>, targets: ListSource<'_>) -> Vec<VerifyIssue> {
    let mut seen = Vec::new();
    for host in hosts.entries {
        let wwn = host.entry.wwn.as_str();
        if seen.contains(&wwn) {
            continue;
        }
        if targets.entries.iter().any(|t| t.entry.wwn == wwn) {
            seen.push(wwn);
        }
    }
    seen.into_iter()
        .map(|wwn| {
            warn(
                "shared_wwn",
                format!(
                    "{wwn} is listed in both {} and {}; it is never zoned with itself",
                    hosts.label, targets.label
                ),
            )
        })
        .collect()
}

fn zone_name_issues(plan: &ZonePlan) -> Vec<VerifyIssue> {
    let mut issues: Vec<VerifyIssue> = plan
        .name_collisions()
        .into_iter()
        .map(|name| {
            warn(
                "zone_name_collision",
                format!("zone name {name} is generated more than once; the later zone shadows the earlier one"),
            )
        })
        .collect();

    let mut reported = Vec::new();
    for zone in &plan.zones {
        if zone.name.len() > MAX_NAME_LEN && !reported.contains(&zone.name.as_str()) {
            reported.push(zone.name.as_str());
            issues.push(warn(
                "zone_name_too_long",
                format!(
                    "zone name {} is longer than {MAX_NAME_LEN} characters",
                    zone.name
                ),
            ));
        }
    }
    issues
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn warn(code: &str, message: String) -> VerifyIssue {
    VerifyIssue {
        code: code.to_string(),
        message,
    }
}
