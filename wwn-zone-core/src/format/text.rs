use crate::builder::ZonePlan;

/// Format a one-line summary of a zone plan.
pub fn format_summary(plan: &ZonePlan, hosts: usize, targets: usize) -> String {
    format!(
        "zone_summary mode={} hosts={hosts} targets={targets} zones={} members={} vsan={} zoneset={}",
        plan.mode,
        plan.zones.len(),
        plan.member_count(),
        plan.zoneset.vsan,
        plan.zoneset.name
    )
}
