use crate::builder::ZonePlan;

/// Format a zone plan as pretty-printed JSON.
pub fn format_json(plan: &ZonePlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}
