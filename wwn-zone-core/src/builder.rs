//! Zone pairing between host and target tables.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::model::{TopologyMode, Zone, ZoneSet};
use crate::table::WwnTable;

/// The zones generated for one run and the zoneset that references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZonePlan {
    pub mode: TopologyMode,
    pub zoneset: ZoneSet,
    pub zones: Vec<Zone>,
}

impl ZonePlan {
    /// Zone names produced more than once, in order of first appearance.
    ///
    /// Colliding zones are still emitted; on the switch the later zone shadows
    /// the earlier one.
    pub fn name_collisions(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for zone in &self.zones {
            *counts.entry(zone.name.as_str()).or_default() += 1;
        }

        let mut out = Vec::new();
        for zone in &self.zones {
            let name = zone.name.as_str();
            if counts.get(name).copied().unwrap_or(0) > 1 && !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }

    /// Total member lines across every zone.
    pub fn member_count(&self) -> usize {
        self.zones.iter().map(|zone| zone.members.len()).sum()
    }
}

/// Pair every host with the targets according to `mode`.
///
/// Either table being empty yields no zones and an empty zoneset. A zone
/// always has at least two distinct members: a host/target pair sharing a
/// WWN produces no one-to-one zone, and a host is never repeated among its
/// own one-to-many targets.
pub fn build(
    hosts: &WwnTable,
    targets: &WwnTable,
    mode: TopologyMode,
    vsan: &str,
    zoneset_name: &str,
) -> ZonePlan {
    let zones = if hosts.is_empty() || targets.is_empty() {
        Vec::new()
    } else {
        match mode {
            TopologyMode::OneToOne => one_to_one(hosts, targets),
            TopologyMode::OneToMany => one_to_many(hosts, targets),
        }
    };

    let zoneset = ZoneSet {
        name: zoneset_name.to_string(),
        vsan: vsan.to_string(),
        zones: zones.iter().map(|zone| zone.name.clone()).collect(),
    };

    debug!(
        mode = %mode,
        hosts = hosts.len(),
        targets = targets.len(),
        zones = zones.len(),
        "built zone plan"
    );

    ZonePlan {
        mode,
        zoneset,
        zones,
    }
}

fn one_to_one(hosts: &WwnTable, targets: &WwnTable) -> Vec<Zone> {
    let mut zones = Vec::with_capacity(hosts.len() * targets.len());
    for (host_wwn, host_alias) in hosts.iter() {
        for (target_wwn, target_alias) in targets.iter() {
            if host_wwn == target_wwn {
                continue;
            }
            zones.push(Zone {
                name: format!("{host_alias}_{target_alias}_zone"),
                members: vec![host_wwn.to_string(), target_wwn.to_string()],
            });
        }
    }
    zones
}

fn one_to_many(hosts: &WwnTable, targets: &WwnTable) -> Vec<Zone> {
    let mut zones = Vec::with_capacity(hosts.len());
    for (host_wwn, host_alias) in hosts.iter() {
        let mut members = Vec::with_capacity(targets.len() + 1);
        members.push(host_wwn.to_string());
        members.extend(
            targets
                .wwns()
                .filter(|wwn| *wwn != host_wwn)
                .map(ToOwned::to_owned),
        );
        if members.len() < 2 {
            continue;
        }
        zones.push(Zone {
            name: format!("{host_alias}_zone"),
            members,
        });
    }
    zones
}
