//! Long-form help text.

/// Shown under `--help`.
pub const ABOUT: &str = "Generate zone configuration commands for Cisco SAN fabric switches";

/// Shown after the options in `--help`.
pub const AFTER_HELP: &str = "\
Provide two lists, one `<WWN> <Alias>` pair per line:
  * the host adapters (for example ESX blade HBA WWNs)
  * the SAN interfaces on the fabric (for example storage processor port WWNs)

`--zonetype 1:1` creates one zone per host/target pair and reliably isolates
traffic between individual initiators and targets.
`--zonetype 1:many` is experimental: one zone per host holding every target.
It needs far fewer zones but lets the targets (including ports from separate
SANs) see each other.

A WWN listed in both files is never zoned with itself: in 1:1 mode that pair
gets no zone, so the zoneset holds fewer than hosts x targets zones, and in
1:many mode the host's own WWN is left out of its targets. Each such WWN is
reported as a `shared_wwn` warning.";

/// Extended guide printed by `--fullUsage`.
pub const FULL_USAGE_GUIDE: &str = "\
Applying the generated zone data
================================

Option 1: add a few zones to an existing zoneset

  Log in to the fabric switch over SSH or telnet and enter configuration mode:
      conf t

  Paste the block for one zone (from `zone name` through `exit`), then repeat
  for each zone you need.

  Add every new zone to the active zoneset:
      zoneset name <existing zoneset name> vsan <vsan#>
      member <new zone name>

  Leave zoneset configuration with `exit`, then activate and leave config mode:
      zoneset activate name <zoneset name> vsan <vsan#>
      exit

  Save the configuration:
      copy run start

Option 2: rebuild zoning for a whole fabric

  Schedule a fabric outage window.

  Copy the running or startup configuration to network storage using TFTP,
  FTP or SCP, and keep an untouched backup of that copy.

  Open the copy alongside the generated zone data. Remove every existing
  zone and zoneset block, then paste the generated zone and zoneset blocks
  at the end, immediately before the `zoneset activate name <zoneset name>`
  line. If the zoneset name changed, update that activate line to match.

  Save the edited configuration and connect to the switch console (network
  management settings are lost during the next steps). Download the edited
  file to bootflash: using TFTP, FTP or SCP.

  Run `write erase`, then `reload`. Configure an initial admin login and
  leave any setup wizard.

  Apply the edited configuration and save it:
      copy bootflash:<edited file> running-config
      copy run start

  Reload once more and confirm the switch comes up as expected.

Checking the result

  Zones that are active in the zoneset:
      show zoneset active vsan <vsan#>

  Which zoneset is active:
      show zoneset brief";
