use std::path::PathBuf;
use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const HOSTS: &str = "10:00:00:00:c9:01:01:01 hba1\n";
const TARGETS: &str = "50:06:01:60:b0:a0:3c:ee spA\n50:06:01:61:b0:a0:3c:ee spB\n";

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

fn zonegen() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fc-zonegen"))
}

fn write_lists(dir: &Path, hosts: &str, targets: &str) -> (PathBuf, PathBuf) {
    let hba = dir.join("hbas.txt");
    let san = dir.join("san.txt");
    fs::write(&hba, hosts).expect("hba write");
    fs::write(&san, targets).expect("san write");
    (hba, san)
}

#[test]
fn one_to_one_writes_zone_per_pair() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .success()
        .stdout(predicate::str::contains("zonetype is: 1:1"))
        .stdout(predicate::str::contains("zones=2"));

    let written = fs::read_to_string(&out).expect("output file");
    assert_eq!(
        written,
        "zone name hba1_spA_zone vsan 10
    member pwwn 10:00:00:00:c9:01:01:01
    member pwwn 50:06:01:60:b0:a0:3c:ee
exit
zone name hba1_spB_zone vsan 10
    member pwwn 10:00:00:00:c9:01:01:01
    member pwwn 50:06:01:61:b0:a0:3c:ee
exit
zoneset name prodzs vsan 10
    member hba1_spA_zone
    member hba1_spB_zone
"
    );
}

#[test]
fn one_to_many_writes_zone_per_host() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("--hbalistfile")
        .arg(path_as_str(&hba))
        .arg("--saninterfacelistfile")
        .arg(path_as_str(&san))
        .arg("--vsan")
        .arg("10")
        .arg("--zonetype")
        .arg("1:many")
        .arg("--zonesetName")
        .arg("prodzs")
        .arg("--outfile")
        .arg(path_as_str(&out))
        .assert()
        .success()
        .stdout(predicate::str::contains("zonetype is: 1:many"));

    let written = fs::read_to_string(&out).expect("output file");
    assert_eq!(
        written,
        "zone name hba1_zone vsan 10
    member pwwn 10:00:00:00:c9:01:01:01
    member pwwn 50:06:01:60:b0:a0:3c:ee
    member pwwn 50:06:01:61:b0:a0:3c:ee
exit
zoneset name prodzs vsan 10
    member hba1_zone
"
    );
}

#[test]
fn fixtures_produce_host_times_target_zones() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(fixture("fixtures/hosts.txt"))
        .arg("-s")
        .arg(fixture("fixtures/san_interfaces.txt"))
        .arg("-v")
        .arg("20")
        .arg("--zoneset-name")
        .arg("fabric_a")
        .arg("-o")
        .arg(path_as_str(&out))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).expect("output file");
    assert_eq!(written.matches("zone name ").count(), 6);
    assert_eq!(written.matches("\nexit\n").count(), 6);
    assert!(written.contains("zone name esx02_hba0_spB0_zone vsan 20"));
    assert!(written.ends_with("    member esx02_hba0_spB0_zone\n"));
}

#[test]
fn malformed_line_fails_without_output() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, "50:06:01:60:b0:a0:3c:ee spA\nonlyonetoken\n");
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed line 2"))
        .stderr(predicate::str::contains("san.txt"));

    assert!(!out.exists());
}

#[test]
fn invalid_zonetype_is_rejected_before_reading_files() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&dir.path().join("missing-hbas.txt")))
        .arg("-s")
        .arg(path_as_str(&dir.path().join("missing-san.txt")))
        .arg("-v")
        .arg("10")
        .arg("-t")
        .arg("1:2")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .failure()
        .stderr(predicate::str::contains("1:2"))
        .stderr(predicate::str::contains("not found").not());

    assert!(!out.exists());
}

#[test]
fn missing_vsan_prints_usage() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .failure()
        .stderr(predicate::str::contains("the --vsan option was not specified"))
        .stderr(predicate::str::contains("Usage:"));

    assert!(!out.exists());
}

#[test]
fn missing_input_file_is_reported_with_path() {
    let dir = tempdir().expect("tempdir");
    let (_, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&dir.path().join("nope.txt")))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .failure()
        .stderr(predicate::str::contains("WWN list file not found"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn full_usage_prints_guide_without_other_options() {
    zonegen()
        .arg("-u")
        .assert()
        .success()
        .stdout(predicate::str::contains("--hbalistfile"))
        .stdout(predicate::str::contains("zoneset activate name"))
        .stdout(predicate::str::contains("show zoneset brief"));
}

#[test]
fn empty_list_fails_unless_allowed() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("zones.cfg");

    let run = |allow_empty: bool| {
        let mut cmd = zonegen();
        cmd.arg("-a")
            .arg(fixture("fixtures/empty.txt"))
            .arg("-s")
            .arg(fixture("fixtures/san_interfaces.txt"))
            .arg("-v")
            .arg("10")
            .arg("-z")
            .arg("prodzs")
            .arg("-o")
            .arg(path_as_str(&out));
        if allow_empty {
            cmd.arg("--allow-empty");
        }
        cmd.assert()
    };

    run(false)
        .failure()
        .stderr(predicate::str::contains("contains no WWN entries"));
    assert!(!out.exists());

    run(true).success();
    assert_eq!(
        fs::read_to_string(&out).expect("output file"),
        "zoneset name prodzs vsan 10\n"
    );
}

#[test]
fn defaults_file_fills_missing_options() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let defaults = dir.path().join("fabric.toml");
    fs::write(
        &defaults,
        "vsan = \"30\"\nzoneset_name = \"fabric_b\"\nzonetype = \"1:many\"\n",
    )
    .expect("defaults write");
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-o")
        .arg(path_as_str(&out))
        .arg("--defaults")
        .arg(path_as_str(&defaults))
        .assert()
        .success();

    let written = fs::read_to_string(&out).expect("output file");
    assert!(written.starts_with("zone name hba1_zone vsan 30\n"));
    assert!(written.contains("zoneset name fabric_b vsan 30\n"));
}

#[test]
fn plan_file_contains_zones_as_json() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");
    let plan = dir.path().join("plan.json");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .arg("--plan")
        .arg(path_as_str(&plan))
        .assert()
        .success();

    let raw = fs::read_to_string(&plan).expect("plan file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["mode"], "1:1");
    assert_eq!(value["zoneset"]["zones"][1], "hba1_spB_zone");
    assert_eq!(value["zones"].as_array().map(Vec::len), Some(2));
}

#[test]
fn duplicate_alias_warns_and_strict_fails() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(
        dir.path(),
        "10:00:00:00:c9:01:01:01 esx\n10:00:00:00:c9:01:01:02 esx\n",
        TARGETS,
    );
    let out = dir.path().join("zones.cfg");

    let base = |cmd: &mut Command| {
        cmd.arg("-a")
            .arg(path_as_str(&hba))
            .arg("-s")
            .arg(path_as_str(&san))
            .arg("-v")
            .arg("10")
            .arg("-z")
            .arg("prodzs")
            .arg("-o")
            .arg(path_as_str(&out));
    };

    let mut lenient = zonegen();
    base(&mut lenient);
    lenient
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: duplicate_alias"))
        .stderr(predicate::str::contains("zone_name_collision"));
    fs::remove_file(&out).expect("remove output");

    let mut strict = zonegen();
    base(&mut strict);
    strict
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verify failed in strict mode"));
    assert!(!out.exists());
}

#[test]
fn invalid_alias_character_warns_and_strict_fails() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), "10:00:00:00:c9:01:01:01 esx01.lab\n", TARGETS);
    let out = dir.path().join("zones.cfg");

    let base = |cmd: &mut Command| {
        cmd.arg("-a")
            .arg(path_as_str(&hba))
            .arg("-s")
            .arg(path_as_str(&san))
            .arg("-v")
            .arg("10")
            .arg("-z")
            .arg("prodzs")
            .arg("-o")
            .arg(path_as_str(&out));
    };

    let mut lenient = zonegen();
    base(&mut lenient);
    lenient
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: invalid_name_char"))
        .stderr(predicate::str::contains("esx01.lab"));
    let written = fs::read_to_string(&out).expect("output file");
    assert!(written.starts_with("zone name esx01.lab_spA_zone vsan 10\n"));
    fs::remove_file(&out).expect("remove output");

    let mut strict = zonegen();
    base(&mut strict);
    strict
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verify failed in strict mode: 1 warnings"));
    assert!(!out.exists());
}

#[test]
fn shared_wwn_is_never_zoned_with_itself() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(
        dir.path(),
        HOSTS,
        "10:00:00:00:c9:01:01:01 loop\n50:06:01:60:b0:a0:3c:ee spA\n",
    );
    let out = dir.path().join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: shared_wwn"))
        .stdout(predicate::str::contains("hosts=1 targets=2 zones=1"));

    assert_eq!(
        fs::read_to_string(&out).expect("output file"),
        "zone name hba1_spA_zone vsan 10
    member pwwn 10:00:00:00:c9:01:01:01
    member pwwn 50:06:01:60:b0:a0:3c:ee
exit
zoneset name prodzs vsan 10
    member hba1_spA_zone
"
    );
}

#[test]
fn help_explains_shared_wwn_handling() {
    zonegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("never zoned with itself"))
        .stdout(predicate::str::contains("shared_wwn"));
}

#[test]
fn missing_output_directory_leaves_no_plan() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("missing").join("zones.cfg");
    let plan = dir.path().join("plan.json");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .arg("--plan")
        .arg(path_as_str(&plan))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output file"));

    assert!(!out.exists());
    assert!(!plan.exists());
    assert_eq!(fs::read_dir(dir.path()).expect("list").count(), 2);
}

#[test]
fn plan_and_output_naming_one_file_is_refused() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);
    let out = dir.path().join("zones.cfg");
    let plan = dir.path().join("out").join("..").join("zones.cfg");

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&out))
        .arg("--plan")
        .arg(path_as_str(&plan))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to write plan"));

    assert!(!out.exists());
}

#[test]
fn refuses_to_overwrite_input_list() {
    let dir = tempdir().expect("tempdir");
    let (hba, san) = write_lists(dir.path(), HOSTS, TARGETS);

    zonegen()
        .arg("-a")
        .arg(path_as_str(&hba))
        .arg("-s")
        .arg(path_as_str(&san))
        .arg("-v")
        .arg("10")
        .arg("-z")
        .arg("prodzs")
        .arg("-o")
        .arg(path_as_str(&san))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite WWN list"));

    assert_eq!(fs::read_to_string(&san).expect("san list"), TARGETS);
}
