#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for regenerating init files from `hacks.toml`.

mod common;

use common::*;
use lnp_hacks::hacks::TargetFile;
use lnp_hacks::logging::Outcome;
use lnp_hacks::platform::Os;
use lnp_hacks::resources::ResourceChange;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn rebuild_renders_enabled_hacks_by_name() {
    let ctx = sample_context();
    let (session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();

    let dfhack = String::from_utf8(ctx.read_init(TargetFile::Dfhack).unwrap()).unwrap();
    insta::assert_snapshot!(dfhack, @r"
    # Generated by LNP

    # autodump
    # Dump items
    #to the cursor
    autodump

    # prospect
    # Show minerals
    prospect all
    ");
}

#[test]
fn reveal_example_is_byte_exact() {
    let ctx = TestContextBuilder::new()
        .with_hack("reveal", "!reveal", "Reveals the map", Some("onLoad"), true)
        .build();
    let (session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();

    assert_eq!(
        ctx.read_init(TargetFile::OnLoad).unwrap(),
        b"# Generated by LNP\n\n# reveal\n# Reveals the map\n!reveal\n\n"
    );
    assert!(ctx.read_init(TargetFile::Dfhack).is_none());
    assert!(ctx.read_init(TargetFile::OnMapLoad).is_none());
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

#[test]
fn second_rebuild_changes_nothing() {
    let ctx = sample_context();
    let (session, log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();
    let before = ctx.read_init(TargetFile::Dfhack).unwrap();

    let changes = session.rebuild_all().unwrap();

    assert!(
        changes
            .iter()
            .all(|(_, change)| *change == ResourceChange::AlreadyCorrect),
        "got {changes:?}"
    );
    assert_eq!(ctx.read_init(TargetFile::Dfhack).unwrap(), before);
    assert_eq!(log.failure_count(), 0);
}

#[test]
fn stale_file_is_removed_when_nothing_targets_it() {
    let ctx = sample_context();
    let stale = ctx.init_file(TargetFile::OnMapLoad);
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, "# Generated by LNP\n\nold\n").unwrap();

    let (session, log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();

    assert!(!stale.exists());
    assert!(
        log.outcomes()
            .iter()
            .any(|o| o.name == "onMapLoad_LNP.init" && o.status == Outcome::Removed)
    );
}

#[test]
fn dry_run_previews_without_writing() {
    let ctx = sample_context();
    let (session, log) = ctx.session(Os::Linux, true);
    session.rebuild_all().unwrap();

    for file in TargetFile::ALL {
        assert!(ctx.read_init(file).is_none(), "{file} was written");
    }
    let previews = log
        .outcomes()
        .iter()
        .filter(|o| o.status == Outcome::DryRun)
        .count();
    assert_eq!(previews, 1);
}

#[test]
fn invalid_target_is_skipped() {
    let ctx = TestContextBuilder::new()
        .with_hack("worldgen", "worldgen-tweak", "", Some("onWorldGen"), true)
        .with_hack("reveal", "!reveal", "", Some("onLoad"), true)
        .build();
    let (session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();

    for file in TargetFile::ALL {
        let content = ctx.read_init(file).unwrap_or_default();
        assert!(!String::from_utf8_lossy(&content).contains("worldgen-tweak"));
    }
    assert!(ctx.read_init(TargetFile::OnLoad).is_some());
}

// ---------------------------------------------------------------------------
// File-derived state
// ---------------------------------------------------------------------------

#[test]
fn statuses_round_trip_through_init_files() {
    let ctx = sample_context();
    let (session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();

    let statuses = session.hack_statuses().unwrap();
    let names: Vec<&str> = statuses.iter().map(|s| s.hack.name.as_str()).collect();
    assert_eq!(names, ["autodump", "fastdwarf", "prospect", "reveal"]);
    for status in &statuses {
        assert_eq!(
            status.materialized, status.hack.enabled,
            "{} out of sync",
            status.hack.name
        );
    }
}

#[test]
fn missing_init_directory_reads_as_nothing_enabled() {
    let ctx = sample_context();
    let (session, _log) = ctx.session(Os::Linux, false);
    let statuses = session.hack_statuses().unwrap();
    assert!(statuses.iter().all(|s| !s.materialized));
}
