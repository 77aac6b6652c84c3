#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for switching individual hacks.

mod common;

use common::*;
use lnp_hacks::hacks::TargetFile;
use lnp_hacks::platform::Os;

#[test]
fn toggle_persists_and_rebuilds_its_file() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, false);

    assert_eq!(session.toggle_hack("reveal").unwrap(), Some(true));

    assert!(ctx.definitions()["reveal"].enabled);
    let on_load = String::from_utf8(ctx.read_init(TargetFile::OnLoad).unwrap()).unwrap();
    assert!(on_load.lines().any(|l| l == "!reveal"));
}

#[test]
fn toggle_leaves_other_hacks_and_files_alone() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();
    let before = ctx.definitions();
    let dfhack = ctx.read_init(TargetFile::Dfhack);

    session.toggle_hack("fastdwarf").unwrap();

    let after = ctx.definitions();
    for (name, def) in &after {
        if name == "fastdwarf" {
            assert_ne!(def.enabled, before[name].enabled);
        } else {
            assert_eq!(def, &before[name], "{name} changed");
        }
    }
    assert_eq!(ctx.read_init(TargetFile::Dfhack), dfhack);
    assert!(ctx.read_init(TargetFile::OnLoad).is_none());
    assert!(ctx.read_init(TargetFile::OnMapLoad).is_some());
}

#[test]
fn toggling_twice_restores_files() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();
    let dfhack = ctx.read_init(TargetFile::Dfhack);

    assert_eq!(session.toggle_hack("prospect").unwrap(), Some(false));
    assert_eq!(session.toggle_hack("prospect").unwrap(), Some(true));

    assert_eq!(ctx.read_init(TargetFile::Dfhack), dfhack);
}

#[test]
fn disabling_last_hack_deletes_file() {
    let ctx = TestContextBuilder::new()
        .with_hack("reveal", "!reveal", "Reveals the map", Some("onLoad"), true)
        .build();
    let (mut session, _log) = ctx.session(Os::Linux, false);
    session.rebuild_all().unwrap();
    assert!(ctx.read_init(TargetFile::OnLoad).is_some());

    assert_eq!(session.set_hack_enabled("reveal", false).unwrap(), Some(false));
    assert!(ctx.read_init(TargetFile::OnLoad).is_none());
}

#[test]
fn enable_is_idempotent() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, false);
    session.set_hack_enabled("reveal", true).unwrap();
    let first = ctx.read_init(TargetFile::OnLoad);

    assert_eq!(session.set_hack_enabled("reveal", true).unwrap(), Some(true));
    assert_eq!(ctx.read_init(TargetFile::OnLoad), first);
}

#[test]
fn unknown_hack_changes_nothing() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, false);
    let before = ctx.definitions();

    assert_eq!(session.toggle_hack("nope").unwrap(), None);
    assert_eq!(session.set_hack_enabled("nope", true).unwrap(), None);
    assert_eq!(ctx.definitions(), before);
}

#[test]
fn invalid_target_aborts_toggle() {
    let ctx = TestContextBuilder::new()
        .with_hack("worldgen", "worldgen-tweak", "", Some("onWorldGen"), false)
        .build();
    let (mut session, _log) = ctx.session(Os::Linux, false);

    assert_eq!(session.toggle_hack("worldgen").unwrap(), None);
    assert!(!ctx.definitions()["worldgen"].enabled);
}

#[test]
fn dry_run_toggle_persists_nothing() {
    let ctx = sample_context();
    let (mut session, _log) = ctx.session(Os::Linux, true);

    assert_eq!(session.toggle_hack("reveal").unwrap(), Some(true));
    assert!(!ctx.definitions()["reveal"].enabled);
    assert!(ctx.read_init(TargetFile::OnLoad).is_none());
}
