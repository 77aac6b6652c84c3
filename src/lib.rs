//! DFHack hack manager for the Lazy Newb Pack launcher.
//!
//! Hacks are named DFHack commands that can be switched on and off.  Their
//! definitions and enabled state live in `hacks.toml`; the enabled ones are
//! written into DFHack's init scripts so the game picks them up.  A separate
//! global switch decides whether DFHack is used at all.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: TOML stores for hack definitions and user settings
//! - **[`hacks`]**: the registry and the init-file synchronizer
//! - **[`engine`]**: the platform-dependent global DFHack switch
//! - **[`resources`]**: idempotent `check + apply` primitives
//! - **[`session`]** and **[`commands`]**: per-invocation wiring and subcommands
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod exec;
pub mod hacks;
pub mod install;
pub mod launcher;
pub mod logging;
pub mod paths;
pub mod platform;
pub mod resources;
pub mod session;
