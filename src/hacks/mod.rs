//! Hack definitions, the registry that enables them, and the init-file
//! synchronizer that materializes them for DFHack.
pub mod hack;
pub mod registry;
pub mod sync;

pub use hack::{Hack, TargetFile};
pub use registry::{HackRegistry, Hacks, Transition};
pub use sync::{DEFAULT_SUFFIX, InitFileSynchronizer};
