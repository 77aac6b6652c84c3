//! Configuration stores: hack definitions and user settings.
pub mod store;
pub mod toml_loader;
pub mod user;

pub use store::{Definitions, HackDefinition, HackStore, TomlHackStore};
pub use user::{TomlUserConfig, UserConfig};

/// File name of the hack definition store under the launcher root.
pub const HACKS_FILE: &str = "hacks.toml";

/// File name of the user settings under the launcher root.
pub const USER_FILE: &str = "user.toml";

/// User-config key holding the global DFHack switch on config-flag platforms.
pub const USE_DFHACK_KEY: &str = "use_dfhack";

/// User-config key overriding the detected installation variations.
pub const VARIATIONS_KEY: &str = "variations";
