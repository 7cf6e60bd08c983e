/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{CONFIG_FILE, find_config, load_config};
pub use types::ElfinderConfig;
