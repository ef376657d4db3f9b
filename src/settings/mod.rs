//! Configuration loading and resolution.
//!
//! `load` layers default files, `--config` files and `ROLO__*` environment
//! variables, applies CLI overrides and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
