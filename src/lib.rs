//! Locate a project's assets directory and open it in an external editor.
//!
//! The root directory comes from a [`root::RootProvider`], the
//! [`resolver`] picks the assets directory under it, and the [`launcher`]
//! starts the editor there without waiting for it.

pub mod config;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod logging;
pub mod resolver;
pub mod root;

pub use config::Config;
pub use error::AssetsError;
pub use invocation::open_assets;
pub use resolver::{resolve, Resolution};
