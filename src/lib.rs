//! Scaffold Progressive Web App boilerplate into a directory: icons, launch
//! screens, `manifest.json`, an app-cache manifest and a service worker.

pub mod config;
pub mod create;
pub mod error;
pub mod icon;
pub mod images;
pub mod logger;
pub mod models;

pub use create::{
    app_name, create, resolve_source, set_app_cache, set_icons, set_launch_screens, set_manifest,
    set_service_worker,
};
pub use create_pwa_core;
pub use error::{CreateError, Result};
pub use images::{generate_icons, generate_launch_screens, GenerationJob, ImageResizer, Resizer};
pub use models::{Config, CreateOptions, Created, Overrides, Settings};
