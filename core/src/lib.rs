//! Pure building blocks of a PWA scaffold: the image catalogs and the text
//! templates written next to them.

mod models;
pub mod catalog;
pub mod manifest;
pub mod appcache;
pub mod sw;

pub use models::*;
pub use catalog::{ICONS, ICONS_DIR, LAUNCH_SCREENS, LAUNCH_SCREENS_DIR};
pub use manifest::{manifest, MANIFEST_FILE};
pub use appcache::{appcache, appcache_filename};
pub use sw::{service_worker, service_worker_versioned, CACHE_VERSION, SERVICE_WORKER_FILE};
