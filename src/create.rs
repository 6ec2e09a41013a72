//! The scaffold run: resolve the app name, then write every output into the
//! working directory in a fixed order.

use std::fs;
use std::path::{Path, PathBuf};

use create_pwa_core::{
    appcache, appcache_filename, manifest, service_worker, ICONS_DIR, LAUNCH_SCREENS_DIR,
    MANIFEST_FILE, SERVICE_WORKER_FILE,
};
use log::{debug, info};
use serde::Deserialize;

use crate::error::{CreateError, Result};
use crate::images::{generate_icons, generate_launch_screens, Resizer};
use crate::models::{CreateOptions, Created};

pub const PACKAGE_FILE: &str = "package.json";
pub const DEFAULT_ICON: &str = "icon.png";
pub const DEFAULT_LAUNCH: &str = "launch.png";

const FALLBACK_NAME: &str = "app";

#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    #[serde(default)]
    name: Option<String>,
}

/// `name` from `package.json` when set, otherwise the directory's own name.
pub fn app_name(working_dir: &Path) -> Result<String> {
    let pkg = working_dir.join(PACKAGE_FILE);
    if pkg.is_file() {
        let content = fs::read_to_string(&pkg).map_err(CreateError::io(&pkg))?;
        let desc: PackageDescriptor =
            serde_json::from_str(&content).map_err(|e| CreateError::Package { path: pkg.clone(), source: e })?;
        if let Some(name) = desc.name.filter(|n| !n.trim().is_empty()) {
            return Ok(name);
        }
    }
    // "." or "site/.." carry no usable final segment until resolved.
    let resolved = fs::canonicalize(working_dir)
        .or_else(|_| std::path::absolute(working_dir))
        .unwrap_or_else(|_| working_dir.to_path_buf());
    Ok(resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string()))
}

/// Pick the source image for a generator.
///
/// An explicit path is used as given (relative to `working_dir`) and must
/// exist; an explicit empty path disables the generator. Without one, the
/// default file is used only if it is there.
pub fn resolve_source(working_dir: &Path, explicit: Option<&Path>, default: &str) -> Option<PathBuf> {
    match explicit {
        Some(p) if p.as_os_str().is_empty() => None,
        Some(p) => Some(working_dir.join(p)),
        None => {
            let fallback = working_dir.join(default);
            fallback.is_file().then_some(fallback)
        }
    }
}

fn write_file(path: PathBuf, content: &str) -> Result<PathBuf> {
    fs::write(&path, content).map_err(CreateError::io(&path))?;
    info!("wrote {}", path.display());
    Ok(path)
}

pub fn set_icons(working_dir: &Path, source: Option<&Path>, resizer: &dyn Resizer) -> Result<Vec<PathBuf>> {
    let Some(source) = source else {
        debug!("no icon source, skipping icons");
        return Ok(Vec::new());
    };
    let written = generate_icons(resizer, source, &working_dir.join(ICONS_DIR))?;
    info!("generated {} icons from {}", written.len(), source.display());
    Ok(written)
}

pub fn set_app_cache(working_dir: &Path, name: &str) -> Result<PathBuf> {
    write_file(working_dir.join(appcache_filename(name)), &appcache(name))
}

pub fn set_manifest(working_dir: &Path, name: &str) -> Result<PathBuf> {
    write_file(working_dir.join(MANIFEST_FILE), &manifest(name))
}

pub fn set_service_worker(working_dir: &Path, name: &str) -> Result<PathBuf> {
    write_file(working_dir.join(SERVICE_WORKER_FILE), &service_worker(name))
}

pub fn set_launch_screens(
    working_dir: &Path,
    source: Option<&Path>,
    resizer: &dyn Resizer,
) -> Result<Vec<PathBuf>> {
    let Some(source) = source else {
        debug!("no launch screen source, skipping launch screens");
        return Ok(Vec::new());
    };
    let written = generate_launch_screens(resizer, source, &working_dir.join(LAUNCH_SCREENS_DIR))?;
    info!("generated {} launch screens from {}", written.len(), source.display());
    Ok(written)
}

/// Scaffold a PWA into `working_dir`. Stops at the first failing step.
pub fn create(working_dir: &Path, options: &CreateOptions, resizer: &dyn Resizer) -> Result<Created> {
    let name = app_name(working_dir)?;
    info!("creating PWA files for '{}' in {}", name, working_dir.display());

    let icon = resolve_source(working_dir, options.icon.as_deref(), DEFAULT_ICON);
    let launch = resolve_source(working_dir, options.launch.as_deref(), DEFAULT_LAUNCH);

    let mut files = set_icons(working_dir, icon.as_deref(), resizer)?;
    files.push(set_app_cache(working_dir, &name)?);
    files.push(set_manifest(working_dir, &name)?);
    files.push(set_service_worker(working_dir, &name)?);
    files.extend(set_launch_screens(working_dir, launch.as_deref(), resizer)?);

    Ok(Created { app_name: name, files })
}
