use crate::manifest::MANIFEST_FILE;
use crate::sw::CACHE_VERSION;

/// Resources every generated app precaches.
pub const PRECACHE: &[&str] = &["./", MANIFEST_FILE];

pub fn appcache_filename(name: &str) -> String {
    format!("{}.appcache", name)
}

/// Legacy HTML5 cache manifest.
pub fn appcache(name: &str) -> String {
    let mut out = String::from("CACHE MANIFEST\n");
    out.push_str(&format!("# {} v{}\n\n", name, CACHE_VERSION));
    out.push_str("CACHE:\n");
    for entry in PRECACHE {
        out.push_str(entry);
        out.push('\n');
    }
    out.push_str("\nNETWORK:\n*\n");
    out
}
