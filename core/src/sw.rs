use crate::appcache::PRECACHE;

pub const SERVICE_WORKER_FILE: &str = "service-worker.js";

/// Bumped whenever the precache list changes so old caches get dropped.
pub const CACHE_VERSION: u32 = 1;

const TEMPLATE: &str = r#"const CACHE_PREFIX = '{{name}}-';
const CACHE_NAME = '{{cache}}';
const PRECACHE = {{precache}};

self.addEventListener('install', event => {
	event.waitUntil(
		caches
			.open(CACHE_NAME)
			.then(cache => cache.addAll(PRECACHE))
			.then(() => self.skipWaiting())
	);
});

self.addEventListener('activate', event => {
	event.waitUntil(
		caches
			.keys()
			.then(keys =>
				Promise.all(
					keys
						.filter(key => key.startsWith(CACHE_PREFIX) && key !== CACHE_NAME)
						.map(key => caches.delete(key))
				)
			)
			.then(() => self.clients.claim())
	);
});

self.addEventListener('fetch', event => {
	if (event.request.method !== 'GET') {
		return;
	}

	event.respondWith(
		caches.match(event.request).then(cached => cached || fetch(event.request))
	);
});
"#;

pub fn cache_name(name: &str, version: u32) -> String {
    format!("{}-v{}", name, version)
}

pub fn service_worker(name: &str) -> String {
    service_worker_versioned(name, CACHE_VERSION)
}

/// Service worker stub using `<name>-v<version>` as its cache key.
pub fn service_worker_versioned(name: &str, version: u32) -> String {
    let precache = format!(
        "[{}]",
        PRECACHE.iter().map(|p| format!("'{}'", p)).collect::<Vec<_>>().join(", ")
    );
    TEMPLATE
        .replace("{{name}}", name)
        .replace("{{cache}}", &cache_name(name, version))
        .replace("{{precache}}", &precache)
}
