//! API host normalization.

/// Turns whatever host the caller configured into the API base URL.
///
/// One trailing `/` is dropped, the `https://`, `http://` and `api.` prefixes
/// are removed, and the result is prefixed with `https://api.`.
///
/// # Examples
///
/// ```
/// use exh_conf::normalize_host;
///
/// assert_eq!(normalize_host("https://dev.example.io/"), "https://api.dev.example.io");
/// assert_eq!(normalize_host("api.dev.example.io"), "https://api.dev.example.io");
/// assert_eq!(normalize_host("http://dev.example.io"), "https://api.dev.example.io");
/// ```
pub fn normalize_host(raw: &str) -> String {
	let host = raw.strip_suffix('/').unwrap_or(raw);
	let host = host.replacen("https://", "", 1);
	let host = host.replacen("http://", "", 1);
	let host = host.replacen("api.", "", 1);
	format!("https://api.{}", host)
}
