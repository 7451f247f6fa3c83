//! MIME type lookups for file extensions and codec names.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref EXTENSION_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("bin", "application/octet-stream");
        m.insert("bmp", "image/bmp");
        m.insert("css", "text/css");
        m.insert("csv", "text/csv");
        m.insert("gif", "image/gif");
        m.insert("gz", "application/gzip");
        m.insert("htm", "text/html");
        m.insert("html", "text/html");
        m.insert("ico", "image/vnd.microsoft.icon");
        m.insert("jpeg", "image/jpeg");
        m.insert("jpg", "image/jpeg");
        m.insert("js", "text/javascript");
        m.insert("json", "application/json");
        m.insert("md", "text/markdown");
        m.insert("mp3", "audio/mpeg");
        m.insert("mp4", "video/mp4");
        m.insert("msgpack", "application/msgpack");
        m.insert("pdf", "application/pdf");
        m.insert("png", "image/png");
        m.insert("svg", "image/svg+xml");
        m.insert("tar", "application/x-tar");
        m.insert("txt", "text/plain");
        m.insert("wav", "audio/wav");
        m.insert("webp", "image/webp");
        m.insert("xml", "application/xml");
        m.insert("yaml", "application/yaml");
        m.insert("yml", "application/yaml");
        m.insert("zip", "application/zip");
        m
    };
    static ref CODEC_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("xml", "application/xml");
        m.insert("json", "application/json");
        m.insert("msgpack", "application/msgpack");
        m.insert("raw", "application/octet-stream");
        m
    };
}

/// Looks up the MIME type for a file extension.
///
/// The extension is matched case-insensitively and may carry a leading dot.
///
/// # Examples
///
/// ```rust
/// assert_eq!(wireval::mime::for_extension(".JSON"), Some("application/json"));
/// assert_eq!(wireval::mime::for_extension("nope"), None);
/// ```
#[must_use]
pub fn for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    EXTENSION_TYPES.get(ext.as_str()).copied()
}

/// Looks up the MIME type a codec emits, by codec name.
#[must_use]
pub fn for_codec(name: &str) -> Option<&'static str> {
    CODEC_TYPES.get(name).copied()
}
