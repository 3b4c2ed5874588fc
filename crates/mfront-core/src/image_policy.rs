//! Allow-list for remotely hosted images
//!
//! Images referenced by absolute URL are only rendered when they match one
//! of the configured remote patterns. Site-relative paths (`/foo.svg`) are
//! always allowed.
//!
//! Pattern globs:
//! - hostname: `*.example.com` matches one subdomain label,
//!   `**.example.com` matches any depth
//! - pathname: `*` matches within a segment, `**` matches across segments

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// One allowed remote image location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub hostname: String,
    /// Empty means the scheme's default port
    #[serde(default)]
    pub port: String,
    #[serde(default = "default_pathname")]
    pub pathname: String,
}

fn default_protocol() -> String {
    "https".to_string()
}

fn default_pathname() -> String {
    "/**".to_string()
}

impl RemotePattern {
    pub fn https(hostname: impl Into<String>) -> Self {
        Self {
            protocol: default_protocol(),
            hostname: hostname.into(),
            port: String::new(),
            pathname: default_pathname(),
        }
    }

    /// Pattern for the banner's stock photography host
    pub fn unsplash() -> Self {
        Self::https("images.unsplash.com")
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    protocol: String,
    hostname: Regex,
    port: Option<u16>,
    pathname: Regex,
}

impl CompiledPattern {
    fn compile(pattern: &RemotePattern) -> Result<Self> {
        let port = if pattern.port.is_empty() {
            None
        } else {
            Some(pattern.port.parse::<u16>().map_err(|_| {
                Error::image_pattern(format!("invalid port '{}'", pattern.port))
            })?)
        };

        Ok(Self {
            protocol: pattern.protocol.trim_end_matches(':').to_ascii_lowercase(),
            hostname: compile_glob(&pattern.hostname.to_ascii_lowercase(), '.')?,
            port,
            pathname: compile_glob(&pattern.pathname, '/')?,
        })
    }

    fn matches(&self, url: &Url) -> bool {
        if url.scheme() != self.protocol {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        if !self.hostname.is_match(&host.to_ascii_lowercase()) {
            return false;
        }
        // `Url::port` is None when the port is the scheme default
        if url.port() != self.port {
            return false;
        }
        self.pathname.is_match(url.path())
    }
}

/// Translate a `*`/`**` glob into an anchored regex.
///
/// `*` never crosses `separator`; `**` matches anything. A `**` followed by
/// the separator also matches zero segments, so `/**` accepts `/`.
fn compile_glob(glob: &str, separator: char) -> Result<Regex> {
    let sep = regex::escape(&separator.to_string());
    let mut out = String::from("^");
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                if chars.peek() == Some(&separator) {
                    chars.next();
                    out.push_str(&format!("(?:.*{})?", sep));
                } else {
                    out.push_str(".*");
                }
            } else {
                out.push_str(&format!("[^{}]*", sep));
            }
        } else {
            out.push_str(&regex::escape(&c.to_string()));
        }
    }
    out.push('$');

    Regex::new(&out).map_err(|e| Error::image_pattern(format!("'{}': {}", glob, e)))
}

/// Compiled set of allowed remote image patterns
#[derive(Debug, Clone, Default)]
pub struct ImageHostPolicy {
    patterns: Vec<CompiledPattern>,
}

impl ImageHostPolicy {
    pub fn new(patterns: &[RemotePattern]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(CompiledPattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Whether `src` may be rendered
    pub fn allows(&self, src: &str) -> bool {
        if src.starts_with('/') && !src.starts_with("//") {
            return true;
        }
        match Url::parse(src) {
            Ok(url) => self.patterns.iter().any(|p| p.matches(&url)),
            Err(e) => {
                tracing::debug!("Rejecting unparsable image URL {:?}: {}", src, e);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80";

    fn unsplash_policy() -> ImageHostPolicy {
        ImageHostPolicy::new(&[RemotePattern::unsplash()]).unwrap()
    }

    #[test]
    fn test_banner_image_allowed() {
        assert!(unsplash_policy().allows(BANNER_IMAGE));
    }

    #[test]
    fn test_local_paths_always_allowed() {
        let policy = ImageHostPolicy::default();
        assert!(policy.allows("/dept-logo.svg"));
        assert!(!policy.allows("//evil.example.com/x.png"));
    }

    #[test]
    fn test_other_hosts_rejected() {
        let policy = unsplash_policy();
        assert!(!policy.allows("https://example.com/photo.jpg"));
        assert!(!policy.allows("https://evil.images.unsplash.com/photo.jpg"));
        assert!(!policy.allows("not a url"));
    }

    #[test]
    fn test_protocol_and_port_must_match() {
        let policy = unsplash_policy();
        assert!(!policy.allows("http://images.unsplash.com/photo.jpg"));
        assert!(!policy.allows("https://images.unsplash.com:8443/photo.jpg"));
        assert!(policy.allows("https://images.unsplash.com:443/photo.jpg"));
    }

    #[test]
    fn test_explicit_port() {
        let mut pattern = RemotePattern::https("cdn.local");
        pattern.port = "8443".to_string();
        let policy = ImageHostPolicy::new(&[pattern]).unwrap();
        assert!(policy.allows("https://cdn.local:8443/a.png"));
        assert!(!policy.allows("https://cdn.local/a.png"));
    }

    #[test]
    fn test_hostname_wildcards() {
        let policy = ImageHostPolicy::new(&[
            RemotePattern::https("*.one.test"),
            RemotePattern::https("**.many.test"),
        ])
        .unwrap();

        assert!(policy.allows("https://a.one.test/x.png"));
        assert!(!policy.allows("https://a.b.one.test/x.png"));
        assert!(policy.allows("https://a.b.many.test/x.png"));
        assert!(policy.allows("https://a.many.test/x.png"));
    }

    #[test]
    fn test_pathname_globs() {
        let mut single = RemotePattern::https("img.test");
        single.pathname = "/photos/*".to_string();
        let policy = ImageHostPolicy::new(&[single]).unwrap();

        assert!(policy.allows("https://img.test/photos/a.jpg"));
        assert!(!policy.allows("https://img.test/photos/2024/a.jpg"));
        assert!(!policy.allows("https://img.test/other/a.jpg"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut pattern = RemotePattern::https("img.test");
        pattern.port = "http".to_string();
        assert!(matches!(
            ImageHostPolicy::new(&[pattern]),
            Err(Error::ImagePattern { .. })
        ));
    }

    #[test]
    fn test_glob_translation() {
        let re = compile_glob("/**", '/').unwrap();
        assert!(re.is_match("/"));
        assert!(re.is_match("/a/b/c"));

        let re = compile_glob("*.x.com", '.').unwrap();
        assert!(re.is_match("a.x.com"));
        assert!(!re.is_match("x.com"));
    }
}
