//! Runtime configuration for the summarizer client.
//!
//! Every setting can come from a command-line flag or the matching
//! environment variable; flags win.

use clap::Parser;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Parser)]
#[command(name = "document-summarizer", version, about = "Upload a document and read its summary")]
pub struct Config {
    /// Base URL of the summarization backend.
    #[arg(long, env = "SUMMARIZER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[arg(long, env = "SUMMARIZER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resolve an endpoint below the base URL, keeping any path prefix
    /// (`http://host/api` + `upload` gives `http://host/api/upload`).
    pub fn endpoint(&self, name: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(name)
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::new(base_url)
    }
}
