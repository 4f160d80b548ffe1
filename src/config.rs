use serde::Deserialize;

use crate::services::{keywords::KeywordMode, recommendations::DEFAULT_K};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Optional stopword file replacing the built-in English list
    #[serde(default)]
    pub stopwords_path: Option<String>,

    /// Which keyword set feeds the bag of words
    #[serde(default)]
    pub keyword_mode: KeywordMode,

    /// Result count used when a query does not pass `k`
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Largest `k` a query may ask for
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "dataset/movies.csv".to_string()
}

fn default_k() -> usize {
    DEFAULT_K
}

fn default_max_k() -> usize {
    100
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            stopwords_path: None,
            keyword_mode: KeywordMode::default(),
            default_k: default_k(),
            max_k: default_max_k(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.default_k > config.max_k {
            anyhow::bail!(
                "DEFAULT_K ({}) must not exceed MAX_K ({})",
                config.default_k,
                config.max_k
            );
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
