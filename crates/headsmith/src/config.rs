use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document holding all SEO records
    /// (default: "data/seo.json")
    pub seo_data_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SEO_DATA_PATH` - Path to the SEO document (default: "data/seo.json")
    pub fn from_env() -> Self {
        Self {
            seo_data_path: env::var("SEO_DATA_PATH")
                .unwrap_or_else(|_| "data/seo.json".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so parallel execution never races on the variable.
    #[test]
    fn test_default_and_override() {
        env::remove_var("SEO_DATA_PATH");
        assert_eq!(Config::from_env().seo_data_path, "data/seo.json");

        env::set_var("SEO_DATA_PATH", "/tmp/custom-seo.json");
        assert_eq!(Config::from_env().seo_data_path, "/tmp/custom-seo.json");

        env::remove_var("SEO_DATA_PATH");
    }
}
