// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_ASSET_TYPE, DEFAULT_DELIVERY_HOST, DEFAULT_DELIVERY_TYPE};
use crate::error::LoaderError;

fn default_secure() -> bool {
    true
}

fn default_asset_type() -> String {
    DEFAULT_ASSET_TYPE.to_string()
}

fn default_delivery_type() -> String {
    DEFAULT_DELIVERY_TYPE.to_string()
}

/// Cloud account and delivery settings used to render asset URLs.
///
/// ```yaml
/// cloud_name: "${CLOUDINARY_CLOUD_NAME}"
/// secure: true
/// private_cdn: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Account cloud name (required)
    pub cloud_name: String,

    /// Use https (default: true)
    #[serde(default = "default_secure")]
    pub secure: bool,

    /// Serve from `<cloud_name>-res.cloudinary.com` (default: false)
    #[serde(default)]
    pub private_cdn: bool,

    /// Custom delivery hostname; replaces the shared host and cloud path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_distribution: Option<String>,

    /// Asset type path segment (default: "image")
    #[serde(default = "default_asset_type")]
    pub asset_type: String,

    /// Delivery type path segment (default: "upload")
    #[serde(default = "default_delivery_type")]
    pub delivery_type: String,
}

impl CloudConfig {
    /// Config with defaults for everything but the cloud name
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            secure: default_secure(),
            private_cdn: false,
            secure_distribution: None,
            asset_type: default_asset_type(),
            delivery_type: default_delivery_type(),
        }
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, LoaderError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| LoaderError::config(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });

        if let Some(var_name) = missing {
            return Err(LoaderError::config(format!(
                "Environment variable '{}' is referenced but not set",
                var_name
            )));
        }

        let config: CloudConfig = serde_yaml::from_str(&substituted)
            .map_err(|e| LoaderError::config(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), LoaderError> {
        if self.cloud_name.trim().is_empty() {
            return Err(LoaderError::config("cloud_name cannot be empty"));
        }

        if !is_path_token(&self.cloud_name) {
            return Err(LoaderError::config(format!(
                "cloud_name '{}' may only contain letters, digits, '-' and '_'",
                self.cloud_name
            )));
        }

        for (field, value) in [
            ("asset_type", &self.asset_type),
            ("delivery_type", &self.delivery_type),
        ] {
            if !is_path_token(value) {
                return Err(LoaderError::config(format!(
                    "{} '{}' is not a valid path segment",
                    field, value
                )));
            }
        }

        if let Some(host) = &self.secure_distribution {
            if host.is_empty() || host.contains('/') {
                return Err(LoaderError::config(format!(
                    "secure_distribution '{}' must be a bare hostname",
                    host
                )));
            }
        }

        Ok(())
    }

    /// Scheme, host and path prefix up to (not including) the transformations
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };

        let root = match (&self.secure_distribution, self.private_cdn) {
            (Some(host), _) => host.clone(),
            (None, true) => format!("{}-{}", self.cloud_name, DEFAULT_DELIVERY_HOST),
            (None, false) => format!("{}/{}", DEFAULT_DELIVERY_HOST, self.cloud_name),
        };

        format!(
            "{}://{}/{}/{}",
            scheme, root, self.asset_type, self.delivery_type
        )
    }
}

fn is_path_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
