use crate::core::ConfigProvider;
use crate::domain::model::MissingContentPolicy;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    self, validate_base_path, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SITE_TITLE: &str = "Snigdha | Cloud Engineer";
pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_ARCHIVE_FILENAME: &str = "site.zip";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMetadata,
    pub output: Option<OutputConfig>,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub author: Option<String>,
    /// URL prefix the site is served under, e.g. `/snig-portfolio` on
    /// GitHub Pages. Empty means the domain root.
    pub base_path: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_missing_content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata {
                title: DEFAULT_SITE_TITLE.to_string(),
                author: None,
                base_path: None,
                base_url: None,
            },
            output: None,
            error_handling: None,
            monitoring: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values. Unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.title", &self.site.title)?;

        if let Some(base_path) = &self.site.base_path {
            validate_base_path("site.base_path", base_path)?;
        }

        if let Some(base_url) = &self.site.base_url {
            validate_url("site.base_url", base_url)?;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validate_path("output.path", path)?;
            }

            if let Some(archive) = &output.archive {
                if let Some(filename) = &archive.filename {
                    validation::validate_zip_filename("output.archive.filename", filename)?;
                }
            }
        }

        if let Some(error_handling) = &self.error_handling {
            if let Some(policy) = &error_handling.on_missing_content {
                if MissingContentPolicy::parse(policy).is_none() {
                    return Err(SiteError::InvalidConfigValueError {
                        field: "error_handling.on_missing_content".to_string(),
                        value: policy.clone(),
                        reason: "Supported policies: placeholder, skip".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn site_title(&self) -> &str {
        &self.site.title
    }

    pub fn author(&self) -> Option<&str> {
        self.site.author.as_deref()
    }

    pub fn base_path(&self) -> &str {
        self.site.base_path.as_deref().unwrap_or("")
    }

    pub fn base_url(&self) -> Option<&str> {
        self.site.base_url.as_deref()
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn missing_content_policy(&self) -> MissingContentPolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_missing_content.as_deref())
            .and_then(MissingContentPolicy::parse)
            .unwrap_or_default()
    }

    /// Archive filename when archiving is enabled, `None` otherwise.
    pub fn archive_filename(&self) -> Option<&str> {
        let archive = self.output.as_ref()?.archive.as_ref()?;
        if !archive.enabled {
            return None;
        }
        Some(archive.filename.as_deref().unwrap_or(DEFAULT_ARCHIVE_FILENAME))
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for SiteConfig {
    fn site_title(&self) -> &str {
        self.site_title()
    }

    fn base_path(&self) -> &str {
        self.base_path()
    }

    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn missing_content_policy(&self) -> MissingContentPolicy {
        self.missing_content_policy()
    }

    fn archive_filename(&self) -> Option<&str> {
        self.archive_filename()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[site]
title = "Snigdha | Cloud Engineer"
author = "Snigdha"
base_path = "/snig-portfolio"
base_url = "https://example.github.io/snig-portfolio"

[output]
path = "./dist"

[output.archive]
enabled = true
filename = "portfolio.zip"

[error_handling]
on_missing_content = "skip"

[monitoring]
enabled = true
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site_title(), "Snigdha | Cloud Engineer");
        assert_eq!(config.author(), Some("Snigdha"));
        assert_eq!(config.base_path(), "/snig-portfolio");
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.archive_filename(), Some("portfolio.zip"));
        assert_eq!(
            config.missing_content_policy(),
            MissingContentPolicy::Skip
        );
        assert!(config.monitoring_enabled());
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("[site]\ntitle = \"My Site\"\n").unwrap();

        assert_eq!(config.site_title(), "My Site");
        assert_eq!(config.base_path(), "");
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.archive_filename(), None);
        assert_eq!(
            config.missing_content_policy(),
            MissingContentPolicy::Placeholder
        );
        assert!(!config.monitoring_enabled());
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_archive_enabled_without_filename_uses_default() {
        let toml_content = r#"
[site]
title = "My Site"

[output.archive]
enabled = true
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.archive_filename(), Some(DEFAULT_ARCHIVE_FILENAME));
    }

    #[test]
    fn test_archive_disabled_yields_no_filename() {
        let toml_content = r#"
[site]
title = "My Site"

[output.archive]
enabled = false
filename = "ignored.zip"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.archive_filename(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_PORTFOLIO_BASE", "/from-env");

        let toml_content = r#"
[site]
title = "My Site"
base_path = "${TEST_PORTFOLIO_BASE}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path(), "/from-env");

        std::env::remove_var("TEST_PORTFOLIO_BASE");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[site]
title = "My Site"
base_path = "${DEFINITELY_NOT_SET_ANYWHERE}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path(), "${DEFINITELY_NOT_SET_ANYWHERE}");
        // And validation rejects it, pointing at the field.
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_base_path = SiteConfig::from_toml_str(
            "[site]\ntitle = \"T\"\nbase_path = \"no-leading-slash\"\n",
        )
        .unwrap();
        assert!(bad_base_path.validate().is_err());

        let bad_url =
            SiteConfig::from_toml_str("[site]\ntitle = \"T\"\nbase_url = \"not a url\"\n")
                .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_policy = SiteConfig::from_toml_str(
            "[site]\ntitle = \"T\"\n[error_handling]\non_missing_content = \"explode\"\n",
        )
        .unwrap();
        assert!(matches!(
            bad_policy.validate().unwrap_err(),
            SiteError::InvalidConfigValueError { field, .. }
                if field == "error_handling.on_missing_content"
        ));

        let empty_title = SiteConfig::from_toml_str("[site]\ntitle = \"  \"\n").unwrap();
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
title = "File Test"

[output]
path = "./file-test-output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site_title(), "File Test");
        assert_eq!(config.output_path(), "./file-test-output");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SiteConfig::from_file("/definitely/not/here/portfolio.toml");
        assert!(matches!(result.unwrap_err(), SiteError::IoError(_)));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate_config().is_ok());
        assert_eq!(config.site_title(), DEFAULT_SITE_TITLE);
    }
}
