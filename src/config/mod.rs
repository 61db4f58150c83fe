pub mod site;

pub use site::SiteConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::Path;

/// Config file picked up automatically when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "portfolio.toml";

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "snig-portfolio")]
#[command(about = "Static site generator for a personal cloud-engineering portfolio")]
pub struct CliArgs {
    /// Path to the TOML site configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output directory from the config
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the base path pages and assets are served under
    #[arg(long)]
    pub base_path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Override the monitoring setting from the config
    #[arg(long)]
    pub monitor: Option<bool>,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// Resolves the configuration for this invocation: the `--config` file
    /// when given, else `portfolio.toml` when present, else built-in
    /// defaults. Flag overrides are applied on top of the file values.
    pub fn load_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                SiteConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => SiteConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output.get_or_insert_with(Default::default).path = Some(output.clone());
            tracing::info!("🔧 Output directory overridden to: {}", output);
        }

        if let Some(base_path) = &self.base_path {
            config.site.base_path = Some(base_path.clone());
            tracing::info!("🔧 Base path overridden to: {}", base_path);
        }

        Ok(config)
    }

    /// The config file this invocation reads, if any.
    pub fn config_source(&self) -> Option<&str> {
        match &self.config {
            Some(path) => Some(path.as_str()),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Some(DEFAULT_CONFIG_PATH),
            None => None,
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            output: None,
            base_path: None,
            verbose: false,
            dry_run: false,
            monitor: None,
        }
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let config = args().load_config().unwrap();
        assert_eq!(config.site_title(), site::DEFAULT_SITE_TITLE);
    }

    #[test]
    fn test_flag_overrides_apply_on_top_of_defaults() {
        let mut cli = args();
        cli.output = Some("./public".to_string());
        cli.base_path = Some("/snig-portfolio".to_string());

        let config = cli.load_config().unwrap();
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.base_path(), "/snig-portfolio");
    }

    #[test]
    fn test_explicit_config_file_is_loaded_and_overridden() {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\ntitle = \"From File\"\nbase_path = \"/from-file\"\n")
            .unwrap();

        let mut cli = args();
        cli.config = Some(temp_file.path().to_str().unwrap().to_string());
        cli.base_path = Some("/from-flag".to_string());

        let config = cli.load_config().unwrap();
        assert_eq!(config.site_title(), "From File");
        assert_eq!(config.base_path(), "/from-flag");
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let mut cli = args();
        cli.config = Some("/definitely/not/here.toml".to_string());

        assert!(cli.load_config().is_err());
    }
}
