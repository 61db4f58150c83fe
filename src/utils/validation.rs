use crate::utils::error::{Result, SiteError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A base path is either empty (site served from the domain root) or an
/// absolute URL prefix such as `/snig-portfolio` without a trailing slash.
pub fn validate_base_path(field_name: &str, base_path: &str) -> Result<()> {
    if base_path.is_empty() {
        return Ok(());
    }

    if !base_path.starts_with('/') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: base_path.to_string(),
            reason: "Base path must start with '/'".to_string(),
        });
    }

    if base_path.ends_with('/') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: base_path.to_string(),
            reason: "Base path must not end with '/'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_zip_filename(field_name: &str, filename: &str) -> Result<()> {
    validate_non_empty_string(field_name, filename)?;

    if !filename.ends_with(".zip") {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "Archive filename must end with .zip".to_string(),
        });
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "Archive filename must not contain path separators".to_string(),
        });
    }

    Ok(())
}
