//! Static site generation on top of the converter.
//!
//! Everything here touches the filesystem; the conversion core does not.

mod assets;
mod page;

use crate::Result;
use std::path::PathBuf;

pub use self::assets::copy_files_recursive;
pub use self::page::{
    extract_title, generate_page, generate_pages_recursive, render_page, CONTENT_PLACEHOLDER,
    TITLE_PLACEHOLDER,
};

/// Locations and settings for a site build.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Directory of Markdown pages.
    pub content_dir: PathBuf,
    /// HTML template with title/content placeholders.
    pub template_path: PathBuf,
    /// Destination directory; wiped before each build.
    pub output_dir: PathBuf,
    /// Prefix substituted for root-relative `href`/`src` links.
    pub basepath: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            content_dir: PathBuf::from("./content"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./public"),
            basepath: "/".to_string(),
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub assets_copied: usize,
    pub pages_generated: usize,
}

/// Rebuilds the whole site described by `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    if config.output_dir.exists() {
        tracing::info!(path = %config.output_dir.display(), "Deleting output directory");
        std::fs::remove_dir_all(&config.output_dir)?;
    }

    let assets_copied = if config.static_dir.is_dir() {
        tracing::info!(
            from = %config.static_dir.display(),
            to = %config.output_dir.display(),
            "Copying static files"
        );
        copy_files_recursive(&config.static_dir, &config.output_dir)?
    } else {
        tracing::warn!(path = %config.static_dir.display(), "Static directory not found, skipping");
        std::fs::create_dir_all(&config.output_dir)?;
        0
    };

    let template = std::fs::read_to_string(&config.template_path)?;
    let pages_generated = generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.output_dir,
        &config.basepath,
    )?;

    let report = BuildReport {
        assets_copied,
        pages_generated,
    };
    tracing::info!(
        assets = report.assets_copied,
        pages = report.pages_generated,
        "Site build completed"
    );
    Ok(report)
}
