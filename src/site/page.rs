//! Page generation - fills an HTML template with a converted document.

use super::assets::sorted_entries;
use crate::adapters::markdown::markdown_to_blocks;
use crate::{BlockKind, Error, MarkdownToHtml, Result};
use std::fs;
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Returns the text of the first level-1 heading block.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown_to_blocks(markdown)?
        .into_iter()
        .find(|block| block.kind == BlockKind::Heading(1))
        .map(|block| block.text)
        .ok_or(Error::MissingTitle)
}

/// Renders `markdown` into `template`.
///
/// Root-relative `href="/` and `src="/` references are rebased onto
/// `basepath`.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = MarkdownToHtml::with_defaults().convert_to_string(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);
    if basepath == "/" {
        return Ok(page);
    }
    Ok(page
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}")))
}

/// Converts the Markdown file `from` into the HTML file `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, basepath: &str) -> Result<()> {
    tracing::info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template_path.display(),
        "Generating page"
    );
    let template = fs::read_to_string(template_path)?;
    write_page(from, &template, dest, basepath)
}

/// Generates one `.html` page per `.md` file under `content_dir`, mirroring
/// the directory layout into `dest_dir`. Other files are ignored.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    basepath: &str,
) -> Result<usize> {
    let mut generated = 0;
    for entry in sorted_entries(content_dir)? {
        let from = entry.path();
        if from.is_dir() {
            generated +=
                generate_pages_recursive(&from, template, &dest_dir.join(entry.file_name()), basepath)?;
        } else if from.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            tracing::info!(from = %from.display(), to = %dest.display(), "Generating page");
            write_page(&from, template, &dest, basepath)?;
            generated += 1;
        }
    }
    Ok(generated)
}

fn write_page(from: &Path, template: &str, dest: &Path, basepath: &str) -> Result<()> {
    let markdown = fs::read_to_string(from)?;
    let page = render_page(&markdown, template, basepath)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}
