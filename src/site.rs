//! File-system side of a build: copying static assets and writing pages.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::page::render_page;

/// Copy static assets into the public directory and generate the configured page.
pub fn build(config: &Config) -> Result<()> {
    copy_static(&config.site.static_dir, &config.site.public_dir)?;
    generate_page(
        &config.page.content,
        &config.page.template,
        &config.page.output,
    )
}

/// Replace `dst` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        info!("Clearing {}", dst.display());
        fs::remove_dir_all(dst).map_err(|e| Error::io(dst, e))?;
    }
    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| Error::io(dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| Error::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            info!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(|e| Error::io(&from, e))?;
        }
    }
    Ok(())
}

/// Render `content` through `template` and write the page to `output`.
pub fn generate_page(content: &Path, template: &Path, output: &Path) -> Result<()> {
    info!(
        "Generating page from {} to {} using {}",
        content.display(),
        output.display(),
        template.display()
    );

    let markdown = fs::read_to_string(content).map_err(|e| Error::io(content, e))?;
    let template_html = fs::read_to_string(template).map_err(|e| Error::io(template, e))?;
    let page = render_page(&template_html, &markdown)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(output, page).map_err(|e| Error::io(output, e))
}
