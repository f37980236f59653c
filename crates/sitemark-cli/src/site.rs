//! Page generation and static file copying around the rendering core.

use anyhow::{Context, Result};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Root-relative attribute prefixes rewritten to the base path.
const ROOT_RELATIVE_ATTRS: [&str; 2] = ["href=\"/", "src=\"/"];

/// Renders one markdown file into `dest` using `template`.
///
/// Nothing is written if the markdown fails to render or has no title.
pub fn generate_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<()> {
    log::info!("Generating {} -> {}", from.display(), dest.display());

    let markdown =
        fs::read_to_string(from).with_context(|| format!("Failed to read {}", from.display()))?;
    let content = sitemark_engine::markdown_to_html(&markdown)
        .with_context(|| format!("Failed to render {}", from.display()))?;
    let title = sitemark_engine::extract_title(&markdown)
        .with_context(|| format!("Failed to render {}", from.display()))?;

    let page = rewrite_base_path(&apply_template(template, &title, &content), base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("Failed to write {}", dest.display()))
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `output_dir` with `.html` extensions.
///
/// Files whose content-relative path matches an `exclude` pattern are
/// skipped. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
    base_path: &str,
    exclude: &[glob::Pattern],
) -> Result<usize> {
    let mut count = 0;

    for relative in scan_markdown_files(content_dir)? {
        if exclude.iter().any(|p| p.matches(relative.as_str())) {
            log::warn!("Skipping excluded {relative}");
            continue;
        }

        let from = relative.to_path(content_dir);
        let dest = output_path_for(&relative, output_dir);
        generate_page(&from, template, &dest, base_path)?;
        count += 1;
    }

    Ok(count)
}

/// Empties `output_dir` and fills it with the `static_dir` tree, if any.
pub fn prepare_output(output_dir: &Path, static_dir: Option<&Path>) -> Result<()> {
    if output_dir.exists() {
        log::debug!("Clearing {}", output_dir.display());
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to clear {}", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    match static_dir {
        Some(src) => copy_static(src, output_dir),
        None => Ok(()),
    }
}

/// Copies the `src` tree into `dest`.
///
/// A missing `src` is not an error; there is simply nothing to copy.
pub fn copy_static(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        log::warn!("Static directory {} not found, skipping", src.display());
        return Ok(());
    }
    copy_dir_recursive(src, dest)
}

pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Points root-relative `href`/`src` attributes at `base_path`.
///
/// Protocol-relative values (`//host/..`) are left alone.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    ROOT_RELATIVE_ATTRS
        .iter()
        .fold(html.to_string(), |html, attr| rewrite_attr(&html, attr, base))
}

fn rewrite_attr(html: &str, attr: &str, base: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(attr) {
        out.push_str(&rest[..pos]);
        // `attr` ends in the value's leading '/'
        out.push_str(&attr[..attr.len() - 1]);
        rest = &rest[pos + attr.len()..];
        if !rest.starts_with('/') {
            out.push_str(base);
        }
        out.push('/');
    }
    out.push_str(rest);
    out
}

/// Content-relative paths of every `.md` file under `root`, sorted.
fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Content directory {} not found", root.display());
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| -> Result<RelativePathBuf> {
            let stripped = path.strip_prefix(root)?;
            Ok(RelativePathBuf::from_path(stripped)?)
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("Failed to create {}", dest.display()))?;

    for entry in fs::read_dir(src).with_context(|| format!("Failed to read {}", src.display()))? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            copy_dir_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)
                .with_context(|| format!("Failed to copy {}", path.display()))?;
        }
    }

    Ok(())
}

/// Output location of a content file: same relative path, `.html` extension.
fn output_path_for(relative: &RelativePath, output_dir: &Path) -> PathBuf {
    relative.with_extension("html").to_path(output_dir)
}
