use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions picked up when a directory is scanned
const CONTENT_EXTENSIONS: &[&str] = &["html", "htm", "txt", "md", "markdown"];

/// One piece of content to analyze
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name (file path or `<stdin>`)
    pub source: String,
    pub content: String,
}

/// Reads every input named on the command line. Directories are walked for
/// content files; an empty path list means stdin.
pub fn collect_documents(paths: &[PathBuf], skip_hidden: bool) -> Result<Vec<Document>> {
    if paths.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read content from stdin")?;
        return Ok(vec![Document {
            source: "<stdin>".to_string(),
            content,
        }]);
    }

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in scan_directory(path, skip_hidden) {
                documents.push(read_document(&file)?);
            }
        } else {
            documents.push(read_document(path)?);
        }
    }

    Ok(documents)
}

fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Document {
        source: path.display().to_string(),
        content,
    })
}

fn scan_directory(directory: &Path, skip_hidden: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never filter the root itself, even if it is "." or hidden
            if skip_hidden && e.depth() > 0 {
                !e.file_name()
                    .to_str()
                    .map(|s| s.starts_with('.'))
                    .unwrap_or(false)
            } else {
                true
            }
        })
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_content_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                log::warn!("Failed to access entry: {}", e);
            }
        }
    }

    log::debug!("Found {} content files in {}", files.len(), directory.display());
    files
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CONTENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("post.html")));
        assert!(is_content_file(Path::new("notes.MD")));
        assert!(is_content_file(Path::new("a/b/readme.txt")));

        assert!(!is_content_file(Path::new("image.png")));
        assert!(!is_content_file(Path::new("Makefile")));
    }

    #[test]
    fn test_collect_documents_from_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("posts"))?;
        fs::create_dir(root.join(".drafts"))?;
        fs::write(root.join("posts/a.html"), "<p>first</p>")?;
        fs::write(root.join("b.txt"), "second")?;
        fs::write(root.join("photo.jpg"), "not text")?;
        fs::write(root.join(".drafts/c.md"), "hidden")?;

        let all = collect_documents(&[root.to_path_buf()], false)?;
        assert_eq!(all.len(), 3);

        let visible = collect_documents(&[root.to_path_buf()], true)?;
        let contents: Vec<&str> = visible.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(visible.len(), 2);
        assert!(contents.contains(&"<p>first</p>"));
        assert!(contents.contains(&"second"));
        Ok(())
    }

    #[test]
    fn test_collect_documents_explicit_file_any_extension() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("post.content");
        fs::write(&path, "explicit file")?;

        let documents = collect_documents(&[path.clone()], false)?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source, path.display().to_string());
        Ok(())
    }

    #[test]
    fn test_collect_documents_missing_file_errors() {
        let result = collect_documents(&[PathBuf::from("/definitely/not/here.html")], false);
        assert!(result.is_err());
    }
}
