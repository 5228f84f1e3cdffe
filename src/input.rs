// Document reading for the batch scorer. Plain-text formats are read as
// UTF-8; PDFs go through the extractor.
use anyhow::{anyhow, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File extensions the batch scorer picks up. Keeps binary files (images,
/// compiled artifacts) out of the walk.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "pdf"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

pub fn read_document(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    match ext {
        "txt" | "md" | "csv" | "json" => {
            let mut file = File::open(path)?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        "pdf" => {
            pdf_extract::extract_text(path).map_err(|e| anyhow!("PDF extraction failed: {}", e))
        }
        _ => Err(anyhow!("Unsupported file format: {}", ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_txt() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("note.txt");
        let mut f = File::create(&path)?;
        writeln!(f, "سعيد جدا اليوم")?;

        let content = read_document(&path)?;
        assert_eq!(content, "سعيد جدا اليوم\n");
        Ok(())
    }

    #[test]
    fn test_read_document_unsupported() {
        let err = read_document(Path::new("photo.jpg")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_read_document_missing_file() {
        assert!(read_document(Path::new("/nonexistent/note.txt")).is_err());
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a.txt")));
        assert!(is_supported(Path::new("b.md")));
        assert!(is_supported(Path::new("c.pdf")));
        assert!(!is_supported(Path::new("d.jpg")));
        assert!(!is_supported(Path::new("no_extension")));
    }
}
