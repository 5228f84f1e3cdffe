// Keyword lexicon: ordered positive/negative word lists used by the scorer.
// The built-in lists target Arabic/derja chat messages and are fixed; custom
// lists can be supplied in code or loaded from a small JSON file.
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in positive trigger words, in scoring order.
pub const POSITIVE_WORDS: &[&str] = &["سعيد", "فرح", "ممتاز", "جيد"];

/// Built-in negative trigger words, in scoring order.
pub const NEGATIVE_WORDS: &[&str] = &["حزن", "حزين", "وحدة", "سيء"];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::default);

/// Shared read-only instance of the built-in Arabic lexicon.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Ordered positive/negative word lists.
///
/// The list sizes are part of the scoring contract: a positive verdict is
/// normalized by the positive list length, a negative one by the negative
/// list length, regardless of how many words actually matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from custom word lists, preserving their order.
    pub fn from_words(positive: &[&str], negative: &[&str]) -> Self {
        Lexicon {
            positive: positive.iter().map(|w| w.to_string()).collect(),
            negative: negative.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a lexicon from a JSON file of the shape
    /// `{"positive": [...], "negative": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read lexicon file {}: {}", path.display(), e))?;
        let lexicon: Lexicon = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("invalid lexicon file {}: {}", path.display(), e))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    fn validate(&self) -> Result<()> {
        if self.positive.is_empty() {
            return Err(anyhow!("lexicon has no positive words"));
        }
        if self.negative.is_empty() {
            return Err(anyhow!("lexicon has no negative words"));
        }
        // An empty-string entry would match every text via containment.
        if self.positive.iter().chain(&self.negative).any(|w| w.is_empty()) {
            return Err(anyhow!("lexicon contains an empty word"));
        }
        Ok(())
    }
}

impl Default for Lexicon {
    /// The built-in Arabic word lists.
    fn default() -> Self {
        Lexicon::from_words(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_lists_fixed() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.positive(), &["سعيد", "فرح", "ممتاز", "جيد"]);
        assert_eq!(lexicon.negative(), &["حزن", "حزين", "وحدة", "سيء"]);
    }

    #[test]
    fn test_default_lexicon_is_shared() {
        let a = default_lexicon();
        let b = default_lexicon();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.positive().len(), 4);
        assert_eq!(a.negative().len(), 4);
    }

    #[test]
    fn test_from_words_preserves_order() {
        let lexicon = Lexicon::from_words(&["bien", "heureux"], &["triste", "mal"]);
        assert_eq!(lexicon.positive(), &["bien", "heureux"]);
        assert_eq!(lexicon.negative(), &["triste", "mal"]);
    }

    #[test]
    fn test_from_json_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("lexicon.json");
        let mut f = std::fs::File::create(&path)?;
        write!(f, r#"{{"positive": ["bien"], "negative": ["mal", "triste"]}}"#)?;

        let lexicon = Lexicon::from_json_file(&path)?;
        assert_eq!(lexicon.positive(), &["bien"]);
        assert_eq!(lexicon.negative(), &["mal", "triste"]);
        Ok(())
    }

    #[test]
    fn test_from_json_file_rejects_empty_side() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{"positive": [], "negative": ["mal"]}"#)?;

        let err = Lexicon::from_json_file(&path).unwrap_err();
        assert!(err.to_string().contains("no positive words"));
        Ok(())
    }

    #[test]
    fn test_from_json_file_rejects_empty_word() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{"positive": ["bien", ""], "negative": ["mal"]}"#)?;

        assert!(Lexicon::from_json_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_from_json_file_rejects_garbage() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, "not json at all")?;

        let err = Lexicon::from_json_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid lexicon file"));
        Ok(())
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = Lexicon::from_json_file(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lexicon.json"));
    }
}
