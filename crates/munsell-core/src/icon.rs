//! Two-tone icon template recoloring.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::activity::ColorPair;

/// Placeholder replaced by the first color (stroke).
pub const STROKE_PLACEHOLDER: &str = "#000000";
/// Placeholder replaced by the second color (fill).
pub const FILL_PLACEHOLDER: &str = "#FFFFFF";

/// Icon template errors.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Icon template {path} could not be read: {source}")]
    MissingResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A vector icon drawn with exactly two placeholder colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTemplate {
    source: String,
}

impl IconTemplate {
    /// Read a template from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| IconError::MissingResource {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded icon template {} ({} bytes)", path.display(), source.len());
        Ok(Self { source })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute both placeholders with the pair's colors.
    ///
    /// Runs in a single pass: text produced by one substitution is never
    /// matched again, so a first color of `#FFFFFF` stays intact.
    pub fn render(&self, colors: &ColorPair) -> String {
        let [stroke, fill] = colors.colors();
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(pos) = rest.find('#') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with(STROKE_PLACEHOLDER) {
                out.push_str(stroke.as_str());
                rest = &tail[STROKE_PLACEHOLDER.len()..];
            } else if tail.starts_with(FILL_PLACEHOLDER) {
                out.push_str(fill.as_str());
                rest = &tail[FILL_PLACEHOLDER.len()..];
            } else {
                out.push('#');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> ColorPair {
        ColorPair::new(a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_render_replaces_both_placeholders() {
        let template = IconTemplate::from_source(
            r##"<path stroke="#000000" fill="#FFFFFF"/><circle stroke="#000000" fill="#FFFFFF"/>"##,
        );
        let svg = template.render(&pair("#A0FFA0", "#FF8080"));
        assert_eq!(
            svg,
            r##"<path stroke="#A0FFA0" fill="#FF8080"/><circle stroke="#A0FFA0" fill="#FF8080"/>"##
        );
    }

    #[test]
    fn test_render_leaves_other_content_alone() {
        let source = r##"<svg id="#x"><g fill="#123456">&#160;</g><path fill="#ffffff"/></svg>"##;
        let template = IconTemplate::from_source(source);
        assert_eq!(template.render(&pair("#010203", "#040506")), source);
    }

    #[test]
    fn test_render_does_not_cascade() {
        let template = IconTemplate::from_source(r##"a="#000000" b="#FFFFFF""##);
        let svg = template.render(&pair("#FFFFFF", "#000000"));
        assert_eq!(svg, r##"a="#FFFFFF" b="#000000""##);
    }

    #[test]
    fn test_load_missing_file() {
        let err = IconTemplate::load("/definitely/not/here/xo-icon.svg").unwrap_err();
        assert!(matches!(err, IconError::MissingResource { .. }));
        assert!(err.to_string().contains("xo-icon.svg"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        std::fs::write(&path, "<svg fill=\"#FFFFFF\"/>").unwrap();

        let template = IconTemplate::load(&path).unwrap();
        assert_eq!(template.source(), "<svg fill=\"#FFFFFF\"/>");
    }
}
