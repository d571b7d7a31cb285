//! Page table validation.
//!
//! Checks a page table without rendering anything. Errors describe
//! configurations the pipeline cannot produce sensible output for;
//! warnings flag entries that will render but look wrong.

use std::collections::HashSet;

use crate::types::{Background, PageConfig};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the page the finding belongs to.
    pub page: String,
    pub message: String,
}

impl Diagnostic {
    fn error(page: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            page: page.to_string(),
            message: message.into(),
        }
    }

    fn warning(page: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            page: page.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Validate a page table. Returns all findings; the caller decides
/// whether warnings are fatal.
pub fn validate_pages(pages: &[PageConfig]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut outputs = HashSet::new();

    for page in pages {
        if page.title.trim().is_empty() {
            diagnostics.push(Diagnostic::error(&page.name, "title is empty"));
        }

        if page.title_size == 0 {
            diagnostics.push(Diagnostic::error(&page.name, "title_size is zero"));
        } else if page.title_size > 150 {
            diagnostics.push(Diagnostic::warning(
                &page.name,
                format!("title_size {} will likely overflow the canvas", page.title_size),
            ));
        }

        if page.output.extension().and_then(|e| e.to_str()) != Some("png") {
            diagnostics.push(Diagnostic::error(
                &page.name,
                format!("output {} is not a .png path", page.output.display()),
            ));
        }

        if !outputs.insert(page.output.clone()) {
            diagnostics.push(Diagnostic::error(
                &page.name,
                format!("output {} collides with an earlier page", page.output.display()),
            ));
        }

        if let Some(subtitle) = &page.subtitle {
            if subtitle.trim().is_empty() {
                diagnostics.push(Diagnostic::warning(&page.name, "subtitle is empty"));
            }
        }

        if page.domain.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(&page.name, "domain label is empty"));
        }

        if let Background::Mesh { points } = &page.background {
            if !(3..=4).contains(&points.len()) {
                diagnostics.push(Diagnostic::error(
                    &page.name,
                    format!("mesh background needs 3-4 anchor points, found {}", points.len()),
                ));
            }

            // The inverse-distance weight divides by (distance + radius);
            // a non-positive radius is singular at the anchor.
            for (index, point) in points.iter().enumerate() {
                if point.radius <= 0.0 {
                    diagnostics.push(Diagnostic::error(
                        &page.name,
                        format!("gradient point {} has non-positive radius {}", index, point.radius),
                    ));
                }
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::types::{gradient_pages, pattern_pages, Colour, GradientPoint};

    #[test]
    fn test_builtin_sets_are_clean() {
        assert!(validate_pages(&pattern_pages()).is_empty());
        assert!(validate_pages(&gradient_pages()).is_empty());
    }

    #[test]
    fn test_empty_title_is_error() {
        let mut pages = pattern_pages();
        pages[0].title = "   ".to_string();

        let diagnostics = validate_pages(&pages);
        assert!(diagnostics.iter().any(|d| d.is_error() && d.message.contains("title")));
    }

    #[test]
    fn test_non_png_output_is_error() {
        let mut pages = pattern_pages();
        pages[0].output = PathBuf::from("og-home.jpg");

        let diagnostics = validate_pages(&pages);
        assert!(diagnostics.iter().any(|d| d.is_error() && d.message.contains(".png")));
    }

    #[test]
    fn test_duplicate_output_is_error() {
        let mut pages = pattern_pages();
        pages[1].output = pages[0].output.clone();

        let diagnostics = validate_pages(&pages);
        assert!(diagnostics.iter().any(|d| d.message.contains("collides")));
    }

    #[test]
    fn test_non_positive_radius_is_error() {
        let mut pages = gradient_pages();
        if let crate::types::Background::Mesh { points } = &mut pages[0].background {
            points[0].radius = 0.0;
        }

        let diagnostics = validate_pages(&pages);
        assert!(diagnostics.iter().any(|d| d.is_error() && d.message.contains("radius")));
    }

    #[test]
    fn test_mesh_point_count_bounds() {
        let page = PageConfig {
            name: "two-points".to_string(),
            title: "Two Points".to_string(),
            subtitle: None,
            background: crate::types::Background::Mesh {
                points: vec![
                    GradientPoint::new(0.0, 0.0, Colour::WARM, 100.0),
                    GradientPoint::new(100.0, 100.0, Colour::TEAL, 100.0),
                ],
            },
            title_size: 72,
            domain: "example.com".to_string(),
            output: PathBuf::from("og-two.png"),
        };

        let diagnostics = validate_pages(&[page]);
        assert!(diagnostics.iter().any(|d| d.is_error() && d.message.contains("3-4")));
    }

    #[test]
    fn test_oversized_title_is_warning_only() {
        let mut pages = pattern_pages();
        pages[0].title_size = 180;

        let diagnostics = validate_pages(&pages);
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].is_error());
    }
}
