pub mod completions;
pub mod generate;
pub mod list;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::types::{gradient_pages, load_pages, pattern_pages, PageConfig};

/// ogimg - Open Graph preview image generator
#[derive(Parser, Debug)]
#[command(name = "ogimg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate preview images from a page table
    Generate(generate::GenerateArgs),

    /// Print the resolved page table
    List(list::ListArgs),

    /// Check a page table without rendering
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Which builtin page set to use when no external table is given.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSet {
    /// Flat fill with grid and decorative shape backgrounds.
    #[default]
    Pattern,
    /// Mesh-gradient backgrounds.
    Gradient,
}

/// Resolve the page table: an external YAML file wins over the builtin
/// sets.
pub fn resolve_pages(pages_file: Option<&Path>, set: PageSet) -> Result<Vec<PageConfig>> {
    match pages_file {
        Some(path) => load_pages(path),
        None => Ok(match set {
            PageSet::Pattern => pattern_pages(),
            PageSet::Gradient => gradient_pages(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_sets() {
        let pattern = resolve_pages(None, PageSet::Pattern).unwrap();
        let gradient = resolve_pages(None, PageSet::Gradient).unwrap();
        assert_eq!(pattern.len(), 5);
        assert_eq!(gradient.len(), 5);
        assert_ne!(pattern[0].background, gradient[0].background);
    }

    #[test]
    fn test_resolve_missing_file_fails() {
        let result = resolve_pages(Some(Path::new("/nonexistent/pages.yaml")), PageSet::Pattern);
        assert!(result.is_err());
    }
}
