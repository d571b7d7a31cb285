//! List command implementation.
//!
//! Prints the resolved page table to stdout, one row per page.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::PageConfig;

use super::{resolve_pages, PageSet};

/// Print the resolved page table
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Builtin page set to list
    #[arg(long, value_enum, default_value = "pattern")]
    pub set: PageSet,

    /// Page table file (overrides the builtin sets)
    #[arg(long)]
    pub pages: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let pages = resolve_pages(args.pages.as_deref(), args.set)?;

    for page in &pages {
        println!("{}", format_row(page));
    }

    printer.info("Listed", &plural(pages.len(), "page", "pages"));
    Ok(())
}

/// One stdout row: name, style, title size, output file.
fn format_row(page: &PageConfig) -> String {
    format!(
        "{:<24} {:<8} {:>3}px  {}",
        page.name,
        page.background.style_name(),
        page.title_size,
        page.output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::types::{gradient_pages, pattern_pages};

    #[test]
    fn test_format_row_pattern() {
        let row = format_row(&pattern_pages()[0]);
        assert!(row.starts_with("home "));
        assert!(row.contains("pattern"));
        assert!(row.contains("84px"));
        assert!(row.ends_with("og-home.png"));
        // Columns line up across rows.
        let other = format_row(&pattern_pages()[1]);
        assert_eq!(row.find("pattern"), other.find("pattern"));
    }

    #[test]
    fn test_format_row_mesh() {
        let row = format_row(&gradient_pages()[3]);
        assert!(row.starts_with("native-plant-finder"));
        assert!(row.contains("mesh"));
        assert!(row.ends_with("og-native-plant-finder.png"));
    }

    #[test]
    fn test_run_with_builtin_set() {
        let args = ListArgs {
            set: PageSet::Gradient,
            pages: None,
        };
        run(args, &Printer::new()).unwrap();
    }
}
