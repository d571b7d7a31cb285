//! Validate command implementation.
//!
//! Checks a page table without rendering. Warnings are reported but do
//! not fail the run; any error does.

use std::path::PathBuf;

use clap::Args;

use crate::error::{OgError, Result};
use crate::output::{plural, Printer};
use crate::validation::validate_pages;

use super::{resolve_pages, PageSet};

/// Check a page table without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Builtin page set to check
    #[arg(long, value_enum, default_value = "pattern")]
    pub set: PageSet,

    /// Page table file (overrides the builtin sets)
    #[arg(long)]
    pub pages: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let pages = resolve_pages(args.pages.as_deref(), args.set)?;
    let diagnostics = validate_pages(&pages);

    for diagnostic in &diagnostics {
        let label = if diagnostic.is_error() { "error" } else { "warning" };
        eprintln!(
            "{}: {}: {}",
            printer.severity(label, diagnostic.is_error()),
            diagnostic.page,
            diagnostic.message
        );
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        return Err(OgError::Validation {
            message: format!("{} in the page table", plural(errors, "error", "errors")),
            help: None,
        });
    }

    printer.status(
        "Validated",
        &format!(
            "{}, {}",
            plural(pages.len(), "page", "pages"),
            plural(diagnostics.len(), "warning", "warnings")
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_builtin_sets_pass() {
        for set in [PageSet::Pattern, PageSet::Gradient] {
            let args = ValidateArgs { set, pages: None };
            run(args, &Printer::new()).unwrap();
        }
    }

    #[test]
    fn test_validate_bad_table_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
- name: bad
  title: ""
  background:
    style: pattern
    background: "#FAF9F7"
    accent: "#FFE227"
    pattern: circles
  title_size: 72
  output: og-bad.png
"##
        )
        .unwrap();

        let args = ValidateArgs {
            set: PageSet::Pattern,
            pages: Some(file.path().to_path_buf()),
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(OgError::Validation { .. })));
    }
}
