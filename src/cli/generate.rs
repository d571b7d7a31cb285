//! Generate command implementation.
//!
//! The page driver: resolves the page table, runs the pipeline once per
//! page in order, and writes one PNG per page. Fail-fast: the first
//! error aborts the run with whatever has been written so far left in
//! place.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{OgError, Result};
use crate::output::{plural, Printer};
use crate::render::{render_page, write_manifest, write_png, FontSet, ManifestEntry};
use crate::validation::validate_pages;

use super::{resolve_pages, PageSet};

/// Generate preview images from a page table
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(long, short, default_value = "./images")]
    pub output: PathBuf,

    /// Builtin page set to render
    #[arg(long, value_enum, default_value = "pattern")]
    pub set: PageSet,

    /// Page table file (overrides the builtin sets)
    #[arg(long)]
    pub pages: Option<PathBuf>,

    /// Grain RNG seed, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write manifest.json next to the images
    #[arg(long)]
    pub manifest: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let pages = resolve_pages(args.pages.as_deref(), args.set)?;

    // Pre-flight: refuse tables the pipeline cannot render sensibly.
    let diagnostics = validate_pages(&pages);
    for diagnostic in diagnostics.iter().filter(|d| !d.is_error()) {
        printer.warning("Warning", &format!("{}: {}", diagnostic.page, diagnostic.message));
    }
    if let Some(error) = diagnostics.iter().find(|d| d.is_error()) {
        return Err(OgError::Validation {
            message: format!("{}: {}", error.page, error.message),
            help: Some("Run `ogimg validate` for the full report".to_string()),
        });
    }

    // Idempotent if the directory already exists.
    fs::create_dir_all(&args.output).map_err(|e| OgError::Io {
        path: args.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let fonts = FontSet::load();
    if fonts.bold.is_builtin() || fonts.regular.is_builtin() {
        printer.warning("Fonts", "preferred faces unavailable, using the builtin face");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut entries = Vec::with_capacity(pages.len());
    for page in &pages {
        let img = render_page(page, &fonts, &mut rng);
        let path = args.output.join(&page.output);
        write_png(&img, &path)?;

        let (width, height) = img.dimensions();
        printer.status(
            "Generated",
            &format!("{} ({}x{})", path.display(), width, height),
        );
        entries.push(ManifestEntry {
            name: page.name.clone(),
            path: path.display().to_string(),
            width,
            height,
        });
    }

    if args.manifest {
        let manifest_path = args.output.join("manifest.json");
        write_manifest(&entries, &manifest_path)?;
        printer.status("Wrote", &manifest_path.display().to_string());
    }

    println!(
        "Generated {} to {}",
        plural(entries.len(), "image", "images"),
        args.output.display()
    );

    Ok(())
}
