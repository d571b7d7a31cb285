//! Page configuration: the static table driving image generation.
//!
//! Each `PageConfig` is an immutable description of one preview image.
//! Two builtin sets exist, one per background style, and an external
//! YAML file can replace either.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OgError, Result};
use crate::types::Colour;

/// Decorative pattern kinds for the pattern background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Circles,
    Spiral,
    Waves,
    Geometric,
}

/// An anchor point for the mesh-gradient background.
///
/// `radius` softens the anchor's influence; it is added to the distance
/// in the inverse-distance weight, so it must be positive. A radius of
/// zero or less makes the weight singular at the anchor itself; the
/// renderer does not clamp, `validate` reports it instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientPoint {
    pub position: (f32, f32),
    pub colour: Colour,
    pub radius: f32,
}

impl GradientPoint {
    pub fn new(x: f32, y: f32, colour: Colour, radius: f32) -> Self {
        Self {
            position: (x, y),
            colour,
            radius,
        }
    }
}

/// Background style for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Background {
    /// Flat fill with a faint grid and one decorative shape.
    Pattern {
        background: Colour,
        accent: Colour,
        pattern: Pattern,
    },
    /// Inverse-distance-weighted blend over 3-4 anchor points.
    Mesh { points: Vec<GradientPoint> },
}

impl Background {
    /// The accent colour used for the top bar and domain square.
    /// Mesh backgrounds borrow their first anchor's colour.
    pub fn accent(&self) -> Colour {
        match self {
            Background::Pattern { accent, .. } => *accent,
            Background::Mesh { points } => {
                points.first().map_or(Colour::DARK, |p| p.colour)
            }
        }
    }

    /// Grain intensity for this style.
    pub fn grain_intensity(&self) -> f32 {
        match self {
            Background::Pattern { .. } => 0.12,
            Background::Mesh { .. } => 0.15,
        }
    }

    /// Vertical position of the title baseline-top.
    pub fn title_y(&self) -> i32 {
        match self {
            Background::Pattern { .. } => 120,
            Background::Mesh { .. } => 200,
        }
    }

    pub fn style_name(&self) -> &'static str {
        match self {
            Background::Pattern { .. } => "pattern",
            Background::Mesh { .. } => "mesh",
        }
    }
}

/// Configuration for one preview image. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Short identifier used in status lines and the manifest.
    pub name: String,

    /// Main heading.
    pub title: String,

    /// Optional second line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub background: Background,

    /// Title font size in pixels.
    pub title_size: u32,

    /// Domain label drawn near the bottom edge.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Output file name, joined onto the output directory.
    pub output: PathBuf,
}

fn default_domain() -> String {
    "bensiverly.com".to_string()
}

/// Load a page table from a YAML file.
pub fn load_pages(path: &Path) -> Result<Vec<PageConfig>> {
    let source = fs::read_to_string(path).map_err(|e| OgError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read pages file: {}", e),
    })?;

    let pages: Vec<PageConfig> = serde_yaml::from_str(&source).map_err(|e| OgError::Config {
        message: format!("Invalid pages file {}: {}", path.display(), e),
        help: Some("Expected a YAML list of page entries".to_string()),
    })?;

    if pages.is_empty() {
        return Err(OgError::Config {
            message: format!("No pages defined in {}", path.display()),
            help: None,
        });
    }

    Ok(pages)
}

/// The builtin pattern-style page set.
pub fn pattern_pages() -> Vec<PageConfig> {
    let page = |name: &str,
                title: &str,
                subtitle: &str,
                accent: Colour,
                pattern: Pattern,
                title_size: u32| PageConfig {
        name: name.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        background: Background::Pattern {
            background: Colour::WARM,
            accent,
            pattern,
        },
        title_size,
        domain: default_domain(),
        output: PathBuf::from(format!("og-{}.png", name)),
    };

    vec![
        page(
            "home",
            "Ben Siverly",
            "Product Manager, Builder, Gardener",
            Colour::YELLOW,
            Pattern::Circles,
            84,
        ),
        page(
            "life-strategy",
            "Life Strategy Matrix",
            "Score life areas. See where to invest.",
            Colour::COBALT,
            Pattern::Geometric,
            72,
        ),
        page(
            "memorial-pamphlet",
            "Memorial Pamphlet",
            "Create a dignified memorial pamphlet.",
            Colour::TEAL,
            Pattern::Waves,
            72,
        ),
        page(
            "native-plant-finder",
            "Native Plant Finder",
            "Find plants tailored to your region.",
            Colour::YELLOW,
            Pattern::Spiral,
            72,
        ),
        page(
            "service-of-life",
            "Service of Life Builder",
            "Build a liturgy for a memorial.",
            Colour::COBALT,
            Pattern::Waves,
            66,
        ),
    ]
}

/// The builtin mesh-gradient page set.
///
/// Anchor tints are derived from the brand palette so each page reads
/// as a soft wash of its accent over the warm background.
pub fn gradient_pages() -> Vec<PageConfig> {
    let page = |name: &str,
                title: &str,
                subtitle: &str,
                points: Vec<GradientPoint>,
                title_size: u32| PageConfig {
        name: name.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        background: Background::Mesh { points },
        title_size,
        domain: default_domain(),
        output: PathBuf::from(format!("og-{}.png", name)),
    };

    vec![
        page(
            "home",
            "Ben Siverly",
            "Product Manager, Builder, Gardener",
            vec![
                GradientPoint::new(150.0, 100.0, Colour::YELLOW.lighten(40.0), 300.0),
                GradientPoint::new(1050.0, 150.0, Colour::WARM, 350.0),
                GradientPoint::new(600.0, 550.0, Colour::YELLOW_HOVER.lighten(25.0), 320.0),
            ],
            84,
        ),
        page(
            "life-strategy",
            "Life Strategy Matrix",
            "Score life areas. See where to invest.",
            vec![
                GradientPoint::new(200.0, 120.0, Colour::COBALT.lighten(55.0), 300.0),
                GradientPoint::new(1000.0, 500.0, Colour::WARM, 340.0),
                GradientPoint::new(900.0, 80.0, Colour::COBALT.lighten(70.0), 360.0),
            ],
            72,
        ),
        page(
            "memorial-pamphlet",
            "Memorial Pamphlet",
            "Create a dignified memorial pamphlet.",
            vec![
                GradientPoint::new(100.0, 500.0, Colour::TEAL.lighten(50.0), 320.0),
                GradientPoint::new(1100.0, 100.0, Colour::WARM, 300.0),
                GradientPoint::new(700.0, 300.0, Colour::TEAL.lighten(70.0), 360.0),
            ],
            72,
        ),
        page(
            "native-plant-finder",
            "Native Plant Finder",
            "Find plants tailored to your region.",
            vec![
                GradientPoint::new(150.0, 120.0, Colour::YELLOW.lighten(35.0), 300.0),
                GradientPoint::new(1050.0, 120.0, Colour::TEAL.lighten(55.0), 320.0),
                GradientPoint::new(200.0, 520.0, Colour::WARM, 340.0),
                GradientPoint::new(950.0, 520.0, Colour::YELLOW_HOVER.lighten(20.0), 300.0),
            ],
            72,
        ),
        page(
            "service-of-life",
            "Service of Life Builder",
            "Build a liturgy for a memorial.",
            vec![
                GradientPoint::new(250.0, 150.0, Colour::COBALT.lighten(60.0), 320.0),
                GradientPoint::new(950.0, 480.0, Colour::WARM, 300.0),
                GradientPoint::new(600.0, 80.0, Colour::COBALT.mix(Colour::TEAL, 0.5).lighten(60.0), 350.0),
            ],
            66,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_pattern_pages() {
        let pages = pattern_pages();
        assert_eq!(pages.len(), 5);

        let home = &pages[0];
        assert_eq!(home.title, "Ben Siverly");
        assert_eq!(home.title_size, 84);
        assert_eq!(home.output, PathBuf::from("og-home.png"));
        match &home.background {
            Background::Pattern {
                background,
                accent,
                pattern,
            } => {
                assert_eq!(*background, Colour::WARM);
                assert_eq!(*accent, Colour::YELLOW);
                assert_eq!(*pattern, Pattern::Circles);
            }
            Background::Mesh { .. } => panic!("home page should use the pattern style"),
        }
    }

    #[test]
    fn test_builtin_gradient_pages() {
        let pages = gradient_pages();
        assert_eq!(pages.len(), 5);

        // Every mesh page carries 3-4 anchors with positive radii.
        for page in &pages {
            match &page.background {
                Background::Mesh { points } => {
                    assert!((3..=4).contains(&points.len()), "{}", page.name);
                    assert!(points.iter().all(|p| p.radius > 0.0));
                }
                Background::Pattern { .. } => panic!("gradient set should be all mesh"),
            }
        }

        let finder = pages.iter().find(|p| p.name == "native-plant-finder").unwrap();
        match &finder.background {
            Background::Mesh { points } => assert_eq!(points.len(), 4),
            Background::Pattern { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_style_derived_parameters() {
        let pattern = &pattern_pages()[0].background;
        let mesh = &gradient_pages()[0].background;

        assert_eq!(pattern.grain_intensity(), 0.12);
        assert_eq!(mesh.grain_intensity(), 0.15);
        assert_eq!(pattern.title_y(), 120);
        assert_eq!(mesh.title_y(), 200);
        assert_eq!(pattern.accent(), Colour::YELLOW);
    }

    #[test]
    fn test_pages_yaml_roundtrip() {
        let pages = pattern_pages();
        let yaml = serde_yaml::to_string(&pages).unwrap();
        let back: Vec<PageConfig> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, pages);
    }

    #[test]
    fn test_load_pages_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
- name: docs
  title: Documentation
  background:
    style: pattern
    background: "#FAF9F7"
    accent: "#0D7377"
    pattern: waves
  title_size: 72
  output: og-docs.png
"##
        )
        .unwrap();

        let pages = load_pages(file.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "docs");
        assert_eq!(pages[0].subtitle, None);
        assert_eq!(pages[0].domain, "bensiverly.com");
        assert_eq!(pages[0].background.accent(), Colour::TEAL);
    }

    #[test]
    fn test_load_pages_missing_file() {
        let err = load_pages(Path::new("/nonexistent/pages.yaml"));
        assert!(err.is_err());
    }

    #[test]
    fn test_load_pages_empty_list() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(load_pages(file.path()).is_err());
    }
}
