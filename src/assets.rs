use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions accepted as project images.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "gif"];

/// URL prefix under which `public/images` is served.
pub const IMAGE_ROOT_URL: &str = "/images";

const COVERS_DIR: &str = "covers";
const GALLERIES_DIR: &str = "galleries";

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s*").expect("ordinal prefix pattern should compile"));

/// Image files shipped with the site. Only the file list is embedded, the
/// bytes are served from the site root. The include globs match the
/// lowercase extensions in [`IMAGE_EXTENSIONS`], the same set [`is_image`]
/// accepts.
#[derive(Embed)]
#[folder = "public/images"]
#[include = "*.png"]
#[include = "*.jpg"]
#[include = "*.jpeg"]
#[include = "*.svg"]
#[include = "*.gif"]
#[metadata_only = true]
pub struct Images;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Unsupported image extension: {0}")]
    UnsupportedExtension(String),
    #[error("Image is outside the covers/galleries layout: {0}")]
    NotInTree(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    pub url: String,
}

impl ImageRef {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            url: format!("{IMAGE_ROOT_URL}/{path}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub description: String,
}

impl From<&ImageRef> for GalleryImage {
    fn from(image: &ImageRef) -> Self {
        Self {
            src: image.url.clone(),
            description: caption(file_stem(&image.path)),
        }
    }
}

/// Where an image sits in the asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// `covers/<project-id>.<ext>`
    Cover(String),
    /// `galleries/<folder>/...`
    Gallery(String),
}

/// Extensions are matched as written: `photo.JPG` is not an image.
pub fn is_image(path: &str) -> bool {
    extension(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    name.rfind('.').map(|i| &name[i + 1..])
}

/// File name without its last extension.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Turns a gallery file stem into a display caption.
///
/// Hyphens and underscores become spaces, one leading ordinal prefix
/// (`01-`, `2_`) is dropped and the first letter is capitalized. A stem
/// made only of digits is captioned `Image <n>`.
pub fn caption(stem: &str) -> String {
    let spaced = stem.replace(['-', '_'], " ");
    let text = ORDINAL_PREFIX.replace(&spaced, "");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => {
            let digits = spaced.trim().trim_start_matches('0');
            let n = if digits.is_empty() { "0" } else { digits };
            format!("Image {n}")
        }
    }
}

/// Classifies a path relative to the image root.
pub fn placement(path: &str) -> Result<Placement, AssetError> {
    if !is_image(path) {
        return Err(AssetError::UnsupportedExtension(path.to_string()));
    }
    let parts = path.split('/').collect::<Vec<_>>();
    match parts.as_slice() {
        [COVERS_DIR, _] => Ok(Placement::Cover(file_stem(path).to_string())),
        [GALLERIES_DIR, folder, _, ..] if !folder.is_empty() => {
            Ok(Placement::Gallery(folder.to_string()))
        }
        _ => Err(AssetError::NotInTree(path.to_string())),
    }
}

/// Cover and gallery lookups over every discovered image.
///
/// Built once at startup by [`AssetIndex::discover`] and handed to whatever
/// renders projects. Cover ids and gallery folders are separate keyspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    covers: HashMap<String, ImageRef>,
    galleries: HashMap<String, Vec<ImageRef>>,
    shadowed: Vec<String>,
}

impl AssetIndex {
    /// Indexes the embedded image tree.
    pub fn discover() -> Self {
        let index = Self::from_paths(Images::iter());
        log::debug!(
            "discovered {} cover images and {} galleries",
            index.covers.len(),
            index.galleries.len()
        );
        index
    }

    /// Indexes an arbitrary list of paths relative to the image root.
    ///
    /// Paths are visited in lexicographic order so the result does not depend
    /// on directory traversal order. When two covers share a stem the later
    /// path wins.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = paths
            .into_iter()
            .map(|p| p.as_ref().trim_start_matches('/').to_string())
            .collect::<Vec<_>>();
        paths.sort();
        paths.dedup();

        let mut index = Self::default();
        for path in paths {
            match placement(&path) {
                Ok(Placement::Cover(id)) => {
                    if let Some(old) = index.covers.insert(id.clone(), ImageRef::new(&path)) {
                        log::warn!("cover {id} provided by both {} and {path}", old.path);
                        index.shadowed.push(old.path);
                    }
                }
                Ok(Placement::Gallery(folder)) => {
                    index
                        .galleries
                        .entry(folder)
                        .or_default()
                        .push(ImageRef::new(&path));
                }
                Err(e) => log::debug!("skipping asset: {e}"),
            }
        }
        index
    }

    pub fn cover(&self, id: &str) -> Option<&str> {
        self.covers.get(id).map(|image| image.url.as_str())
    }

    pub fn covers(&self) -> impl Iterator<Item = (&str, &ImageRef)> {
        self.covers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Cover paths that lost to another file with the same stem.
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }

    /// Gallery images of one folder in file order. Unknown folders are empty.
    pub fn gallery(&self, folder: &str) -> Vec<GalleryImage> {
        self.galleries
            .get(folder)
            .map(|images| images.iter().map(GalleryImage::from).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption() {
        assert_eq!(caption("01-sunset-view"), "Sunset view");
        assert_eq!(caption("2_team_photo"), "Team photo");
        assert_eq!(caption("logo"), "Logo");
        assert_eq!(caption("Already clean"), "Already clean");
        assert_eq!(caption(&caption("03-menu_board")), caption("Menu board"));
    }

    #[test]
    fn test_caption_strips_one_prefix_only() {
        assert_eq!(caption("01-2024-report"), "2024 report");
        assert_eq!(caption("poster-2"), "Poster 2");
    }

    #[test]
    fn test_caption_digits_only() {
        assert_eq!(caption("007"), "Image 7");
        assert_eq!(caption("000"), "Image 0");
        assert_eq!(caption("12-"), "Image 12");
    }

    #[test]
    fn test_caption_ordinal_is_ascii() {
        assert_eq!(caption("٣-photo"), "٣ photo");
        assert_eq!(caption("3-photo"), "Photo");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("covers/data-sales-dashboard.png"), "data-sales-dashboard");
        assert_eq!(file_stem("galleries/a/01.final.jpeg"), "01.final");
        assert_eq!(file_stem("no-extension"), "no-extension");
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("covers/a.png"));
        assert!(is_image("covers/a.jpeg"));
        assert!(!is_image("covers/a.JPG"));
        assert!(is_image("galleries/x/1.svg"));
        assert!(!is_image("covers/notes.txt"));
        assert!(!is_image("covers/png"));
    }

    #[test]
    fn test_placement() {
        assert_eq!(
            placement("covers/coding-portfolio.svg"),
            Ok(Placement::Cover("coding-portfolio".to_string()))
        );
        assert_eq!(
            placement("galleries/interactive-portfolio/01-spread.png"),
            Ok(Placement::Gallery("interactive-portfolio".to_string()))
        );
        assert!(matches!(
            placement("covers/nested/a.png"),
            Err(AssetError::NotInTree(_))
        ));
        assert!(matches!(
            placement("galleries/loose.png"),
            Err(AssetError::NotInTree(_))
        ));
        assert!(matches!(
            placement("covers/readme.md"),
            Err(AssetError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_cover_lookup() {
        let index = AssetIndex::from_paths([
            "covers/data-sales-dashboard.png",
            "covers/graphic-interactive-portfolio.jpg",
        ]);
        assert_eq!(
            index.cover("data-sales-dashboard"),
            Some("/images/covers/data-sales-dashboard.png")
        );
        assert_eq!(index.cover("data-predictive-analytics"), None);
    }

    #[test]
    fn test_cover_count_bounded_by_files() {
        let paths = [
            "covers/a.png",
            "covers/b.png",
            "covers/a.svg",
            "covers/c.gif",
            "covers/skip.txt",
        ];
        let index = AssetIndex::from_paths(paths);
        let matching = paths.iter().filter(|p| is_image(p)).count();
        assert!(index.covers().count() <= matching);
        assert_eq!(index.covers().count(), 3);
    }

    #[test]
    fn test_cover_collision_is_order_independent() {
        let forward = AssetIndex::from_paths(["covers/a.png", "covers/a.svg"]);
        let backward = AssetIndex::from_paths(["covers/a.svg", "covers/a.png"]);
        assert_eq!(forward, backward);
        assert_eq!(forward.cover("a"), Some("/images/covers/a.svg"));
        assert_eq!(forward.shadowed(), ["covers/a.png".to_string()]);

        let distinct = AssetIndex::from_paths(["covers/a.png", "covers/b.png"]);
        assert!(distinct.shadowed().is_empty());
    }

    #[test]
    fn test_uppercase_extension_skipped() {
        let index = AssetIndex::from_paths(["covers/x.JPG", "galleries/g/01-a.PNG"]);
        assert_eq!(index.cover("x"), None);
        assert!(index.gallery("g").is_empty());
    }

    #[test]
    fn test_gallery() {
        let index = AssetIndex::from_paths([
            "galleries/interactive-portfolio/02-typography_grid.png",
            "galleries/interactive-portfolio/01-cover-spread.png",
            "galleries/interactive-portfolio/notes.txt",
            "galleries/other/01-unrelated.png",
        ]);
        let gallery = index.gallery("interactive-portfolio");
        assert_eq!(
            gallery,
            vec![
                GalleryImage {
                    src: "/images/galleries/interactive-portfolio/01-cover-spread.png".to_string(),
                    description: "Cover spread".to_string(),
                },
                GalleryImage {
                    src: "/images/galleries/interactive-portfolio/02-typography_grid.png"
                        .to_string(),
                    description: "Typography grid".to_string(),
                },
            ]
        );
        assert!(index.gallery("missing").is_empty());
    }

    #[test]
    fn test_keyspaces_are_separate() {
        let index = AssetIndex::from_paths([
            "covers/graphic-interactive-portfolio.png",
            "galleries/interactive-portfolio/01-a.png",
        ]);
        assert!(index.gallery("graphic-interactive-portfolio").is_empty());
        assert_eq!(index.cover("interactive-portfolio"), None);
    }

    #[test]
    fn test_leading_slash_ignored() {
        let index = AssetIndex::from_paths(["/covers/x.png"]);
        assert_eq!(index.cover("x"), Some("/images/covers/x.png"));
    }

    #[test]
    fn test_discover_embedded_tree() {
        let index = AssetIndex::discover();
        assert!(index.cover("data-sales-dashboard").is_some());
        assert!(!index.gallery("interactive-portfolio").is_empty());
    }
}
