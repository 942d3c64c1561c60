use thiserror::Error;

use crate::assets::GalleryImage;
use crate::catalog::Project;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("Project {0} has no gallery or embed to show")]
    NotViewable(String),
    #[error("A project is already open")]
    AlreadyOpen,
    #[error("No project is open")]
    NotOpen,
    #[error("Project {0} is embedded and has no gallery")]
    NoGallery(String),
    #[error("Image {index} is out of range for a gallery of {len}")]
    ImageOutOfRange { index: usize, len: usize },
}

/// Which project's modal is open, and which of its images is enlarged.
///
/// Failed transitions leave the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Viewing(Project),
    Fullscreen {
        project: Project,
        image: GalleryImage,
    },
}

impl ModalState {
    pub fn open(&mut self, project: Project) -> Result<(), ModalError> {
        if self.is_open() {
            return Err(ModalError::AlreadyOpen);
        }
        if !project.is_viewable() {
            return Err(ModalError::NotViewable(project.id));
        }
        *self = Self::Viewing(project);
        Ok(())
    }

    pub fn view_image(&mut self, index: usize) -> Result<(), ModalError> {
        let project = match self {
            Self::Viewing(project) => project,
            Self::Fullscreen { .. } => return Err(ModalError::AlreadyOpen),
            Self::Closed => return Err(ModalError::NotOpen),
        };
        if project.gallery().is_empty() {
            return Err(ModalError::NoGallery(project.id.clone()));
        }
        let gallery = project.gallery();
        let image = gallery
            .get(index)
            .cloned()
            .ok_or(ModalError::ImageOutOfRange {
                index,
                len: gallery.len(),
            })?;
        if let Self::Viewing(project) = std::mem::take(self) {
            *self = Self::Fullscreen { project, image };
        }
        Ok(())
    }

    /// Leaves fullscreen, keeping the project open.
    pub fn back(&mut self) {
        if let Self::Fullscreen { .. } = self {
            if let Self::Fullscreen { project, .. } = std::mem::take(self) {
                *self = Self::Viewing(project);
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            Self::Closed => None,
            Self::Viewing(project) | Self::Fullscreen { project, .. } => Some(project),
        }
    }

    pub fn fullscreen_image(&self) -> Option<&GalleryImage> {
        match self {
            Self::Fullscreen { image, .. } => Some(image),
            _ => None,
        }
    }
}

/// Load state of one gallery cell. A failed cell shows a placeholder icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl CellState {
    pub fn on_load(&mut self) {
        if *self == Self::Loading {
            *self = Self::Loaded;
        }
    }

    pub fn on_error(&mut self) {
        *self = Self::Failed;
    }

    /// Catches up with an image that settled before its load handlers were
    /// attached, as server-rendered images do before hydration.
    pub fn on_mount(&mut self, complete: bool, natural_width: u32) {
        match (complete, natural_width) {
            (false, _) => {}
            (true, 0) => self.on_error(),
            (true, _) => self.on_load(),
        }
    }

    pub fn shows_placeholder(self) -> bool {
        self == Self::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetIndex;
    use crate::catalog::{Category, Link, ProjectContent};

    fn gallery_project(images: usize) -> Project {
        let paths = (0..images)
            .map(|i| format!("galleries/demo/{:02}-shot-{i}.png", i + 1))
            .collect::<Vec<_>>();
        let index = AssetIndex::from_paths(paths);
        Project {
            id: "demo".to_string(),
            title: "Demo".to_string(),
            description: String::new(),
            technologies: vec![],
            features: vec![],
            view: Link::Placeholder,
            github_link: Link::Placeholder,
            category: Category::Frontend,
            content: ProjectContent::Gallery {
                images: index.gallery("demo"),
            },
            image: None,
        }
    }

    fn embedded_project() -> Project {
        Project {
            content: ProjectContent::Embedded {
                embed_url: "https://example.com/sheet".to_string(),
            },
            ..gallery_project(0)
        }
    }

    #[test]
    fn test_open_view_close() {
        let mut state = ModalState::default();
        state.open(gallery_project(3)).unwrap();
        assert!(matches!(state, ModalState::Viewing(_)));

        state.view_image(1).unwrap();
        assert_eq!(
            state.fullscreen_image().map(|i| i.description.as_str()),
            Some("Shot 1")
        );

        state.close();
        assert_eq!(state, ModalState::Closed);
        assert!(state.project().is_none());
        assert!(state.fullscreen_image().is_none());
    }

    #[test]
    fn test_back_keeps_project() {
        let mut state = ModalState::default();
        let project = gallery_project(2);
        state.open(project.clone()).unwrap();
        state.view_image(0).unwrap();
        state.back();
        assert_eq!(state, ModalState::Viewing(project));
        assert!(state.fullscreen_image().is_none());

        // back outside fullscreen does nothing
        state.back();
        assert!(matches!(state, ModalState::Viewing(_)));
        let mut closed = ModalState::Closed;
        closed.back();
        assert_eq!(closed, ModalState::Closed);
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let mut state = ModalState::default();
        assert_eq!(
            state.open(gallery_project(0)),
            Err(ModalError::NotViewable("demo".to_string()))
        );
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_embedded_opens_without_gallery() {
        let mut state = ModalState::default();
        state.open(embedded_project()).unwrap();
        assert!(state.is_open());
        assert_eq!(
            state.view_image(0),
            Err(ModalError::NoGallery("demo".to_string()))
        );
        assert!(matches!(state, ModalState::Viewing(_)));
    }

    #[test]
    fn test_invalid_transitions_leave_state() {
        let mut state = ModalState::default();
        assert_eq!(state.view_image(0), Err(ModalError::NotOpen));

        state.open(gallery_project(2)).unwrap();
        let before = state.clone();
        assert_eq!(
            state.view_image(5),
            Err(ModalError::ImageOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(state, before);
        assert_eq!(state.open(gallery_project(1)), Err(ModalError::AlreadyOpen));
        assert_eq!(state, before);

        state.view_image(1).unwrap();
        let before = state.clone();
        assert_eq!(state.view_image(0), Err(ModalError::AlreadyOpen));
        assert_eq!(state, before);
    }

    #[test]
    fn test_close_from_any_state() {
        for steps in 0..3 {
            let mut state = ModalState::default();
            if steps > 0 {
                state.open(gallery_project(1)).unwrap();
            }
            if steps > 1 {
                state.view_image(0).unwrap();
            }
            state.close();
            assert_eq!(state, ModalState::Closed);
        }
    }

    #[test]
    fn test_cell_state() {
        let mut cell = CellState::default();
        assert!(!cell.shows_placeholder());
        cell.on_load();
        assert_eq!(cell, CellState::Loaded);

        let mut cell = CellState::default();
        cell.on_error();
        cell.on_load();
        assert!(cell.shows_placeholder());
    }

    #[test]
    fn test_cell_state_on_mount() {
        let mut broken = CellState::default();
        broken.on_mount(true, 0);
        assert!(broken.shows_placeholder());

        let mut pending = CellState::default();
        pending.on_mount(false, 0);
        assert_eq!(pending, CellState::Loading);

        let mut loaded = CellState::default();
        loaded.on_mount(true, 800);
        assert_eq!(loaded, CellState::Loaded);
    }
}
