use crate::assets::{AssetIndex, GalleryImage};
use crate::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    DataAnalysis,
    GraphicDesign,
    Coding,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::DataAnalysis, Section::GraphicDesign, Section::Coding];

    /// Element id of the section on the page.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::DataAnalysis => "data-analysis",
            Self::GraphicDesign => "graphic-design",
            Self::Coding => "coding",
        }
    }

    /// Root of the section's translation keys.
    pub fn key(self) -> &'static str {
        match self {
            Self::DataAnalysis => "dataAnalysis",
            Self::GraphicDesign => "graphicDesign",
            Self::Coding => "coding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dashboard,
    Analytics,
    Branding,
    Marketing,
    Print,
    Digital,
    Illustration,
    Frontend,
    FullStack,
    Backend,
    Mobile,
    MlAi,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Branding => "Branding",
            Self::Marketing => "Marketing",
            Self::Print => "Print",
            Self::Digital => "Digital",
            Self::Illustration => "Illustration",
            Self::Frontend => "Frontend",
            Self::FullStack => "Full-Stack",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::MlAi => "ML/AI",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Dashboard => "bg-cyan/20 text-cyan border-cyan/30",
            Self::Analytics => "bg-yellow/20 text-yellow border-yellow/30",
            Self::Branding | Self::FullStack => "bg-purple/20 text-purple border-purple/30",
            Self::Marketing | Self::Frontend => "bg-blue/20 text-blue border-blue/30",
            Self::Print | Self::Mobile => "bg-brightYellow/20 text-brightYellow border-brightYellow/30",
            Self::Digital => "bg-brightMagenta/20 text-brightMagenta border-brightMagenta/30",
            Self::Illustration => "bg-brightCyan/20 text-brightCyan border-brightCyan/30",
            Self::Backend => "bg-green/20 text-green border-green/30",
            Self::MlAi => "bg-red/20 text-red border-red/30",
        }
    }
}

/// What a project shows when opened, as written in its static definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Images under `galleries/<folder>/`. The folder is not the cover id.
    Gallery { folder: &'static str },
    /// An externally hosted document shown in a frame.
    Embedded { url: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDef {
    /// Cover image id, matched against `covers/<id>.<ext>`.
    pub id: &'static str,
    pub section: Section,
    /// Translation key prefix for title, description and features.
    pub key: &'static str,
    pub technologies: &'static [&'static str],
    pub view: Option<&'static str>,
    pub github: Option<&'static str>,
    pub category: Category,
    pub content: ContentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Url(String),
    Placeholder,
}

impl Link {
    pub fn href(&self) -> &str {
        match self {
            Self::Url(url) => url.as_str(),
            Self::Placeholder => "#",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl From<Option<&str>> for Link {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Placeholder, |url| Self::Url(url.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectContent {
    Gallery { images: Vec<GalleryImage> },
    Embedded { embed_url: String },
}

/// A render-ready project: static definition, translated text and
/// discovered images merged together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub view: Link,
    pub github_link: Link,
    pub category: Category,
    pub content: ProjectContent,
    pub image: Option<String>,
}

impl Project {
    pub fn from_def(def: &ProjectDef, assets: &AssetIndex, tr: &impl Translator) -> Self {
        let content = match def.content {
            ContentSource::Gallery { folder } => ProjectContent::Gallery {
                images: assets.gallery(folder),
            },
            ContentSource::Embedded { url } => ProjectContent::Embedded {
                embed_url: url.to_string(),
            },
        };
        Self {
            id: def.id.to_string(),
            title: tr.t(&format!("{}.title", def.key)),
            description: tr.t(&format!("{}.description", def.key)),
            technologies: def.technologies.iter().map(|s| s.to_string()).collect(),
            features: tr.t_list(&format!("{}.features", def.key)),
            view: def.view.into(),
            github_link: def.github.into(),
            category: def.category,
            content,
            image: assets.cover(def.id).map(str::to_string),
        }
    }

    /// Whether the project has anything to show in the modal.
    pub fn is_viewable(&self) -> bool {
        match &self.content {
            ProjectContent::Gallery { images } => !images.is_empty(),
            ProjectContent::Embedded { .. } => true,
        }
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        match &self.content {
            ProjectContent::Gallery { images } => images.as_slice(),
            ProjectContent::Embedded { .. } => &[],
        }
    }
}

/// Builds project records from static definitions. Inputs are only read.
pub fn merge<'a, I>(defs: I, assets: &AssetIndex, tr: &impl Translator) -> Vec<Project>
where
    I: IntoIterator<Item = &'a ProjectDef>,
{
    defs.into_iter()
        .map(|def| Project::from_def(def, assets, tr))
        .collect()
}

pub fn projects_for(section: Section) -> impl Iterator<Item = &'static ProjectDef> {
    PROJECTS.iter().filter(move |def| def.section == section)
}

pub static PROJECTS: &[ProjectDef] = &[
    ProjectDef {
        id: "data-sales-dashboard",
        section: Section::DataAnalysis,
        key: "dataAnalysis.salesDashboard",
        technologies: &["Python", "Pandas", "Tableau", "SQL"],
        view: None,
        github: None,
        category: Category::Dashboard,
        content: ContentSource::Gallery {
            folder: "sales-dashboard",
        },
    },
    ProjectDef {
        id: "data-customer-segmentation",
        section: Section::DataAnalysis,
        key: "dataAnalysis.customerSegmentation",
        technologies: &["R", "Machine Learning", "ggplot2", "Power BI"],
        view: None,
        github: None,
        category: Category::Analytics,
        content: ContentSource::Gallery {
            folder: "customer-segmentation",
        },
    },
    ProjectDef {
        id: "data-predictive-analytics",
        section: Section::DataAnalysis,
        key: "dataAnalysis.predictiveAnalytics",
        technologies: &["Python", "Scikit-learn", "TensorFlow", "Jupyter"],
        view: None,
        github: None,
        category: Category::Analytics,
        content: ContentSource::Gallery {
            folder: "predictive-analytics",
        },
    },
    ProjectDef {
        id: "graphic-interactive-portfolio",
        section: Section::GraphicDesign,
        key: "graphicDesign.interactivePortfolio",
        technologies: &[
            "Adobe InDesign",
            "Adobe Photoshop",
            "Adobe Illustrator",
            "Acrobat Reader",
        ],
        view: Some("https://www.behance.net/gallery/230210571/Interactive-Portfolio"),
        github: None,
        category: Category::Digital,
        content: ContentSource::Gallery {
            folder: "interactive-portfolio",
        },
    },
    ProjectDef {
        id: "graphic-brand-identity",
        section: Section::GraphicDesign,
        key: "graphicDesign.brandIdentity",
        technologies: &["Adobe Illustrator", "Figma", "Photoshop"],
        view: None,
        github: None,
        category: Category::Branding,
        content: ContentSource::Gallery {
            folder: "brand-identity",
        },
    },
    ProjectDef {
        id: "graphic-marketing-campaign",
        section: Section::GraphicDesign,
        key: "graphicDesign.marketingCampaign",
        technologies: &["Adobe Creative Suite", "InDesign", "After Effects"],
        view: None,
        github: None,
        category: Category::Marketing,
        content: ContentSource::Gallery {
            folder: "marketing-campaign",
        },
    },
    ProjectDef {
        id: "graphic-print-collection",
        section: Section::GraphicDesign,
        key: "graphicDesign.printCollection",
        technologies: &["InDesign", "Illustrator", "Photoshop"],
        view: None,
        github: None,
        category: Category::Print,
        content: ContentSource::Gallery {
            folder: "print-collection",
        },
    },
    ProjectDef {
        id: "graphic-social-media",
        section: Section::GraphicDesign,
        key: "graphicDesign.socialMedia",
        technologies: &["Canva Pro", "Adobe Creative Suite", "Figma"],
        view: None,
        github: None,
        category: Category::Digital,
        content: ContentSource::Gallery {
            folder: "social-media",
        },
    },
    ProjectDef {
        id: "graphic-illustration-series",
        section: Section::GraphicDesign,
        key: "graphicDesign.illustrationSeries",
        technologies: &["Procreate", "Adobe Illustrator", "Photoshop"],
        view: None,
        github: None,
        category: Category::Illustration,
        content: ContentSource::Gallery {
            folder: "illustration-series",
        },
    },
    ProjectDef {
        id: "coding-portfolio",
        section: Section::Coding,
        key: "coding.portfolio",
        technologies: &[
            "Rust",
            "Leptos",
            "Axum",
            "WebAssembly",
            "Tailwind CSS",
            "HTML",
            "CSS",
        ],
        view: Some("https://damijankante.github.io/"),
        github: Some("https://github.com/damijankante/damijankante.github.io"),
        category: Category::Frontend,
        content: ContentSource::Embedded {
            url: "https://damijankante.github.io/",
        },
    },
    ProjectDef {
        id: "coding-task-manager",
        section: Section::Coding,
        key: "coding.taskManager",
        technologies: &[
            "TypeScript",
            "React",
            "Next.js",
            "Python",
            "FastAPI",
            "PostgreSQL",
            "Celery",
        ],
        view: None,
        github: None,
        category: Category::FullStack,
        content: ContentSource::Gallery {
            folder: "task-manager",
        },
    },
    ProjectDef {
        id: "coding-ecommerce",
        section: Section::Coding,
        key: "coding.ecommerce",
        technologies: &[
            "React",
            "TypeScript",
            "Next.js",
            "Node.js",
            "PostgreSQL",
            "Stripe API",
            "Tailwind CSS",
        ],
        view: None,
        github: None,
        category: Category::FullStack,
        content: ContentSource::Gallery { folder: "ecommerce" },
    },
    ProjectDef {
        id: "coding-cv-builder",
        section: Section::Coding,
        key: "coding.cvBuilder",
        technologies: &["React", "Next.js", "TypeScript", "Node.js", "MongoDB", "Puppeteer"],
        view: None,
        github: None,
        category: Category::FullStack,
        content: ContentSource::Gallery {
            folder: "cv-builder",
        },
    },
    ProjectDef {
        id: "coding-game-stats",
        section: Section::Coding,
        key: "coding.gameStats",
        technologies: &["Python", "Flutter", "FastAPI", "PostgreSQL", "Redis", "BigQuery"],
        view: None,
        github: None,
        category: Category::Mobile,
        content: ContentSource::Gallery {
            folder: "game-stats",
        },
    },
    ProjectDef {
        id: "coding-chat-app",
        section: Section::Coding,
        key: "coding.chatApp",
        technologies: &["TypeScript", "Next.js", "Python", "PostgreSQL", "PyTorch", "Docker"],
        view: None,
        github: None,
        category: Category::MlAi,
        content: ContentSource::Gallery {
            folder: "chat-app",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "dataAnalysis": {
                    "salesDashboard": {
                        "title": "Sales Performance Dashboard",
                        "description": "Revenue trends",
                        "features": ["40% faster reporting"]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn def(id: &'static str) -> &'static ProjectDef {
        PROJECTS
            .iter()
            .find(|d| d.id == id)
            .expect("project should be defined")
    }

    fn assets() -> AssetIndex {
        AssetIndex::from_paths([
            "covers/data-sales-dashboard.png",
            "galleries/sales-dashboard/01-revenue-overview.png",
            "galleries/sales-dashboard/02-regional_breakdown.png",
        ])
    }

    #[test]
    fn test_merge_with_cover() {
        let project = Project::from_def(def("data-sales-dashboard"), &assets(), &catalog());
        assert_eq!(
            project.image.as_deref(),
            Some("/images/covers/data-sales-dashboard.png")
        );
        assert_eq!(project.title, "Sales Performance Dashboard");
        assert_eq!(project.features, vec!["40% faster reporting"]);
        assert_eq!(project.gallery().len(), 2);
        assert_eq!(project.gallery()[1].description, "Regional breakdown");
        assert!(project.is_viewable());
        assert!(project.view.is_placeholder());
        assert_eq!(project.view.href(), "#");
    }

    #[test]
    fn test_merge_without_cover() {
        let project = Project::from_def(def("data-predictive-analytics"), &assets(), &catalog());
        assert_eq!(project.image, None);
        assert!(!project.is_viewable());
        // untranslated text echoes its key
        assert_eq!(project.title, "dataAnalysis.predictiveAnalytics.title");
    }

    #[test]
    fn test_merge_is_pure() {
        let assets = assets();
        let catalog = catalog();
        let before = assets.clone();
        let first = merge(projects_for(Section::DataAnalysis), &assets, &catalog);
        let second = merge(projects_for(Section::DataAnalysis), &assets, &catalog);
        assert_eq!(first, second);
        assert_eq!(assets, before);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_embedded_project() {
        let project = Project::from_def(def("coding-portfolio"), &AssetIndex::default(), &catalog());
        assert!(project.is_viewable());
        assert!(project.gallery().is_empty());
        assert_eq!(
            project.content,
            ProjectContent::Embedded {
                embed_url: "https://damijankante.github.io/".to_string()
            }
        );
        assert_eq!(project.view.href(), "https://damijankante.github.io/");
    }

    #[test]
    fn test_gallery_folder_differs_from_cover_id() {
        let d = def("graphic-interactive-portfolio");
        assert_eq!(
            d.content,
            ContentSource::Gallery {
                folder: "interactive-portfolio"
            }
        );
        let assets = AssetIndex::from_paths([
            "covers/graphic-interactive-portfolio.png",
            "galleries/interactive-portfolio/01-cover-spread.png",
        ]);
        let project = Project::from_def(d, &assets, &catalog());
        assert!(project.image.is_some());
        assert_eq!(project.gallery().len(), 1);
    }

    #[test]
    fn test_definitions_are_consistent() {
        let mut ids = PROJECTS.iter().map(|d| d.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        for section in Section::ALL {
            assert!(projects_for(section).count() > 0);
            assert!(projects_for(section).all(|d| d.key.starts_with(section.key())));
        }
    }

    #[test]
    fn test_shipped_content_is_translated() {
        let catalog = Catalog::english();
        let projects = merge(PROJECTS, &AssetIndex::discover(), &catalog);
        for project in projects {
            assert!(!project.title.ends_with(".title"), "{} untranslated", project.id);
            assert!(!project.features.is_empty(), "{} has no features", project.id);
        }
    }
}
