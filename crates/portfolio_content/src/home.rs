use std::collections::BTreeMap;

use crate::{Education, Profile, Project};

/// Discriminant of a [`HomeItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeItemKind {
    /// Plain text file.
    File,
    /// Bio paragraphs.
    Bio,
    /// Single link.
    Link,
    /// Named link list.
    Links,
    /// Project list.
    Projects,
    /// Education list.
    Education,
}

/// Entry of the virtual home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeItem {
    /// Preformatted text.
    File {
        /// File text.
        content: String,
    },
    /// Bio paragraphs.
    Bio {
        /// One entry per paragraph.
        lines: Vec<String>,
    },
    /// Link to a document.
    Link {
        /// Link target.
        href: String,
    },
    /// Named links.
    Links {
        /// Links keyed by display name.
        items: BTreeMap<String, String>,
    },
    /// Showcased projects.
    Projects {
        /// Project entries.
        projects: Vec<Project>,
    },
    /// Education history.
    Education {
        /// Education entries.
        education: Vec<Education>,
    },
}

impl HomeItem {
    /// Returns the entry kind.
    pub fn kind(&self) -> HomeItemKind {
        match self {
            Self::File { .. } => HomeItemKind::File,
            Self::Bio { .. } => HomeItemKind::Bio,
            Self::Link { .. } => HomeItemKind::Link,
            Self::Links { .. } => HomeItemKind::Links,
            Self::Projects { .. } => HomeItemKind::Projects,
            Self::Education { .. } => HomeItemKind::Education,
        }
    }
}

/// Flat, read-only home directory built from a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir {
    entries: BTreeMap<String, HomeItem>,
}

impl HomeDir {
    /// Path shown for the home directory.
    pub const PATH: &'static str = "~";

    /// Builds the home directory listing for `profile`.
    pub fn from_profile(profile: &Profile) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "README.txt".to_string(),
            HomeItem::File {
                content: [
                    "Welcome.",
                    "",
                    "Try: help, ls, cat README.txt, bio, projects, socials, open cv, open github",
                ]
                .join("\n"),
            },
        );
        entries.insert(
            "bio.txt".to_string(),
            HomeItem::Bio {
                lines: profile.bio.clone(),
            },
        );
        entries.insert(
            "projects.txt".to_string(),
            HomeItem::Projects {
                projects: profile.projects.clone(),
            },
        );
        entries.insert(
            "socials.txt".to_string(),
            HomeItem::Links {
                items: profile.links.clone(),
            },
        );
        entries.insert(
            "skills.txt".to_string(),
            HomeItem::File {
                content: profile.skills.join(", "),
            },
        );
        entries.insert(
            "education.txt".to_string(),
            HomeItem::Education {
                education: profile.education.clone(),
            },
        );
        entries.insert(
            "roles.txt".to_string(),
            HomeItem::File {
                content: profile
                    .roles
                    .iter()
                    .map(|role| role.summary_line())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            },
        );
        entries.insert(
            "cv.pdf".to_string(),
            HomeItem::Link {
                href: profile.file_paths.cv.clone(),
            },
        );
        entries.insert(
            "dissertation.pdf".to_string(),
            HomeItem::Link {
                href: profile.file_paths.dissertation.clone(),
            },
        );
        entries.insert(
            "todo.md".to_string(),
            HomeItem::File {
                content: profile
                    .todo
                    .iter()
                    .map(|item| format!("- [ ] {item}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
        );
        Self { entries }
    }

    /// Entry names in ascending order.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Looks up an entry by exact name.
    pub fn resolve(&self, name: &str) -> Option<&HomeItem> {
        self.entries.get(name)
    }

    /// Entry names whose kind satisfies `accept`, in ascending order.
    pub fn names_where(&self, accept: impl Fn(HomeItemKind) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, item)| accept(item.kind()))
            .map(|(name, _)| name.clone())
            .collect()
    }
}
