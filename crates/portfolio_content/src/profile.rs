use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ContentError, PROFILE_MANIFEST_JSON, PROFILE_SCHEMA_VERSION};

/// Top-level manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileManifest {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Profile payload.
    pub profile: Profile,
}

/// Portfolio owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Job title shown under the banner.
    pub role: String,
    /// Location shown by `whoami`.
    #[serde(default)]
    pub location: String,
    /// Contact address, exposed as the `email` open alias.
    pub email: String,
    /// Optional ASCII-art rendering of the name, one entry per line.
    #[serde(default)]
    pub name_ascii_art: Vec<String>,
    /// Social links keyed by short name.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    /// Downloadable documents.
    #[serde(default)]
    pub file_paths: FilePaths,
    /// Bio paragraphs.
    #[serde(default)]
    pub bio: Vec<String>,
    /// Showcased projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Skill names.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Education history, most recent first.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Employment history, most recent first.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Open todo items.
    #[serde(default)]
    pub todo: Vec<String>,
}

/// Paths of downloadable documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePaths {
    /// CV document.
    #[serde(default)]
    pub cv: String,
    /// Dissertation document.
    #[serde(default)]
    pub dissertation: String,
}

/// Showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// One-paragraph description.
    pub desc: String,
    /// Source repository.
    #[serde(default)]
    pub repo_link: Option<String>,
    /// Live deployment.
    #[serde(default)]
    pub deployed_link: Option<String>,
    /// Technologies used.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Degree or certificate.
    pub qualification: String,
    /// Awarding institution.
    pub institution: String,
    /// Institution location.
    pub location: String,
    /// Start year.
    pub start_date: String,
    /// End year.
    pub end_date: String,
    /// Final grade.
    pub grade: String,
    /// Optional summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional dissertation link.
    #[serde(default)]
    pub dissertation: Option<Dissertation>,
    /// Subjects or topics.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Dissertation reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dissertation {
    /// Title used as link text.
    pub title: String,
    /// Document link.
    pub link: String,
}

/// Employment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Job title.
    #[serde(default)]
    pub title: Option<String>,
    /// Employer.
    #[serde(default)]
    pub company: Option<String>,
    /// Work location.
    #[serde(default)]
    pub location: Option<String>,
    /// Start date as written.
    pub start_date: String,
    /// End date; `None` while the role is current.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Optional summary.
    #[serde(default)]
    pub description: Option<String>,
}

impl Role {
    /// Formats the role as a roles.txt bullet.
    pub fn summary_line(&self) -> String {
        let mut line = format!("- {}", self.title.as_deref().unwrap_or("Untitled Role"));
        if let Some(company) = self.company.as_deref().filter(|value| !value.is_empty()) {
            line.push_str(&format!(" at {company}"));
        }
        if let Some(location) = self.location.as_deref().filter(|value| !value.is_empty()) {
            line.push_str(&format!(" in {location}"));
        }
        line.push_str(&format!(
            " ({} - {})",
            self.start_date,
            self.end_date.as_deref().unwrap_or("Present")
        ));
        if let Some(description) = self.description.as_deref().filter(|value| !value.is_empty()) {
            line.push_str(&format!("\n  {description}"));
        }
        line
    }
}

impl Profile {
    /// Parses a manifest JSON document and checks its schema version.
    pub fn from_manifest_json(raw: &str) -> Result<Self, ContentError> {
        let manifest: ProfileManifest = serde_json::from_str(raw)?;
        if manifest.schema_version != PROFILE_SCHEMA_VERSION {
            return Err(ContentError::SchemaVersion {
                expected: PROFILE_SCHEMA_VERSION,
                found: manifest.schema_version,
            });
        }
        Ok(manifest.profile)
    }

    /// Loads the profile embedded at build time.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_manifest_json(PROFILE_MANIFEST_JSON)
    }

    /// Builds the `open` alias table.
    ///
    /// Entries are only present when their source value is non-empty. `email` maps to a
    /// `mailto:` URL.
    pub fn open_aliases(&self) -> BTreeMap<String, String> {
        let mut aliases = BTreeMap::new();
        let sources = [
            ("github", self.links.get("github").map(String::as_str)),
            ("linkedin", self.links.get("linkedin").map(String::as_str)),
            ("cv", Some(self.file_paths.cv.as_str())),
            ("dissertation", Some(self.file_paths.dissertation.as_str())),
        ];
        for (alias, target) in sources {
            if let Some(target) = target.filter(|value| !value.is_empty()) {
                aliases.insert(alias.to_string(), target.to_string());
            }
        }
        if !self.email.is_empty() {
            aliases.insert("email".to_string(), format!("mailto:{}", self.email));
        }
        aliases
    }

    /// Returns the ASCII-art name block, if the profile has one.
    pub fn ascii_art(&self) -> Option<String> {
        if self.name_ascii_art.is_empty() {
            None
        } else {
            Some(self.name_ascii_art.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_profile_loads() {
        let profile = Profile::bundled().expect("bundled profile");
        assert!(!profile.name.is_empty());
        assert!(!profile.role.is_empty());
        assert!(profile.ascii_art().is_some());
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let raw = r#"{"schema_version": 2, "profile": {"name": "A", "role": "B", "email": "a@b.c"}}"#;
        match Profile::from_manifest_json(raw) {
            Err(ContentError::SchemaVersion { expected, found }) => {
                assert_eq!((expected, found), (1, 2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_manifest() {
        assert!(matches!(
            Profile::from_manifest_json("{\"schema_version\": 1}"),
            Err(ContentError::Manifest(_))
        ));
    }

    #[test]
    fn open_aliases_skip_missing_sources() {
        let raw = r#"{"schema_version": 1, "profile": {
            "name": "A", "role": "B", "email": "a@b.c",
            "links": {"github": "https://github.com/a"},
            "file_paths": {"cv": "./cv.pdf"}
        }}"#;
        let profile = Profile::from_manifest_json(raw).expect("profile");
        let aliases = profile.open_aliases();
        assert_eq!(
            aliases.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["cv", "email", "github"]
        );
        assert_eq!(aliases["email"], "mailto:a@b.c");
    }

    #[test]
    fn role_summary_formats_current_and_past_roles() {
        let current = Role {
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            location: None,
            start_date: "2024".into(),
            end_date: None,
            description: Some("Builds things".into()),
        };
        assert_eq!(
            current.summary_line(),
            "- Engineer at Acme (2024 - Present)\n  Builds things"
        );

        let untitled = Role {
            title: None,
            company: None,
            location: Some("Leeds".into()),
            start_date: "2020".into(),
            end_date: Some("2021".into()),
            description: None,
        };
        assert_eq!(untitled.summary_line(), "- Untitled Role in Leeds (2020 - 2021)");
    }
}
