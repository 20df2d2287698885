//! Read-only portfolio content: the bundled profile, its open aliases, and the virtual home
//! directory the shell commands browse.
//!
//! Content is authored in `profile.toml`, validated at build time, and embedded as JSON.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod home;
mod profile;

pub use error::ContentError;
pub use home::{HomeDir, HomeItem, HomeItemKind};
pub use profile::{Dissertation, Education, FilePaths, Profile, ProfileManifest, Project, Role};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/profile_generated.rs"));
}

/// Raw JSON of the bundled profile manifest.
pub const PROFILE_MANIFEST_JSON: &str = generated::PROFILE_MANIFEST_JSON;

/// Schema version accepted by [`Profile::from_manifest_json`].
pub const PROFILE_SCHEMA_VERSION: u32 = 1;
