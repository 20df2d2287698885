use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProfileHeader {
    name: String,
    role: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ManifestHeader {
    schema_version: u32,
    profile: ProfileHeader,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("profile.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let header: ManifestHeader = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if header.schema_version != 1 {
        panic!(
            "profile schema mismatch in {}: expected 1 found {}",
            path.display(),
            header.schema_version
        );
    }
    for (field, value) in [
        ("name", &header.profile.name),
        ("role", &header.profile.role),
        ("email", &header.profile.email),
    ] {
        if value.trim().is_empty() {
            panic!("profile.{field} must not be empty in {}", path.display());
        }
    }

    let manifest: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let json = serde_json::to_string_pretty(&manifest).expect("serialize profile manifest");
    let generated = format!(
        "/// Build-time generated profile manifest JSON.\n\
pub const PROFILE_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("profile_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
