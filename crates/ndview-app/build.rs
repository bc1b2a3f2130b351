//! Exposes the workspace `VERSION` file as `NDVIEW_VERSION`.

use std::env;
use std::fs;
use std::path::Path;

fn is_release_triple(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let version_file = Path::new(&manifest_dir).join("../../VERSION");
    println!("cargo:rerun-if-changed={}", version_file.display());

    let contents = fs::read_to_string(&version_file)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", version_file.display()));
    let version = contents.trim();
    assert!(
        is_release_triple(version),
        "{} must hold MAJOR.MINOR.PATCH, found {version:?}",
        version_file.display()
    );

    println!("cargo:rustc-env=NDVIEW_VERSION={version}");
}
