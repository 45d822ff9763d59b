//! Checks that the package manifest carries the metadata crates.io expects

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    fn package_section() -> String {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let text = fs::read_to_string(manifest).unwrap();
        text.split("\n[")
            .find(|section| section.starts_with("[package]") || section.starts_with("package]"))
            .unwrap()
            .to_string()
    }

    // Tests every common metadata key is declared on the package
    // Verified by removing the repository key
    #[test]
    fn test_package_metadata_complete() {
        let package = package_section();
        let keys = [
            "name", "version", "edition", "rust-version", "authors", "description",
            "documentation", "repository", "license", "readme", "keywords", "categories",
        ];

        for key in keys {
            assert!(
                package.lines().any(|line| line.starts_with(&format!("{key} ="))),
                "missing package key {key}"
            );
        }
    }
}
