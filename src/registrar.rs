//! Packaging-time entry-point registrar.
//!
//! Scans script directories for files matching a name prefix and produces
//! `name = dotted.module.path:main` mapping lines. The installer consumes the
//! concatenated mapping to register callable command aliases; it deduplicates
//! by name, so entry order only has to follow the directory listing.
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path};

/// The (directory, prefix) pairs scanned at package build time.
pub const SCRIPT_DIRS: [(&str, &str); 3] = [
    ("lstchain/scripts", "lstchain_"),
    ("lstchain/scripts/onsite", "onsite_"),
    ("lstchain/tools", "lstchain_"),
];

fn module_path(script_dir: &Path) -> String {
    script_dir.to_string_lossy().replace(MAIN_SEPARATOR, ".")
}

fn scan_into(dir_on_disk: &Path, module: &str, prefix: &str) -> io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir_on_disk)? {
        let name = entry?.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(prefix) {
            continue;
        }
        // Strip the last extension only, like the `dl1_` output naming.
        let stem = match name.rfind('.') {
            Some(i) => &name[..i],
            None => name.as_ref(),
        };
        entries.push(format!("{stem} = {module}.{stem}:main"));
    }
    Ok(entries)
}

/// List the entry points for one script directory.
///
/// The dotted module path is derived from `script_dir` itself, so call this
/// with a path relative to the package root. A missing directory propagates
/// the `io::Error` and aborts the packaging step.
pub fn scan_scripts(script_dir: &Path, prefix: &str) -> io::Result<Vec<String>> {
    scan_into(script_dir, &module_path(script_dir), prefix)
}

/// Concatenated entry points for all of [`SCRIPT_DIRS`], resolved against
/// `package_root`.
pub fn console_scripts(package_root: &Path) -> io::Result<Vec<String>> {
    let mut all = Vec::new();
    for (dir, prefix) in SCRIPT_DIRS {
        let module = module_path(Path::new(dir));
        all.extend(scan_into(&package_root.join(dir), &module, prefix)?);
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn keeps_only_prefixed_scripts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lstchain_foo.py");
        touch(dir.path(), "lstchain_bar.py");
        touch(dir.path(), "other.py");

        let mut entries = scan_scripts(dir.path(), "lstchain_").unwrap();
        entries.sort();

        let module = dir.path().to_string_lossy().replace(MAIN_SEPARATOR, ".");
        assert_eq!(
            entries,
            vec![
                format!("lstchain_bar = {module}.lstchain_bar:main"),
                format!("lstchain_foo = {module}.lstchain_foo:main"),
            ]
        );
    }

    #[test]
    fn strips_only_the_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lstchain_check.v2.py");

        let entries = scan_scripts(dir.path(), "lstchain_").unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("lstchain_check.v2 = "));
    }

    #[test]
    fn missing_directory_propagates() {
        let missing = PathBuf::from("/definitely/not/here");
        assert!(scan_scripts(&missing, "lstchain_").is_err());
    }

    #[test]
    fn console_scripts_concatenates_the_fixed_dirs() {
        let root = tempfile::tempdir().unwrap();
        for (dir, _) in SCRIPT_DIRS {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        touch(&root.path().join("lstchain/scripts"), "lstchain_r0_to_dl1.py");
        touch(&root.path().join("lstchain/scripts"), "README.md");
        touch(&root.path().join("lstchain/scripts/onsite"), "onsite_calib.py");
        touch(&root.path().join("lstchain/tools"), "lstchain_dump.py");

        let mut entries = console_scripts(root.path()).unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![
                "lstchain_dump = lstchain.tools.lstchain_dump:main".to_string(),
                "lstchain_r0_to_dl1 = lstchain.scripts.lstchain_r0_to_dl1:main".to_string(),
                "onsite_calib = lstchain.scripts.onsite.onsite_calib:main".to_string(),
            ]
        );
    }

    #[test]
    fn console_scripts_fails_when_a_fixed_dir_is_missing() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("lstchain/scripts")).unwrap();
        // onsite/ and tools/ absent
        assert!(console_scripts(root.path()).is_err());
    }
}
