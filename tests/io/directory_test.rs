/*!
 * Directory Listing Tests
 * Enumeration, growth and lazy classification
 */

use std::collections::BTreeSet;
use std::fs;

use dicom_io::core::INITIAL_ENTRY_CAPACITY;
use dicom_io::io::{ErrorCode, FileDirectory};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

fn names(dir: &FileDirectory) -> BTreeSet<String> {
    dir.entries()
        .map(|e| e.name().to_string_lossy().into_owned())
        .collect()
}

fn populate(temp: &TempDir, count: usize) -> BTreeSet<String> {
    (0..count)
        .map(|i| {
            let name = format!("IM{:05}.dcm", i);
            fs::write(temp.path().join(&name), b"").unwrap();
            name
        })
        .collect()
}

#[test]
fn test_mixed_listing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), b"").unwrap();
    fs::write(temp.path().join("b.txt"), b"text").unwrap();
    fs::create_dir(temp.path().join("subdir")).unwrap();

    let dir = FileDirectory::new(temp.path());
    assert_eq!(dir.error(), ErrorCode::Good);
    assert_eq!(dir.number_of_files(), 3);

    let expected: BTreeSet<String> = ["a", "b.txt", "subdir"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names(&dir), expected);

    for i in 0..dir.number_of_files() {
        let name = dir.get_file(i).unwrap();
        assert_ne!(name, ".");
        assert_ne!(name, "..");
        assert_eq!(dir.is_directory(i), name == "subdir", "{:?}", name);
        assert!(!dir.is_symlink(i));
    }
}

#[test]
fn test_growth_across_boundaries() {
    for count in [1, 3, 4, 5, 7, 8, 9, 16, 17, 33] {
        let temp = TempDir::new().unwrap();
        let expected = populate(&temp, count);

        let dir = FileDirectory::new(temp.path());
        assert_eq!(dir.number_of_files(), count);
        assert!(dir.capacity() >= count.max(INITIAL_ENTRY_CAPACITY));
        assert_eq!(names(&dir), expected);
    }
}

#[test]
fn test_entries_match_indices() {
    let temp = TempDir::new().unwrap();
    populate(&temp, 6);

    let dir = FileDirectory::new(temp.path());
    for (i, entry) in (&dir).into_iter().enumerate() {
        assert_eq!(dir.get_file(i), Some(entry.name()));
        assert_eq!(dir.entry(i).unwrap().name(), entry.name());
    }
}

#[test]
fn test_missing_directory() {
    let temp = TempDir::new().unwrap();
    let dir = FileDirectory::new(temp.path().join("nowhere"));

    assert_eq!(dir.error(), ErrorCode::FileNotFound);
    assert_eq!(dir.number_of_files(), 0);
    assert!(dir.get_file(0).is_none());
}

#[cfg(unix)]
mod unix {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::{symlink, PermissionsExt};

    #[test]
    fn test_listing_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.dcm");
        fs::write(&path, b"").unwrap();

        let dir = FileDirectory::new(&path);
        assert_eq!(dir.error(), ErrorCode::DirectoryNotFound);
        assert_eq!(dir.number_of_files(), 0);
    }

    #[test]
    fn test_symlinks() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("target")).unwrap();
        symlink(temp.path().join("target"), temp.path().join("link")).unwrap();
        symlink(temp.path().join("absent"), temp.path().join("dangling")).unwrap();

        let dir = FileDirectory::new(temp.path());
        assert_eq!(dir.number_of_files(), 3);

        let index = |name: &str| {
            (0..dir.number_of_files())
                .find(|&i| dir.get_file(i).unwrap() == name)
                .unwrap()
        };

        let link = index("link");
        assert!(dir.is_symlink(link));
        assert!(dir.is_directory(link));
        assert_eq!(dir.entry(link).unwrap().resolved_directory(), Some(true));

        let target = index("target");
        assert!(dir.is_directory(target));
        assert!(!dir.is_symlink(target));

        let dangling = index("dangling");
        assert!(dir.is_symlink(dangling));
        assert!(!dir.is_directory(dangling));
        assert_eq!(dir.entry(dangling).unwrap().resolved_directory(), None);
    }

    #[test]
    fn test_permission_denied() {
        if nix::unistd::Uid::effective().is_root() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.dcm"), b"").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let dir = FileDirectory::new(&locked);
        assert_eq!(dir.error(), ErrorCode::AccessDenied);
        assert_eq!(dir.number_of_files(), 0);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_no_lost_or_duplicated_entries(count in 0usize..70) {
        let temp = TempDir::new().unwrap();
        let expected = populate(&temp, count);

        let dir = FileDirectory::new(temp.path());
        prop_assert_eq!(dir.error(), ErrorCode::Good);
        prop_assert_eq!(dir.number_of_files(), count);
        prop_assert!(dir.number_of_files() <= dir.capacity());
        prop_assert_eq!(names(&dir), expected);
    }
}
