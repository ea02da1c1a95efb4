//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::{FileSystem, ReadSeek};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn open(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadSeek>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Box::new(std::fs::File::open(path)?))
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn symlink(
        &self,
        original: &Path,
        link: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::os::unix::fs::symlink(original, link)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn open_reads_file_bytes() {
        let dir = std::env::temp_dir().join("trajrank_live_fs_open");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("episode.txt");
        std::fs::write(&path, "0,0,7,True,0\n").unwrap();

        let fs = LiveFileSystem;
        let mut reader = fs.open(&path).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, "0,0,7,True,0\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_dir_returns_sorted_names() {
        let dir = std::env::temp_dir().join("trajrank_live_fs_list");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("2.txt"), "x").unwrap();
        std::fs::write(dir.join("1.txt"), "x").unwrap();
        std::fs::write(dir.join("10.txt"), "x").unwrap();

        let fs = LiveFileSystem;
        let names = fs.list_dir(&dir).unwrap();
        assert_eq!(names, vec!["1.txt", "10.txt", "2.txt"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn symlink_creates_link_and_rejects_collision() {
        let dir = std::env::temp_dir().join("trajrank_live_fs_symlink");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let target = dir.join("target.txt");
        std::fs::write(&target, "data").unwrap();
        let link = dir.join("1.txt");

        let fs = LiveFileSystem;
        fs.symlink(&target, &link).unwrap();
        assert_eq!(std::fs::read_link(&link).unwrap(), target);

        // A second link at the same path must fail, not overwrite.
        let result = fs.symlink(&target, &link);
        assert!(result.is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn create_dir_all_tolerates_existing_directories() {
        let dir = std::env::temp_dir().join("trajrank_live_fs_mkdir");
        let _ = std::fs::remove_dir_all(&dir);

        let fs = LiveFileSystem;
        let nested = dir.join("a").join("b");
        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
