use std::path::{Path, PathBuf};
use walkdir::WalkDir;

static IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

pub fn is_image_file(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// 递归遍历目录，返回其中所有图片文件的路径。
pub fn traverse(dir_path: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir_path) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn filters_by_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("c.png"));
        touch(&dir.path().join("d.bmp"));
        touch(&dir.path().join("e.gif"));
        touch(&dir.path().join("noext"));

        let mut names: Vec<String> = traverse(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "c.png", "e.gif"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("upper.JPG"));
        touch(&dir.path().join("mixed.JpEg"));

        let files = traverse(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/deep")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        touch(&dir.path().join("a/img.jpg"));
        touch(&dir.path().join("a/deep/img.png"));
        touch(&dir.path().join("b/img.jpg"));
        touch(&dir.path().join("b/notes.txt"));

        let files = traverse(dir.path()).unwrap();
        assert_eq!(files.len(), 3);

        // 不同子目录下允许出现同名文件
        let same_name = files
            .iter()
            .filter(|p| p.file_name().unwrap() == "img.jpg")
            .count();
        assert_eq!(same_name, 2);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(traverse(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn directories_are_never_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("folder.jpg")).unwrap();
        assert!(traverse(dir.path()).unwrap().is_empty());
    }
}
