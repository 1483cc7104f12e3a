use crate::error::{DermAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub file_size: u64,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(DermAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_image {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            let file_size = entry.metadata().map(|m| m.len()).unwrap_or(0);

            images.push(ImageInfo {
                path: path.to_path_buf(),
                file_name,
                file_size,
            });
        }
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("Png"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("pdf"));
        assert!(!is_image_extension("gif"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(DermAiError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_images() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("face1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("face2.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("face3.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("readme.txt")).unwrap().write_all(b"text").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("face4.jpg")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "face1.jpg");
        assert_eq!(result[0].file_size, 5);
        assert_eq!(result[1].file_name, "face2.JPG");
        assert_eq!(result[2].file_name, "face3.png");
    }

    #[test]
    fn test_images_sorted_by_filename() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("c.jpg")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<_> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.jpg", "c.jpg"]);
    }
}
