use crate::error::{CommonsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v", ".mpg", ".mpeg", ".ts",
];

const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg", ".raw", ".heic", ".ico",
];

const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".iso", ".tgz", ".tbz2",
];

const DOCUMENT_EXTENSIONS: &[&str] = &[
    ".docx", ".doc", ".pdf", ".txt", ".rtf", ".odt", ".xlsx", ".xls", ".pptx", ".ppt", ".csv",
    ".md", ".pages",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    Any,
    Video,
    Image,
    Archive,
    Documents,
}

impl FileType {
    pub fn all() -> &'static [FileType] {
        &[
            FileType::Any,
            FileType::Video,
            FileType::Image,
            FileType::Archive,
            FileType::Documents,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileType::Any => "Any",
            FileType::Video => "Video",
            FileType::Image => "Image",
            FileType::Archive => "Archive",
            FileType::Documents => "Documents",
        }
    }

    /// Lowercase extensions (with the leading dot) accepted by this type.
    ///
    /// `None` means the type is a wildcard and accepts every path.
    pub fn extensions(&self) -> Option<&'static [&'static str]> {
        match self {
            FileType::Any => None,
            FileType::Video => Some(VIDEO_EXTENSIONS),
            FileType::Image => Some(IMAGE_EXTENSIONS),
            FileType::Archive => Some(ARCHIVE_EXTENSIONS),
            FileType::Documents => Some(DOCUMENT_EXTENSIONS),
        }
    }

    /// Case-insensitive lookup that yields `None` for unrecognized input
    /// instead of an error.
    pub fn parse_lenient(s: &str) -> Option<FileType> {
        match s.to_lowercase().as_str() {
            "any" => Some(FileType::Any),
            "video" => Some(FileType::Video),
            "image" => Some(FileType::Image),
            "archive" => Some(FileType::Archive),
            "documents" => Some(FileType::Documents),
            _ => None,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FileType {
    type Err = CommonsError;

    fn from_str(s: &str) -> Result<Self> {
        FileType::parse_lenient(s).ok_or_else(|| CommonsError::UnknownFileType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_is_case_insensitive() {
        assert_eq!(FileType::parse_lenient("any"), Some(FileType::Any));
        assert_eq!(FileType::parse_lenient("ANY"), Some(FileType::Any));
        assert_eq!(FileType::parse_lenient("ViDeO"), Some(FileType::Video));
        assert_eq!(FileType::parse_lenient("image"), Some(FileType::Image));
        assert_eq!(FileType::parse_lenient("archive"), Some(FileType::Archive));
        assert_eq!(FileType::parse_lenient("documents"), Some(FileType::Documents));
    }

    #[test]
    fn test_parse_lenient_rejects_unknown() {
        assert_eq!(FileType::parse_lenient("invalid"), None);
        assert_eq!(FileType::parse_lenient(""), None);
    }

    #[test]
    fn test_from_str_reports_unknown_type() {
        let err = "music".parse::<FileType>().unwrap_err();
        assert!(matches!(err, CommonsError::UnknownFileType(ref s) if s == "music"));
        assert_eq!("Archive".parse::<FileType>().unwrap(), FileType::Archive);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = FileType::all().iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["Any", "Video", "Image", "Archive", "Documents"]);
    }

    #[test]
    fn test_extension_tables() {
        assert!(FileType::Any.extensions().is_none());
        assert!(FileType::Video.extensions().unwrap().contains(&".ts"));
        assert!(FileType::Image.extensions().unwrap().contains(&".heic"));
        assert!(FileType::Archive.extensions().unwrap().contains(&".tbz2"));
        assert!(FileType::Documents.extensions().unwrap().contains(&".pages"));
        assert_eq!(FileType::Documents.extensions().unwrap().len(), 13);
    }
}
