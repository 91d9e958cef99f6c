use relative_path::{RelativePath, RelativePathBuf};

/// Represents a script file with a relative path and display-friendly title
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFile {
    relative_path: RelativePathBuf,
    title: String,
    display_path: String,
}

impl ScriptFile {
    /// Create a new ScriptFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let title = Self::extract_title(&relative_path);
        let display_path = strip_script_extension(relative_path.as_str()).to_string();

        Self {
            relative_path,
            title,
            display_path,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the script title (file name without the script extension)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the display path (relative path without the script extension)
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    fn extract_title(path: &RelativePath) -> String {
        path.file_name()
            .map(strip_script_extension)
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for ScriptFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ScriptFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

/// Strip a trailing `.fountain`/`.txt` extension, ASCII case-insensitively.
fn strip_script_extension(name: &str) -> &str {
    for ext in [".fountain", ".txt"] {
        if name.len() >= ext.len() && name.is_char_boundary(name.len() - ext.len()) {
            let (stem, suffix) = name.split_at(name.len() - ext.len());
            if suffix.eq_ignore_ascii_case(ext) {
                return stem;
            }
        }
    }
    name
}
