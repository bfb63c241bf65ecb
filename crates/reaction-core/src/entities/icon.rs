//! Icon set - reaction images found on disk

use serde::Serialize;

/// One directory of reaction images
///
/// Every file in a set shares one extension; the icon id is the file stem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IconSet {
    /// Directory name, `None` for the default set at the asset root
    pub name: Option<String>,
    /// Lowercased extension shared by all images
    pub extension: String,
    /// Icon ids in directory order
    pub icons: Vec<String>,
}

impl IconSet {
    pub fn contains(&self, icon: &str) -> bool {
        self.icons.iter().any(|i| i == icon)
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Path of an icon relative to the image root, e.g. `flat/like.svg`
    pub fn relative_path(&self, icon: &str) -> String {
        match &self.name {
            Some(set) => format!("{set}/{icon}.{}", self.extension),
            None => format!("{icon}.{}", self.extension),
        }
    }
}
