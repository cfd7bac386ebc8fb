use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub color: Colors,
}

/// Descriptive metadata for a command-line application.
///
/// Missing members deserialize as empty so that validation can name them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub name: String,
    pub description: String,
    pub style: Styles,
    pub usage: String,
    pub version: String,
}

crate::record!(Colors {
    background => "Background",
    foreground => "Foreground",
});
crate::record!(Styles { #[nested] color => "Color" });
crate::record!(Application {
    name => "Name",
    description => "Description",
    #[nested] style => "Style",
    usage => "Usage",
    version => "Version",
});

impl Application {
    pub fn version_line(&self) -> String {
        format!("Version: {}", self.version)
    }
}
