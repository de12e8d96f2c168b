use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Regex,
    Json,
    Markdown,
    Snippets,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Regex, Tool::Json, Tool::Markdown, Tool::Snippets];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Regex => "Regex Tester",
            Tool::Json => "JSON Viewer",
            Tool::Markdown => "Markdown",
            Tool::Snippets => "Snippets",
        }
    }

    /// Short glyph shown in the sidebar, also when it is collapsed.
    pub fn icon(self) -> &'static str {
        match self {
            Tool::Regex => ".*",
            Tool::Json => "{}",
            Tool::Markdown => "M↓",
            Tool::Snippets => "</>",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            Tool::Regex => "1",
            Tool::Json => "2",
            Tool::Markdown => "3",
            Tool::Snippets => "4",
        }
    }

    /// Tool bound to a `KeyboardEvent.key` value.
    pub fn from_shortcut(key: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.shortcut() == key)
    }
}
