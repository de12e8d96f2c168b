// Storage keys. Every persisted setting lives under its own key.
pub const KEY_ACTIVE_TOOL: &str = "active-tool";
pub const KEY_THEME: &str = "dev-tools-theme";
pub const KEY_SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";

pub const KEY_REGEX_PATTERN: &str = "regex-pattern";
pub const KEY_REGEX_FLAGS: &str = "regex-flags";
pub const KEY_REGEX_TEST_STRING: &str = "regex-test-string";
pub const KEY_REGEX_REPLACE: &str = "regex-replace";
pub const KEY_REGEX_ACTIVE_TAB: &str = "regex-active-tab";

pub const KEY_JSON_INPUT: &str = "json-input";

pub const KEY_MARKDOWN_INPUT: &str = "markdown-input";
pub const KEY_MARKDOWN_PREVIEW_VISIBLE: &str = "markdown-preview-visible";

pub const KEY_SNIPPETS: &str = "code-snippets";

// Defaults
pub const APP_NAME: &str = "DevPanel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_REGEX_FLAGS: &str = "g";
pub const DEFAULT_TEST_STRING: &str = "Sample text to test your regular expression.";
pub const DEFAULT_REPLACEMENT: &str = "$&";

pub const DEFAULT_JSON_INDENT: usize = 2;

pub const DEFAULT_MARKDOWN: &str = r#"# Markdown Previewer

## Features
- Real-time preview
- GitHub-flavored markdown
- Export to HTML

### Code Example
```javascript
function helloWorld() {
  console.log("Hello, world!");
}
```

> This is a blockquote

- [x] Task 1
- [ ] Task 2
"#;

pub const DEFAULT_SNIPPET_LANGUAGE: &str = "javascript";

// Download names
pub const JSON_DOWNLOAD_NAME: &str = "formatted.json";
pub const MARKDOWN_DOWNLOAD_NAME: &str = "document.md";
pub const HTML_DOWNLOAD_NAME: &str = "document.html";

pub const MIME_JSON: &str = "application/json";
pub const MIME_MARKDOWN: &str = "text/markdown";
pub const MIME_HTML: &str = "text/html";

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// Default contents of the JSON input box.
pub fn default_json_input() -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "example": "Paste or enter your JSON here"
    }))
    .unwrap_or_default()
}
