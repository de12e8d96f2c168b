mod app;
mod header;
mod json_viewer;
mod markdown_previewer;
mod regex_tester;
mod sidebar;
mod snippet_manager;

pub use app::App;
pub use header::Header;
pub use json_viewer::JsonViewer;
pub use markdown_previewer::MarkdownPreviewer;
pub use regex_tester::RegexTester;
pub use sidebar::Sidebar;
pub use snippet_manager::SnippetManager;
