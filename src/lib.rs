//! DevPanel: a browser panel of small developer tools (regex tester, JSON
//! viewer, markdown previewer, snippet manager), built with Yew.
//!
//! The text-processing modules have no browser dependency and are tested
//! natively; the rest only runs under `wasm32`.

pub mod config;
pub mod json_tool;
pub mod markdown;
pub mod regex_tool;
pub mod snippets;
pub mod storage;
pub mod theme;
pub mod tools;

pub mod clipboard;
pub mod files;
pub mod hooks;
pub mod notice;

pub mod components;

pub use components::App;
