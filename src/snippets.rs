//! Saved code snippets.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{DEFAULT_SNIPPET_LANGUAGE, KEY_SNIPPETS};
use crate::storage::{KeyValueStore, StoreError};

pub const LANGUAGES: [&str; 20] = [
    "javascript",
    "typescript",
    "html",
    "css",
    "json",
    "markdown",
    "python",
    "java",
    "c",
    "cpp",
    "csharp",
    "go",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "rust",
    "shell",
    "sql",
    "plaintext",
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnippetError {
    #[error("Title and code are required")]
    MissingFields,
    #[error("No snippet with id {0}")]
    NotFound(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub language: String,
    pub code: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// What the add/edit dialog holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub language: String,
    pub code: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            language: DEFAULT_SNIPPET_LANGUAGE.to_string(),
            code: String::new(),
        }
    }
}

impl Draft {
    pub fn from_snippet(s: &Snippet) -> Self {
        Self {
            title: s.title.clone(),
            language: s.language.clone(),
            code: s.code.clone(),
        }
    }

    fn validate(&self) -> Result<(), SnippetError> {
        if self.title.trim().is_empty() || self.code.trim().is_empty() {
            return Err(SnippetError::MissingFields);
        }
        Ok(())
    }
}

impl Snippet {
    /// Create a snippet from a draft, stamped with `now_ms`.
    pub fn create(draft: &Draft, now_ms: i64) -> Result<Snippet, SnippetError> {
        draft.validate()?;
        Ok(Snippet {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            language: draft.language.clone(),
            code: draft.code.clone(),
            created_at: now_ms,
        })
    }

    /// The text copied by the share button.
    pub fn share_text(&self) -> String {
        format!(
            "Check out this {lang} snippet: {title}\n\n```{lang}\n{code}\n```",
            lang = self.language,
            title = self.title,
            code = self.code
        )
    }

    /// Creation date as `Oct 19, 2026`, in the viewer's local time zone.
    pub fn created_label(&self) -> String {
        self.created_label_in(&Local)
    }

    pub fn created_label_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        DateTime::from_timestamp_millis(self.created_at)
            .map(|d| d.with_timezone(tz).format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

pub fn add(snippets: &[Snippet], draft: &Draft, now_ms: i64) -> Result<Vec<Snippet>, SnippetError> {
    let snippet = Snippet::create(draft, now_ms)?;
    let mut next = snippets.to_vec();
    next.push(snippet);
    Ok(next)
}

/// Replace title, language and code of the snippet with `id`; id and creation
/// time are kept.
pub fn update(snippets: &[Snippet], id: &str, draft: &Draft) -> Result<Vec<Snippet>, SnippetError> {
    draft.validate()?;
    if !snippets.iter().any(|s| s.id == id) {
        return Err(SnippetError::NotFound(id.to_string()));
    }
    Ok(snippets
        .iter()
        .map(|s| {
            if s.id == id {
                Snippet {
                    title: draft.title.trim().to_string(),
                    language: draft.language.clone(),
                    code: draft.code.clone(),
                    ..s.clone()
                }
            } else {
                s.clone()
            }
        })
        .collect())
}

pub fn remove(snippets: &[Snippet], id: &str) -> Vec<Snippet> {
    snippets.iter().filter(|s| s.id != id).cloned().collect()
}

pub fn load(store: &impl KeyValueStore) -> Vec<Snippet> {
    store.load(KEY_SNIPPETS).unwrap_or_default()
}

pub fn save(store: &impl KeyValueStore, snippets: &[Snippet]) -> Result<(), StoreError> {
    store.save(KEY_SNIPPETS, snippets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    use crate::storage::MemoryStore;

    // 2026-10-19T12:00:00Z
    const NOON: i64 = 1_792_411_200_000;

    fn draft(title: &str, code: &str) -> Draft {
        Draft {
            title: title.to_string(),
            code: code.to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn add_trims_title_and_requires_fields() {
        let list = add(&[], &draft("  hello  ", "console.log(1)"), NOON).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "hello");
        assert_eq!(list[0].language, "javascript");
        assert!(!list[0].id.is_empty());

        assert_eq!(add(&list, &draft("   ", "x"), NOON), Err(SnippetError::MissingFields));
        assert_eq!(add(&list, &draft("t", " \n"), NOON), Err(SnippetError::MissingFields));
    }

    #[test]
    fn ids_are_unique() {
        let list = add(&[], &draft("a", "1"), NOON).unwrap();
        let list = add(&list, &draft("b", "2"), NOON).unwrap();
        assert_ne!(list[0].id, list[1].id);
    }

    #[test]
    fn update_keeps_identity() {
        let list = add(&[], &draft("a", "1"), NOON).unwrap();
        let id = list[0].id.clone();
        let edited = Draft {
            language: "rust".to_string(),
            ..draft("b ", "fn main() {}")
        };
        let list = update(&list, &id, &edited).unwrap();
        assert_eq!(list[0].id, id);
        assert_eq!(list[0].title, "b");
        assert_eq!(list[0].language, "rust");
        assert_eq!(list[0].created_at, NOON);

        assert_eq!(
            update(&list, "missing", &edited),
            Err(SnippetError::NotFound("missing".to_string()))
        );
        assert_eq!(update(&list, &id, &draft("", "")), Err(SnippetError::MissingFields));
    }

    #[test]
    fn remove_filters_by_id() {
        let list = add(&[], &draft("a", "1"), NOON).unwrap();
        let list = add(&list, &draft("b", "2"), NOON).unwrap();
        let left = remove(&list, &list[0].id);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].title, "b");
        assert_eq!(remove(&left, "nope").len(), 1);
    }

    #[test]
    fn share_text_wraps_code_in_a_fence() {
        let rust = Draft {
            language: "rust".into(),
            ..draft("Hi", "fn x() {}")
        };
        let s = Snippet::create(&rust, NOON).unwrap();
        assert_eq!(
            s.share_text(),
            "Check out this rust snippet: Hi\n\n```rust\nfn x() {}\n```"
        );
    }

    #[test]
    fn created_label_is_short_date() {
        let s = Snippet::create(&draft("a", "1"), NOON).unwrap();
        assert_eq!(s.created_label_in(&Utc), "Oct 19, 2026");
    }

    #[test]
    fn created_label_follows_the_time_zone() {
        // 2026-10-20T03:00:00Z is still the evening of the 19th in New York
        let late = Snippet::create(&draft("a", "1"), NOON + 15 * 3_600_000).unwrap();
        assert_eq!(late.created_label_in(&Utc), "Oct 20, 2026");
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(late.created_label_in(&new_york), "Oct 19, 2026");
    }

    #[test]
    fn persists_as_camel_case_json() {
        let store = MemoryStore::new();
        let list = add(&[], &draft("a", "1"), NOON).unwrap();
        save(&store, &list).unwrap();
        assert!(store.get(KEY_SNIPPETS).unwrap().contains("\"createdAt\""));
        assert_eq!(load(&store), list);
        assert!(load(&MemoryStore::new()).is_empty());
    }
}
