//! Regex tester core: matching, replacement and highlighting.

mod engine;
mod flags;
mod highlight;
mod template;

use thiserror::Error;

pub use engine::{apply_replacement, find_matches, Hit, MatchRecord, Pattern, Scan};
pub use flags::Flags;
pub use highlight::{highlight_segments, render_highlighted, Segment, MARK_CLOSE, MARK_OPEN};
pub use template::Template;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Regex error: {0}")]
    Syntax(String),
    #[error("Invalid flag '{0}' (supported: d, g, i, m, s, u, v, y)")]
    UnknownFlag(char),
    #[error("Flag '{0}' is repeated")]
    DuplicateFlag(char),
    #[error("Flags '{0}' and '{1}' cannot be combined")]
    ConflictingFlags(char, char),
}

/// Everything the tester shows for one set of inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub matches: Vec<MatchRecord>,
    pub replaced: String,
    pub group_names: Vec<Option<String>>,
    pub error: Option<PatternError>,
}

impl Evaluation {
    fn failed(error: PatternError) -> Self {
        Evaluation {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn segments<'a>(&self, subject: &'a str) -> Vec<Segment<'a>> {
        highlight_segments(subject, &self.matches)
    }
}

/// Run match, replace and highlight inputs through one compile.
///
/// An empty pattern yields nothing. A bad pattern or flag string yields no
/// matches, an empty replacement and the error.
pub fn evaluate(pattern: &str, flags: &str, subject: &str, template: &str) -> Evaluation {
    if pattern.is_empty() {
        return Evaluation::default();
    }
    let compiled = match Flags::parse(flags).and_then(|f| Pattern::compile(pattern, f)) {
        Ok(p) => p,
        Err(e) => return Evaluation::failed(e),
    };
    Evaluation {
        matches: compiled.find_matches(subject),
        replaced: compiled.replace(subject, template),
        group_names: compiled.group_names(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_all_outputs_together() {
        let ev = evaluate(r"(\d)+", "g", "a12b3", "<$1>");
        assert_eq!(ev.error, None);
        assert_eq!(ev.matches.len(), 2);
        assert_eq!(ev.replaced, "a<2>b<3>");
        assert_eq!(ev.group_names, vec![None]);
        assert_eq!(
            ev.segments("a12b3"),
            vec![
                Segment::Plain("a"),
                Segment::Marked("12"),
                Segment::Plain("b"),
                Segment::Marked("3"),
            ]
        );
    }

    #[test]
    fn empty_pattern_shows_subject_as_is() {
        let ev = evaluate("", "g", "text", "$&");
        assert_eq!(ev, Evaluation::default());
        assert_eq!(ev.segments("text"), vec![Segment::Plain("text")]);
    }

    #[test]
    fn bad_pattern_clears_outputs() {
        let ev = evaluate("(", "g", "text", "$&");
        assert!(matches!(ev.error, Some(PatternError::Syntax(_))));
        assert!(ev.matches.is_empty());
        assert!(ev.replaced.is_empty());

        let ev = evaluate("a", "gq", "a", "$&");
        assert_eq!(ev.error, Some(PatternError::UnknownFlag('q')));
        assert!(ev.matches.is_empty());
    }
}
