use regress::{Match, Regex};

use super::template::Template;
use super::{Flags, PatternError};

/// One match found in the subject.
///
/// `offset` counts characters, not bytes, so it lines up with what the user
/// sees in the text box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub offset: usize,
    pub text: String,
    /// One slot per capturing group; `None` when the group did not take part
    /// in this match.
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character index one past the last matched character, `None` if that
    /// does not fit in a `usize`.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.char_len())
    }
}

/// A compiled ECMAScript pattern together with the flags that drive scanning.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    flags: Flags,
    names: Vec<Option<String>>,
}

impl Pattern {
    pub fn compile(source: &str, flags: Flags) -> Result<Pattern, PatternError> {
        let regex = Regex::with_flags(source, flags.engine_letters().as_str())
            .map_err(|e| PatternError::Syntax(e.to_string()))?;
        Ok(Pattern {
            regex,
            flags,
            names: capture_names(source),
        })
    }

    /// Names of the capturing groups, `None` for unnamed ones.
    pub fn group_names(&self) -> Vec<Option<String>> {
        self.names.clone()
    }

    pub fn scan<'p, 'h>(&'p self, subject: &'h str) -> Scan<'p, 'h> {
        Scan {
            pattern: self,
            subject,
            pos: 0,
            counted_bytes: 0,
            counted_chars: 0,
            done: false,
        }
    }

    pub fn find_matches(&self, subject: &str) -> Vec<MatchRecord> {
        self.scan(subject).map(|hit| hit.to_record(subject)).collect()
    }

    /// Substitute the first match, or every match when the pattern is global.
    pub fn replace(&self, subject: &str, template: &str) -> String {
        let template = Template::parse(template, &self.names);
        let mut out = String::with_capacity(subject.len());
        let mut cursor = 0usize;

        for hit in self.scan(subject) {
            let whole = hit.found.range.clone();
            out.push_str(&subject[cursor..whole.start]);
            template.expand(subject, &hit.found, &mut out);
            cursor = whole.end;
        }

        out.push_str(&subject[cursor..]);
        out
    }
}

/// Capturing groups of an ECMAScript pattern in declaration order, with
/// their names. Only called on sources the engine has already accepted.
fn capture_names(source: &str) -> Vec<Option<String>> {
    let mut names = Vec::new();
    let mut chars = source.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => {
                if chars.peek() != Some(&'?') {
                    names.push(None);
                    continue;
                }
                // `(?<name>` captures; `(?:`, `(?=`, `(?!`, `(?<=`, `(?<!` do not
                let mut ahead = chars.clone();
                ahead.next();
                if ahead.next() == Some('<') && !matches!(ahead.peek(), Some('=') | Some('!')) {
                    names.push(Some(ahead.take_while(|&c| c != '>').collect()));
                }
            }
            _ => {}
        }
    }
    names
}

/// A single hit produced by [`Scan`]. Ranges in `found` are byte ranges into
/// the subject.
#[derive(Debug)]
pub struct Hit {
    pub offset: usize,
    pub found: Match,
}

impl Hit {
    pub fn to_record(&self, subject: &str) -> MatchRecord {
        MatchRecord {
            offset: self.offset,
            text: subject[self.found.range.clone()].to_string(),
            groups: self
                .found
                .captures
                .iter()
                .map(|g| g.clone().map(|r| subject[r].to_string()))
                .collect(),
        }
    }
}

/// Left-to-right scan over a subject.
///
/// Each search resumes where the previous match ended. After an empty match
/// the scan steps one whole character forward, so it always terminates and
/// never lands inside a multi-byte character.
#[derive(Debug)]
pub struct Scan<'p, 'h> {
    pattern: &'p Pattern,
    subject: &'h str,
    pos: usize,
    counted_bytes: usize,
    counted_chars: usize,
    done: bool,
}

impl Scan<'_, '_> {
    fn char_offset(&mut self, byte: usize) -> usize {
        // matches only move forward, so counting resumes where it left off
        self.counted_chars += self.subject[self.counted_bytes..byte].chars().count();
        self.counted_bytes = byte;
        self.counted_chars
    }
}

impl Iterator for Scan<'_, '_> {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        if self.done || self.pos > self.subject.len() {
            return None;
        }
        let flags = self.pattern.flags;

        let Some(found) = self.pattern.regex.find_from(self.subject, self.pos).next() else {
            self.done = true;
            return None;
        };
        let (start, end) = (found.range.start, found.range.end);
        if flags.sticky && start != self.pos {
            self.done = true;
            return None;
        }

        let offset = self.char_offset(start);

        if !flags.global {
            self.done = true;
        } else if start == end {
            match self.subject[end..].chars().next() {
                Some(c) => self.pos = end + c.len_utf8(),
                None => self.done = true,
            }
        } else {
            self.pos = end;
        }

        Some(Hit { offset, found })
    }
}

/// Compile `pattern` with `flags` and collect its matches in `subject`.
pub fn find_matches(
    pattern: &str,
    flags: Flags,
    subject: &str,
) -> Result<Vec<MatchRecord>, PatternError> {
    Ok(Pattern::compile(pattern, flags)?.find_matches(subject))
}

/// Compile `pattern` with `flags` and substitute `template` for its matches.
pub fn apply_replacement(
    subject: &str,
    pattern: &str,
    flags: Flags,
    template: &str,
) -> Result<String, PatternError> {
    Ok(Pattern::compile(pattern, flags)?.replace(subject, template))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(records: &[MatchRecord]) -> Vec<(usize, &str)> {
        records.iter().map(|r| (r.offset, r.text.as_str())).collect()
    }

    #[test]
    fn global_digits() {
        let found = find_matches(r"\d+", Flags::GLOBAL, "a1b22c333").unwrap();
        assert_eq!(offsets(&found), vec![(1, "1"), (3, "22"), (6, "333")]);
    }

    #[test]
    fn non_global_returns_leftmost_with_groups() {
        let found = find_matches(r"(\w)(\w)", Flags::default(), "ab cd").unwrap();
        assert_eq!(
            found,
            vec![MatchRecord {
                offset: 0,
                text: "ab".to_string(),
                groups: vec![Some("a".to_string()), Some("b".to_string())],
            }]
        );

        let found = find_matches(r"\d", Flags::default(), "no digits").unwrap();
        assert!(found.is_empty());

        let found = find_matches(r"c\w", Flags::default(), "ab cd ce").unwrap();
        assert_eq!(offsets(&found), vec![(3, "cd")]);
    }

    #[test]
    fn zero_length_matches_terminate() {
        let found = find_matches("x*", Flags::GLOBAL, "aaa").unwrap();
        assert_eq!(offsets(&found), vec![(0, ""), (1, ""), (2, ""), (3, "")]);

        let found = find_matches("", Flags::GLOBAL, "").unwrap();
        assert_eq!(offsets(&found), vec![(0, "")]);
    }

    #[test]
    fn empty_match_right_after_a_non_empty_one() {
        let found = find_matches("x*", Flags::GLOBAL, "xxa").unwrap();
        assert_eq!(offsets(&found), vec![(0, "xx"), (2, ""), (3, "")]);
    }

    #[test]
    fn offsets_count_characters() {
        let found = find_matches(r"\d", Flags::GLOBAL, "é1ü2").unwrap();
        assert_eq!(offsets(&found), vec![(1, "1"), (3, "2")]);

        // stepping past an empty match must not split a multi-byte character
        let found = find_matches("x*", Flags::GLOBAL, "日本").unwrap();
        assert_eq!(offsets(&found), vec![(0, ""), (1, ""), (2, "")]);
    }

    #[test]
    fn global_matches_are_ordered_and_disjoint() {
        let found = find_matches(r"a*|b", Flags::GLOBAL, "aabab b").unwrap();
        for pair in found.windows(2) {
            assert!(Some(pair[1].offset) >= pair[0].end());
            assert!(pair[1].offset > pair[0].offset || pair[0].text.is_empty());
        }
    }

    #[test]
    fn non_participating_group_differs_from_empty_capture() {
        let found = find_matches("(a)|(b)", Flags::default(), "b").unwrap();
        assert_eq!(found[0].groups, vec![None, Some("b".to_string())]);

        let found = find_matches("(a*)b", Flags::default(), "b").unwrap();
        assert_eq!(found[0].groups, vec![Some(String::new())]);
    }

    #[test]
    fn flags_change_matching() {
        let found = find_matches("abc", Flags::parse("gi").unwrap(), "ABC abc").unwrap();
        assert_eq!(found.len(), 2);

        let multiline = Flags::parse("gm").unwrap();
        let found = find_matches(r"^\w", multiline, "ab\ncd").unwrap();
        assert_eq!(offsets(&found), vec![(0, "a"), (3, "c")]);

        assert!(find_matches("a.b", Flags::default(), "a\nb").unwrap().is_empty());
        let dot_all = Flags::parse("s").unwrap();
        assert_eq!(find_matches("a.b", dot_all, "a\nb").unwrap().len(), 1);
    }

    #[test]
    fn sticky_matches_only_at_scan_position() {
        let sticky_global = Flags::parse("gy").unwrap();
        let found = find_matches(r"\d", sticky_global, "12a3").unwrap();
        assert_eq!(offsets(&found), vec![(0, "1"), (1, "2")]);

        let sticky = Flags::parse("y").unwrap();
        assert!(find_matches(r"\d", sticky, "a1").unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = find_matches("(", Flags::GLOBAL, "anything").unwrap_err();
        assert!(matches!(err, PatternError::Syntax(_)));
        assert!(err.to_string().starts_with("Regex error"));
    }

    #[test]
    fn repeated_runs_agree() {
        let a = find_matches(r"(\w+)@(\w+)", Flags::GLOBAL, "a@b c@d").unwrap();
        let b = find_matches(r"(\w+)@(\w+)", Flags::GLOBAL, "a@b c@d").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn group_names_follow_declaration_order() {
        let p = Pattern::compile(r"(?<year>\d{4})-(\d{2})", Flags::default()).unwrap();
        assert_eq!(p.group_names(), vec![Some("year".to_string()), None]);
        let p = Pattern::compile("(a)", Flags::default()).unwrap();
        assert_eq!(p.group_names(), vec![None]);
    }

    #[test]
    fn lookaround_assertions() {
        let found = find_matches(r"\d(?=px)", Flags::GLOBAL, "1px 2em 3px").unwrap();
        assert_eq!(offsets(&found), vec![(0, "1"), (8, "3")]);

        let found = find_matches(r"\d(?!px)", Flags::GLOBAL, "1px 2em").unwrap();
        assert_eq!(offsets(&found), vec![(4, "2")]);

        let found = find_matches(r"(?<=\$)\d+", Flags::GLOBAL, "cost $15 or 20").unwrap();
        assert_eq!(offsets(&found), vec![(6, "15")]);
    }

    #[test]
    fn backreferences() {
        let found = find_matches(r"(a)\1", Flags::GLOBAL, "a aa aaa").unwrap();
        assert_eq!(offsets(&found), vec![(2, "aa"), (5, "aa")]);

        let found = find_matches(r"(?<ch>\w)\k<ch>", Flags::GLOBAL, "Miss Piggy").unwrap();
        assert_eq!(offsets(&found), vec![(2, "ss"), (7, "gg")]);
    }

    #[test]
    fn word_and_digit_classes_are_ascii() {
        let found = find_matches(r"\w+", Flags::GLOBAL, "héllo").unwrap();
        assert_eq!(offsets(&found), vec![(0, "h"), (2, "llo")]);

        assert!(find_matches(r"\d", Flags::GLOBAL, "٣").unwrap().is_empty());
    }

    #[test]
    fn capture_names_skip_non_capturing_groups() {
        assert_eq!(
            capture_names(r"(?:a)(?=b)(?!c)(?<=d)(?<!e)(f)(?<g>h)"),
            vec![None, Some("g".to_string())]
        );
        // escaped and bracketed parens are not groups
        assert_eq!(capture_names(r"\(([(])"), vec![None]);
        assert_eq!(capture_names(r"[\]()](x)"), vec![None]);
    }
}
