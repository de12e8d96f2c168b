//! Replacement templates.
//!
//! Both the `$` family (`$&`, `` $` ``, `$'`, `$1`..`$99`, `$<name>`, `$$`)
//! and the sed-like backslash family (`&`, `\1`..`\9`, `` \` ``, `\'`, `\&`,
//! `\\`) are understood. Anything that does not form a valid token is copied
//! through unchanged.

use regress::Match;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Whole,
    Before,
    After,
    Group(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse `src` for a pattern whose capturing groups are `names`, in
    /// declaration order (`None` for unnamed groups).
    ///
    /// The group count decides whether `$12` means group twelve or group one
    /// followed by a literal `2`, and whether `$7` is a reference at all.
    /// `$<name>` is resolved to its group number here.
    pub fn parse(src: &str, names: &[Option<String>]) -> Template {
        let chars: Vec<char> = src.chars().collect();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            match token(&chars[i..], names) {
                Some((Piece::Literal(s), used)) => {
                    literal.push_str(&s);
                    i += used;
                }
                Some((piece, used)) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(piece);
                    i += used;
                }
                None => {
                    literal.push(chars[i]);
                    i += 1;
                }
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Template { pieces }
    }

    /// Append the expansion for one match to `out`. `subject` must be the
    /// text `found` was matched against.
    pub fn expand(&self, subject: &str, found: &Match, out: &mut String) {
        let whole = found.range.clone();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Whole => out.push_str(&subject[whole.clone()]),
                Piece::Before => out.push_str(&subject[..whole.start]),
                Piece::After => out.push_str(&subject[whole.end..]),
                Piece::Group(n) => {
                    if let Some(Some(range)) = found.captures.get(n - 1) {
                        out.push_str(&subject[range.clone()]);
                    }
                }
            }
        }
    }
}

/// Recognise a token at the start of `rest`, returning it with the number of
/// characters it spans.
fn token(rest: &[char], names: &[Option<String>]) -> Option<(Piece, usize)> {
    let group_count = names.len();
    let has_names = names.iter().any(Option::is_some);
    let next = rest.get(1).copied();
    match (rest[0], next) {
        ('$', Some('$')) => Some((Piece::Literal("$".into()), 2)),
        ('$', Some('&')) => Some((Piece::Whole, 2)),
        ('$', Some('`')) => Some((Piece::Before, 2)),
        ('$', Some('\'')) => Some((Piece::After, 2)),
        ('$', Some(d)) if d.is_ascii_digit() => {
            dollar_group(&rest[1..], group_count).map(|(n, used)| (Piece::Group(n), used + 1))
        }
        ('$', Some('<')) if has_names => {
            let close = rest[2..].iter().position(|&c| c == '>')?;
            let name: String = rest[2..2 + close].iter().collect();
            // an unknown name expands to nothing
            let piece = match names.iter().position(|n| n.as_deref() == Some(name.as_str())) {
                Some(i) => Piece::Group(i + 1),
                None => Piece::Literal(String::new()),
            };
            Some((piece, close + 3))
        }
        ('&', _) => Some((Piece::Whole, 1)),
        ('\\', Some('&')) => Some((Piece::Literal("&".into()), 2)),
        ('\\', Some('\\')) => Some((Piece::Literal("\\".into()), 2)),
        ('\\', Some('`')) => Some((Piece::Before, 2)),
        ('\\', Some('\'')) => Some((Piece::After, 2)),
        ('\\', Some(d @ '1'..='9')) => {
            let n = d.to_digit(10)? as usize;
            (n <= group_count).then_some((Piece::Group(n), 2))
        }
        _ => None,
    }
}

fn dollar_group(digits: &[char], group_count: usize) -> Option<(usize, usize)> {
    let first = digits.first()?.to_digit(10)? as usize;
    if let Some(second) = digits.get(1).and_then(|c| c.to_digit(10)) {
        let two = first * 10 + second as usize;
        if (1..=group_count).contains(&two) {
            return Some((two, 2));
        }
    }
    (1..=group_count).contains(&first).then_some((first, 1))
}

#[cfg(test)]
mod tests {
    use crate::regex_tool::{apply_replacement, Flags, Pattern};

    fn replace_all(pattern: &str, subject: &str, template: &str) -> String {
        apply_replacement(subject, pattern, Flags::GLOBAL, template).unwrap()
    }

    #[test]
    fn ampersand_wraps_each_match() {
        assert_eq!(replace_all(r"\s+", "a  b c", "[&]"), "a[  ]b[ ]c");
        assert_eq!(replace_all(r"\s+", "a  b c", "[$&]"), "a[  ]b[ ]c");
        assert_eq!(replace_all(r"\s+", "a  b c", r"[\&]"), "a[&]b[&]c");
    }

    #[test]
    fn whole_match_template_is_identity() {
        for subject in ["", "hello", "x y\nz", "日本語"] {
            assert_eq!(replace_all(r"[\s\S]*", subject, "&"), subject);
            assert_eq!(replace_all(r"[\s\S]*", subject, "$&"), subject);
        }
    }

    #[test]
    fn non_global_replaces_first_only() {
        let out = apply_replacement("a1b2", r"\d", Flags::default(), "#").unwrap();
        assert_eq!(out, "a#b2");
    }

    #[test]
    fn numbered_groups() {
        assert_eq!(replace_all(r"(\w+)@(\w+)", "me@host", "$2 at $1"), "host at me");
        assert_eq!(replace_all(r"(\w+)@(\w+)", "me@host", r"\2 at \1"), "host at me");
        // reference beyond the group count stays literal
        assert_eq!(replace_all(r"(\w)", "a", "$5"), "$5");
        assert_eq!(replace_all(r"(\w)", "a", r"\5"), r"\5");
        assert_eq!(replace_all(r"(\w)", "a", "$0"), "$0");
    }

    #[test]
    fn two_digit_groups_prefer_existing_group() {
        assert_eq!(replace_all(r"(a)", "a", "$10"), "a0");
        let ten = "(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)";
        assert_eq!(replace_all(ten, "abcdefghij", "$10$1"), "ja");
    }

    #[test]
    fn context_tokens() {
        assert_eq!(replace_all("b", "abc", "[$`|$']"), "a[a|c]c");
        assert_eq!(replace_all("b", "abc", r"[\`|\']"), "a[a|c]c");
    }

    #[test]
    fn non_participating_group_expands_to_nothing() {
        assert_eq!(replace_all("(a)|(b)", "ab", "<$1$2>"), "<a><b>");
    }

    #[test]
    fn named_groups() {
        let p = r"(?<y>\d{4})-(?<m>\d{2})";
        assert_eq!(replace_all(p, "2024-05", "$<m>/$<y>"), "05/2024");
        assert_eq!(replace_all(p, "2024-05", "$<nope>!"), "!");
        assert_eq!(replace_all(p, "2024-05", "$<m"), "$<m");
        // without named groups `$<` is plain text
        assert_eq!(replace_all(r"(\d)", "1", "$<x>"), "$<x>");
    }

    #[test]
    fn escapes_and_stray_tokens() {
        assert_eq!(replace_all("a", "a", "$$"), "$");
        assert_eq!(replace_all("a", "a", r"\\"), r"\");
        assert_eq!(replace_all("a", "a", "$x\\q$"), "$x\\q$");
    }

    #[test]
    fn zero_length_replacements() {
        assert_eq!(replace_all("x*", "abc", "-"), "-a-b-c-");
        assert_eq!(replace_all("x*", "xxa", "-"), "--a-");
    }

    #[test]
    fn pattern_errors_surface() {
        assert!(apply_replacement("abc", "(", Flags::GLOBAL, "&").is_err());
        let p = Pattern::compile("b", Flags::GLOBAL).unwrap();
        assert_eq!(p.replace("abba", "&&"), "abbbba");
    }

    #[test]
    fn groups_inside_lookaround_count() {
        assert_eq!(replace_all(r"(\d)(?=(px))", "1px", "$1$2!"), "1px!px");
        assert_eq!(replace_all(r"(a)\1", "aab", "[$1]"), "[a]b");
    }
}
