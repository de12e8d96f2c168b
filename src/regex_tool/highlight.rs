use super::MatchRecord;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

/// Split `subject` into plain and matched pieces.
///
/// Matches are sorted by offset first. A match that starts inside the
/// previous one, repeats it, or runs past the end of the subject (or past
/// `usize::MAX`) is dropped.
pub fn highlight_segments<'a>(subject: &'a str, matches: &[MatchRecord]) -> Vec<Segment<'a>> {
    // byte position of every character boundary, including the end
    let bounds: Vec<usize> = subject
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(subject.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let mut spans: Vec<(usize, usize)> = matches
        .iter()
        .filter_map(|m| m.end().map(|end| (m.offset, end)))
        .collect();
    spans.sort_by_key(|&(start, _)| start);

    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0usize;
    let mut last: Option<(usize, usize)> = None;

    for (start, end) in spans {
        if end > char_len {
            continue;
        }
        if let Some(prev) = last {
            if start < prev.1 || (start, end) == prev {
                continue;
            }
        }
        if start > cursor {
            out.push(Segment::Plain(&subject[bounds[cursor]..bounds[start]]));
        }
        out.push(Segment::Marked(&subject[bounds[start]..bounds[end]]));
        cursor = end;
        last = Some((start, end));
    }

    if cursor < char_len {
        out.push(Segment::Plain(&subject[bounds[cursor]..]));
    }
    out
}

/// Wrap every match in `<mark>` … `</mark>`.
///
/// The subject is copied as-is; escaping markup characters is left to
/// whoever embeds the result.
pub fn render_highlighted(subject: &str, matches: &[MatchRecord]) -> String {
    let mut out = String::with_capacity(subject.len() + matches.len() * 13);
    for segment in highlight_segments(subject, matches) {
        match segment {
            Segment::Plain(s) => out.push_str(s),
            Segment::Marked(s) => {
                out.push_str(MARK_OPEN);
                out.push_str(s);
                out.push_str(MARK_CLOSE);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex_tool::{find_matches, Flags};

    fn record(offset: usize, text: &str) -> MatchRecord {
        MatchRecord {
            offset,
            text: text.to_string(),
            groups: vec![],
        }
    }

    #[test]
    fn wraps_engine_matches() {
        let subject = "a1b22c333";
        let found = find_matches(r"\d+", Flags::GLOBAL, subject).unwrap();
        assert_eq!(
            render_highlighted(subject, &found),
            "a<mark>1</mark>b<mark>22</mark>c<mark>333</mark>"
        );
    }

    #[test]
    fn no_matches_leaves_subject_untouched() {
        assert_eq!(render_highlighted("plain text", &[]), "plain text");
        assert_eq!(highlight_segments("plain", &[]), vec![Segment::Plain("plain")]);
        assert!(highlight_segments("", &[]).is_empty());
    }

    #[test]
    fn sorts_out_of_order_matches() {
        let matches = [record(4, "ef"), record(0, "ab")];
        assert_eq!(render_highlighted("abcdef", &matches), "<mark>ab</mark>cd<mark>ef</mark>");
    }

    #[test]
    fn drops_overlapping_and_out_of_range_spans() {
        let matches = [record(0, "abc"), record(2, "cd"), record(5, "fgh")];
        assert_eq!(render_highlighted("abcdef", &matches), "<mark>abc</mark>def");

        let matches = [record(1, "b"), record(1, "b")];
        assert_eq!(render_highlighted("abc", &matches), "a<mark>b</mark>c");
    }

    #[test]
    fn offsets_are_characters() {
        let subject = "é1ü2";
        let found = find_matches(r"\d", Flags::GLOBAL, subject).unwrap();
        assert_eq!(
            highlight_segments(subject, &found),
            vec![
                Segment::Plain("é"),
                Segment::Marked("1"),
                Segment::Plain("ü"),
                Segment::Marked("2"),
            ]
        );
    }

    #[test]
    fn empty_matches_are_marked_in_place() {
        let found = find_matches("^", Flags::default(), "ab").unwrap();
        assert_eq!(render_highlighted("ab", &found), "<mark></mark>ab");
    }

    #[test]
    fn markup_in_subject_is_not_escaped() {
        let subject = "<b>x</b>";
        let found = find_matches("x", Flags::GLOBAL, subject).unwrap();
        assert_eq!(render_highlighted(subject, &found), "<b><mark>x</mark></b>");
    }

    #[test]
    fn overflowing_offsets_are_dropped() {
        let matches = [record(usize::MAX, "a"), record(1, "b")];
        assert_eq!(render_highlighted("abc", &matches), "a<mark>b</mark>c");
        assert_eq!(
            highlight_segments("abc", &[record(usize::MAX - 1, "xyz")]),
            vec![Segment::Plain("abc")]
        );
    }
}
