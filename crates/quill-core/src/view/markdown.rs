//! Text extraction from markdown post bodies.

const SENTENCE_SEPARATOR: &str = ". ";

/// The text before the first sentence separator, or the whole body if there
/// is none.
pub fn description(body: &str) -> &str {
    body.split_once(SENTENCE_SEPARATOR)
        .map_or(body, |(head, _)| head)
}

/// URL of the first markdown image (`![alt](url)`) in `body`.
///
/// Matching is non-greedy and never crosses a line break: for the earliest
/// `![` that completes, the capture runs from the first `](` after it to the
/// first `)` after that, all on the same line. The alt text and the URL may
/// both be empty.
pub fn preview_image_url(body: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(offset) = body[search_from..].find("![") {
        let start = search_from + offset;
        let alt_start = start + 2;
        let terminator = body[alt_start..]
            .char_indices()
            .find(|&(_, c)| is_line_terminator(c));
        let line_end = terminator.map_or(body.len(), |(i, _)| alt_start + i);
        let line = &body[alt_start..line_end];

        if let Some(open) = line.find("](") {
            let url_start = open + 2;
            if let Some(close) = line[url_start..].find(')') {
                return Some(&line[url_start..url_start + close]);
            }
        }

        // A later `![` on this line would hit the same `](` and `)` positions.
        match terminator {
            Some((_, c)) => search_from = line_end + c.len_utf8(),
            None => break,
        }
    }

    None
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
