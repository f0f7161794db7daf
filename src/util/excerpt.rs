use crate::interpreter::position::Position;

/// Renders the source text under `start..end` with a marker line beneath each
/// covered line.
///
/// The first column of the span is marked with `^` and every further covered
/// column with `~`, so a single character gets a lone caret while wider spans
/// read as `^~~~`. Lines after the first are marked with `~` only. The marker
/// is at least one column wide, which lets zero-width spans (such as the end
/// of input) still point somewhere. Tabs are shown as single spaces so the
/// markers stay aligned.
///
/// The result has no trailing newline.
///
/// # Example
/// ```
/// use quartz::{
///     interpreter::position::{Position, Source},
///     util::excerpt::render_excerpt,
/// };
///
/// let source = Source::new("<stdin>", "12 + abc");
/// let mut start = Position::start(source.clone());
/// for ch in "12 + ".chars() {
///     start.advance(ch);
/// }
/// let mut end = start.clone();
/// for ch in "abc".chars() {
///     end.advance(ch);
/// }
///
/// assert_eq!(render_excerpt(&source.text, &start, &end), "12 + abc\n     ^~~");
/// ```
#[must_use]
pub fn render_excerpt(text: &str, start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    // A span ending at column 0 stops right after a newline; the line it
    // lands on holds none of its characters.
    let (last_line, ends_mid_line) = if end.line > start.line && end.column == 0 {
        (end.line - 1, false)
    } else {
        (end.line.max(start.line), true)
    };

    let mut rendered = Vec::new();
    for line_number in start.line..=last_line {
        let line: String = lines.get(line_number)
                                .copied()
                                .unwrap_or_default()
                                .trim_end_matches('\r')
                                .chars()
                                .map(|ch| if ch == '\t' { ' ' } else { ch })
                                .collect();
        let width = line.chars().count();

        let first = line_number == start.line;
        let from = if first { start.column } else { 0 };
        let to = if line_number == last_line && ends_mid_line {
            end.column
        } else {
            width
        };
        let to = to.max(from + 1);

        let mut marker = " ".repeat(from);
        if first {
            marker.push('^');
            marker.push_str(&"~".repeat(to - from - 1));
        } else {
            marker.push_str(&"~".repeat(to - from));
        }

        rendered.push(line);
        rendered.push(marker);
    }

    rendered.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::position::Source;

    fn position_at(text: &str, index: usize) -> Position {
        let mut pos = Position::start(Source::new("t", text));
        for ch in text.chars().take(index) {
            pos.advance(ch);
        }
        pos
    }

    #[test]
    fn single_character_gets_one_caret() {
        let text = "1 @ 2";
        let rendered = render_excerpt(text, &position_at(text, 2), &position_at(text, 3));
        assert_eq!(rendered, "1 @ 2\n  ^");
    }

    #[test]
    fn zero_width_span_still_points_somewhere() {
        let text = "(1 + 2";
        let rendered = render_excerpt(text, &position_at(text, 6), &position_at(text, 6));
        assert_eq!(rendered, "(1 + 2\n      ^");
    }

    #[test]
    fn multi_line_span_marks_every_line() {
        let text = "ab\ncde\nf";
        let rendered = render_excerpt(text, &position_at(text, 1), &position_at(text, 5));
        assert_eq!(rendered, "ab\n ^\ncde\n~~");
    }

    #[test]
    fn span_ending_after_newline_stays_on_its_line() {
        let text = "ab\ncd";
        let rendered = render_excerpt(text, &position_at(text, 2), &position_at(text, 3));
        assert_eq!(rendered, "ab\n  ^");
    }

    #[test]
    fn tabs_render_as_spaces() {
        let text = "\t7 / 0";
        let rendered = render_excerpt(text, &position_at(text, 5), &position_at(text, 6));
        assert_eq!(rendered, " 7 / 0\n     ^");
    }
}
