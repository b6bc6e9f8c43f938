//! Text and SVG output
//!
//! Both renderers are pure formatting over already-quantized rows.

use std::borrow::Cow;
use std::fmt::Write;

use crate::ascii::AsciiArt;
use crate::config::SvgLayout;

/// Rows joined by `\n`, characters untouched
pub fn render_text(art: &AsciiArt) -> String {
    art.rows().join("\n")
}

/// One `<tspan>` per row, joined by `\n`
///
/// Row `i` sits at `y = y_start + i * line_height`. An empty art renders to
/// an empty string.
///
/// # Example
/// ```
/// use ascii_banner::ascii::AsciiArt;
/// use ascii_banner::config::SvgLayout;
/// use ascii_banner::render::render_svg;
///
/// let art = AsciiArt::from_rows(["@<", ". "]);
/// let layout = SvgLayout { x: 5, y_start: 10, line_height: 20 };
/// assert_eq!(
///     render_svg(&art, &layout),
///     "<tspan x=\"5\" y=\"10\">@&lt;</tspan>\n<tspan x=\"5\" y=\"30\">. </tspan>"
/// );
/// ```
pub fn render_svg(art: &AsciiArt, layout: &SvgLayout) -> String {
    let mut out = String::new();

    for (i, row) in art.rows().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let y = row_y(layout, i);
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "<tspan x=\"{}\" y=\"{}\">{}</tspan>",
            layout.x,
            y,
            escape_markup(row)
        );
    }

    out
}

/// Baseline of row `index`, widened so tall layouts cannot overflow
pub fn row_y(layout: &SvgLayout, index: usize) -> i64 {
    i64::from(layout.y_start) + index as i64 * i64::from(layout.line_height)
}

/// Escape `&`, `<` and `>` for use as XML character data
///
/// Single pass, so the `&` of an inserted entity is never escaped again:
/// `"&<>"` becomes `"&amp;&lt;&gt;"`. Rows without reserved characters are
/// borrowed unchanged.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
