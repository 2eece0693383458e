//! Inline color markup for logo text.
//!
//! Supports `<color=#RRGGBB>`, `<color=#RRGGBBAA>`, `<color=#RGB>`,
//! `<color="name">` and `</color>`. Tags nest. Anything else that looks
//! like a tag is kept as literal text.

use bevy::prelude::*;

/// A run of text with one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text.
    pub text: String,
    /// Color set by markup, or `None` to use the object's base color.
    pub color: Option<Color>,
}

/// Check if text contains any color tags.
pub fn has_markup(text: &str) -> bool {
    text.contains("<color=") || text.contains("</color>")
}

/// Parse a named or hex color value.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use bevy_menu_text::core::parse_color;
///
/// assert_eq!(parse_color("#FF0000"), Some(Color::srgb_u8(255, 0, 0)));
/// assert_eq!(parse_color("\"white\""), Some(Color::WHITE));
/// assert_eq!(parse_color("nope"), None);
/// ```
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim().trim_matches(|c| c == '"' || c == '\'');

    if value.starts_with('#') {
        return Srgba::hex(value).ok().map(Color::from);
    }

    let color = match value.to_ascii_lowercase().as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::srgb(1.0, 0.0, 0.0),
        "green" => Color::srgb(0.0, 1.0, 0.0),
        "blue" => Color::srgb(0.0, 0.0, 1.0),
        "yellow" => Color::srgb(1.0, 0.92, 0.016),
        "orange" => Color::srgb(1.0, 0.5, 0.0),
        "purple" => Color::srgb(0.627, 0.125, 0.941),
        _ => return None,
    };
    Some(color)
}

/// Split text into colored spans.
///
/// Adjacent text with the same color forms one span; empty spans are
/// dropped.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use bevy_menu_text::core::parse_markup;
///
/// let spans = parse_markup("<color=#FF0000>BEAT</color> it");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].text, "BEAT");
/// assert_eq!(spans[0].color, Some(Color::srgb_u8(255, 0, 0)));
/// assert_eq!(spans[1].text, " it");
/// assert_eq!(spans[1].color, None);
/// ```
pub fn parse_markup(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut stack: Vec<Color> = Vec::new();
    let mut current = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        current.push_str(&rest[..open]);
        let after = &rest[open..];

        let Some(close) = after.find('>') else {
            // Unclosed bracket, rest is literal
            current.push_str(after);
            rest = "";
            break;
        };

        let tag = &after[1..close];
        if let Some(value) = tag.strip_prefix("color=") {
            if let Some(color) = parse_color(value) {
                flush(&mut spans, &mut current, stack.last().copied());
                stack.push(color);
                rest = &after[close + 1..];
                continue;
            }
        } else if tag == "/color" {
            flush(&mut spans, &mut current, stack.last().copied());
            stack.pop();
            rest = &after[close + 1..];
            continue;
        }

        // Not a tag we understand; keep the '<' and carry on after it
        current.push('<');
        rest = &after[1..];
    }

    current.push_str(rest);
    flush(&mut spans, &mut current, stack.last().copied());
    spans
}

fn flush(spans: &mut Vec<Span>, current: &mut String, color: Option<Color>) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    match spans.last_mut() {
        Some(last) if last.color == color => last.text.push_str(&text),
        _ => spans.push(Span { text, color }),
    }
}
