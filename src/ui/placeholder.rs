// SPDX-License-Identifier: MPL-2.0
//! Generated artwork for gallery items that have no image yet.
//!
//! The graphic is a framed landscape pictogram with the item caption under
//! it, rendered as SVG so it scales cleanly in both the carousel and the
//! lightbox.

use iced::widget::svg;
use iced::Size;

/// Intrinsic size of the generated graphic (4:3).
pub const NATURAL_SIZE: Size = Size::new(800.0, 600.0);

const BACKGROUND: &str = "#d9dde3";
const FOREGROUND: &str = "#5b6470";
const CAPTION_MAX_CHARS: usize = 48;

/// SVG document for a placeholder carrying `caption`.
#[must_use]
pub fn svg_markup(caption: &str) -> String {
    let caption = escape(&truncate(caption.trim(), CAPTION_MAX_CHARS));
    let (w, h) = (NATURAL_SIZE.width, NATURAL_SIZE.height);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect width="{w}" height="{h}" fill="{BACKGROUND}"/>
  <rect x="300" y="170" width="200" height="150" rx="12" fill="none" stroke="{FOREGROUND}" stroke-width="10"/>
  <circle cx="350" cy="215" r="18" fill="{FOREGROUND}"/>
  <path d="M310 310 L375 250 L420 290 L450 265 L490 310 Z" fill="{FOREGROUND}"/>
  <text x="400" y="410" font-family="sans-serif" font-size="34" text-anchor="middle" fill="{FOREGROUND}">{caption}</text>
</svg>"##
    )
}

/// Ready-to-draw handle for a placeholder carrying `caption`.
#[must_use]
pub fn handle(caption: &str) -> svg::Handle {
    svg::Handle::from_memory(svg_markup(caption).into_bytes())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_contains_caption() {
        let svg = svg_markup("Harbour workshop");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Harbour workshop</text>"));
    }

    #[test]
    fn caption_is_escaped() {
        let svg = svg_markup("Fish & <chips>");
        assert!(svg.contains("Fish &amp; &lt;chips&gt;"));
        assert!(!svg.contains("<chips>"));
    }

    #[test]
    fn long_captions_are_shortened() {
        let caption = "x".repeat(CAPTION_MAX_CHARS * 2);
        let svg = svg_markup(&caption);
        assert!(!svg.contains(&caption));
        assert!(svg.contains('…'));
    }
}
