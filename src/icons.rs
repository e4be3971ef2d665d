//! Icon tags carried by content documents.
//!
//! Documents name icons by tag (`"Shield"`, `"Cpu"`, ...). The mapping to
//! something drawable lives here once; pages only pick a fallback.

use std::collections::HashMap;

/// Renders an icon tag.
pub trait IconRenderer {
    /// Glyph for `tag`, or `None` if the tag is unknown.
    fn render(&self, tag: &str) -> Option<&str>;

    /// Glyph for `tag`, falling back to the glyph of `fallback`.
    fn render_or<'a>(&'a self, tag: &str, fallback: &str) -> &'a str {
        self.render(tag)
            .or_else(|| self.render(fallback))
            .unwrap_or(UNKNOWN_GLYPH)
    }
}

/// Drawn when neither the tag nor the fallback is known.
pub const UNKNOWN_GLYPH: &str = "•";

/// Terminal glyphs for every tag the site uses.
const TERMINAL_GLYPHS: &[(&str, &str)] = &[
    // company values
    ("ChartBar", "📊"),
    ("Scale", "⚖"),
    ("Shield", "🛡"),
    ("Users", "👥"),
    // process steps
    ("Target", "🎯"),
    ("Database", "🗄"),
    ("BarChart", "📈"),
    ("Cpu", "🖥"),
    ("CheckCircle", "✅"),
    // industries
    ("Heart", "❤"),
    ("Building", "🏢"),
    ("Truck", "🚚"),
    // labs
    ("ClipboardCheck", "📋"),
    ("Calculator", "🧮"),
    ("FlaskConical", "🧪"),
    // services
    ("Compass", "🧭"),
    ("Brain", "🧠"),
    ("Code", "⌨"),
    // solutions
    ("Calendar", "📅"),
    ("Atom", "⚛"),
    // social
    ("Github", "🐙"),
    ("Linkedin", "💼"),
];

/// Tag-to-glyph table.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    glyphs: HashMap<&'static str, &'static str>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self {
            glyphs: TERMINAL_GLYPHS.iter().copied().collect(),
        }
    }
}

impl IconRenderer for IconRegistry {
    fn render(&self, tag: &str) -> Option<&str> {
        self.glyphs.get(tag).copied()
    }
}

/// Per-listing fallbacks, matching what each page shows for unknown tags.
pub mod fallback {
    pub const VALUE: &str = "Shield";
    pub const SERVICE: &str = "Compass";
    pub const INDUSTRY: &str = "Building";
    pub const SOLUTION: &str = "Atom";
    pub const STEP: &str = "Target";
    pub const TOOL: &str = "FlaskConical";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tag() {
        let icons = IconRegistry::default();
        assert_eq!(icons.render("Truck"), Some("🚚"));
    }

    #[test]
    fn test_unknown_tag_uses_fallback() {
        let icons = IconRegistry::default();
        assert_eq!(icons.render("Rocket"), None);
        assert_eq!(icons.render_or("Rocket", fallback::VALUE), "🛡");
    }

    #[test]
    fn test_unknown_fallback_uses_bullet() {
        let icons = IconRegistry::default();
        assert_eq!(icons.render_or("Rocket", "Nope"), UNKNOWN_GLYPH);
    }

    #[test]
    fn test_every_fallback_is_registered() {
        let icons = IconRegistry::default();
        for tag in [
            fallback::VALUE,
            fallback::SERVICE,
            fallback::INDUSTRY,
            fallback::SOLUTION,
            fallback::STEP,
            fallback::TOOL,
        ] {
            assert!(icons.render(tag).is_some(), "{tag} missing");
        }
    }
}
