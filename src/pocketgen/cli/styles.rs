use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named console styles, looked up by the `style` template filter.
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` when color is on. Unknown names are flagged with `(!?)`
    /// in both modes so typos in templates show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("(!?) {}", text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub static POCKETGEN_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("command", Style::new().bold())
        .add("label", Style::new().dim())
        .add("key", Style::new().cyan())
        .add("info", Style::new().dim())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("error", Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mode_returns_text() {
        assert_eq!(POCKETGEN_THEME.apply("command", "nextflow", false), "nextflow");
    }

    #[test]
    fn test_color_mode_adds_ansi() {
        let styled = POCKETGEN_THEME.apply("error", "boom", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn test_unknown_style_is_flagged() {
        assert_eq!(POCKETGEN_THEME.apply("nope", "x", false), "(!?) x");
    }
}
