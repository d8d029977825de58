//! Stylesheet file editing
//!
//! A [`Stylesheet`] owns the text of a CSS file and rewrites custom
//! properties inside its first top-level `:root` rule. Everything outside
//! that rule, and every declaration inside it that is not touched, is
//! rendered back byte-for-byte. Files without a top-level `:root` rule get
//! one appended.

use regex::Regex;
use std::sync::LazyLock;

use crate::style::StyleSink;

/// Splits one `:root` declaration into leading trivia, name, separator,
/// value and terminator
static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\s*(?:/\*.*?\*/\s*)*)(--[A-Za-z0-9_-]+)(\s*:\s*)(.*?)(\s*;?\s*)$")
        .expect("Invalid declaration regex")
});

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid comment regex"));

const NEW_ROOT_OPEN: &str = ":root {\n";
const NEW_ROOT_CLOSE: &str = "}\n";

/// A custom property declaration, kept with its original spacing
#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    lead: String,
    name: String,
    separator: String,
    value: String,
    end: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Anything that is not a custom property (other declarations, trailing
    /// whitespace, nested rules)
    Raw(String),
    Declaration(Declaration),
}

impl Part {
    fn is_blank(&self) -> bool {
        matches!(self, Part::Raw(text) if text.trim().is_empty())
    }
}

/// A CSS file whose `:root` custom properties can be rewritten in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Text up to and including the `{` of the `:root` rule
    head: String,
    body: Vec<Part>,
    /// Variables set that the `:root` rule did not declare yet
    added: Vec<(String, String)>,
    /// Text from the closing `}` of the `:root` rule to the end
    tail: String,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Stylesheet {
    /// An empty stylesheet holding only a `:root` rule
    pub fn new() -> Self {
        Self {
            head: NEW_ROOT_OPEN.to_string(),
            body: Vec::new(),
            added: Vec::new(),
            tail: NEW_ROOT_CLOSE.to_string(),
        }
    }

    pub fn parse(css: &str) -> Self {
        let Some((open, close)) = find_root_block(css) else {
            let mut head = css.to_string();
            if !head.is_empty() {
                if !head.ends_with('\n') {
                    head.push('\n');
                }
                head.push('\n');
            }
            head.push_str(NEW_ROOT_OPEN);
            return Self {
                head,
                ..Self::new()
            };
        };

        Self {
            head: css[..open].to_string(),
            body: split_declarations(&css[open..close])
                .into_iter()
                .map(parse_part)
                .collect(),
            added: Vec::new(),
            tail: css[close..].to_string(),
        }
    }

    /// Value of a `:root` custom property; the last declaration wins
    pub fn get(&self, name: &str) -> Option<&str> {
        let declared = self.body.iter().rev().find_map(|part| match part {
            Part::Declaration(decl) if decl.name == name => Some(decl.value.as_str()),
            _ => None,
        });
        declared.or_else(|| {
            self.added
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn to_css(&self) -> String {
        let mut css = self.head.clone();

        let mut body: String = self
            .body
            .iter()
            .map(|part| match part {
                Part::Raw(text) => text.clone(),
                Part::Declaration(d) => {
                    format!("{}{}{}{}{}", d.lead, d.name, d.separator, d.value, d.end)
                }
            })
            .collect();

        if !self.added.is_empty() {
            // The last declaration may legally omit its semicolon
            let unterminated = matches!(
                self.body.iter().rev().find(|part| !part.is_blank()),
                Some(Part::Declaration(d)) if !d.end.contains(';')
            );
            if unterminated {
                let content_len = body.trim_end().len();
                body.insert(content_len, ';');
            }
            if !body.is_empty() && !body.ends_with('\n') {
                body.push('\n');
            }
            for (name, value) in &self.added {
                body.push_str(&format!("  {}: {};\n", name, value));
            }
        }

        css.push_str(&body);
        css.push_str(&self.tail);
        css
    }
}

impl StyleSink for Stylesheet {
    fn set_variable(&mut self, name: &str, value: &str) {
        let mut declared = false;
        for part in &mut self.body {
            if let Part::Declaration(decl) = part {
                if decl.name == name {
                    decl.value = value.to_string();
                    declared = true;
                }
            }
        }
        if declared {
            return;
        }

        match self.added.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.added.push((name.to_string(), value.to_string())),
        }
    }
}

fn parse_part(text: &str) -> Part {
    match DECLARATION_PATTERN.captures(text) {
        Some(cap) => Part::Declaration(Declaration {
            lead: cap[1].to_string(),
            name: cap[2].to_string(),
            separator: cap[3].to_string(),
            value: cap[4].to_string(),
            end: cap[5].to_string(),
        }),
        None => Part::Raw(text.to_string()),
    }
}

/// Byte offsets of `{ } ( ) ;` that sit outside comments and strings
fn structural(css: &str) -> Vec<(usize, u8)> {
    let bytes = css.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = css[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b @ (b'{' | b'}' | b'(' | b')' | b';') => found.push((i, b)),
            _ => {}
        }
        i += 1;
    }
    found
}

/// Body range `(after "{", at "}")` of the first top-level `:root` rule
fn find_root_block(css: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut rule_start = 0;
    let mut open = None;

    for (i, b) in structural(css) {
        match b {
            b'{' => {
                if depth == 0 && is_root_selector(&css[rule_start..i]) {
                    open = Some(i + 1);
                }
                depth += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(start) = open {
                        return Some((start, i));
                    }
                    rule_start = i + 1;
                }
            }
            b';' if depth == 0 => rule_start = i + 1,
            _ => {}
        }
    }
    None
}

fn is_root_selector(selector: &str) -> bool {
    COMMENT_PATTERN.replace_all(selector, "").trim() == ":root"
}

/// Split a rule body after each top-level `;`, keeping every byte
fn split_declarations(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, b) in structural(body) {
        match b {
            b'(' | b'{' => depth += 1,
            b')' | b'}' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => {
                parts.push(&body[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < body.len() {
        parts.push(&body[start..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_renders_root_block() {
        let mut sheet = Stylesheet::new();
        assert_eq!(sheet.to_css(), ":root {\n}\n");

        sheet.set_variable("--color-theme-primary", "#4d7c6f");
        sheet.set_variable("--button-radius", "0.5rem");
        assert_eq!(
            sheet.to_css(),
            ":root {\n  --color-theme-primary: #4d7c6f;\n  --button-radius: 0.5rem;\n}\n"
        );
    }

    #[test]
    fn test_untouched_file_renders_unchanged() {
        let css = "/* theme */\nbody { color: red; }\n:root{--a:1;--b : url(\"x;y\") ;}\n.dark{--a:2;}";
        assert_eq!(Stylesheet::parse(css).to_css(), css);
    }

    #[test]
    fn test_other_rules_survive_rewrite() {
        let css = "body { color: red; }\n:root{--button-radius:.75rem;}\n.dark{--color-theme-primary:#ffffff;}";
        let mut sheet = Stylesheet::parse(css);
        sheet.set_variable("--color-theme-primary", "#1e3a5f");

        let out = sheet.to_css();
        assert!(out.starts_with("body { color: red; }\n:root{--button-radius:.75rem;\n"));
        assert!(out.contains("  --color-theme-primary: #1e3a5f;\n}"));
        assert!(out.ends_with("}\n.dark{--color-theme-primary:#ffffff;}"));
    }

    #[test]
    fn test_existing_value_replaced_in_place() {
        let mut sheet = Stylesheet::parse(":root{--a:1;}");
        sheet.set_variable("--a", "2");
        assert_eq!(sheet.to_css(), ":root{--a:2;}");
        assert_eq!(sheet.get("--a"), Some("2"));
    }

    #[test]
    fn test_comments_and_plain_properties_kept() {
        let css = "/* :root { --color-theme-primary: #111; } */\n\
                   :root {\n  /* brand */\n  --color-theme-primary: #000;\n  color-scheme: light;\n}\n";
        let mut sheet = Stylesheet::parse(css);
        assert_eq!(sheet.get("--color-theme-primary"), Some("#000"));

        sheet.set_variable("--color-theme-primary", "#0d9488");
        assert_eq!(
            sheet.to_css(),
            "/* :root { --color-theme-primary: #111; } */\n\
             :root {\n  /* brand */\n  --color-theme-primary: #0d9488;\n  color-scheme: light;\n}\n"
        );
    }

    #[test]
    fn test_semicolons_inside_values() {
        let css = ":root {\n  --bg: url(\"a;b.png\");\n  --icon: url(data:image/png;base64,AAAA);\n  --c: 1;\n}\n";
        let mut sheet = Stylesheet::parse(css);
        assert_eq!(sheet.get("--bg"), Some("url(\"a;b.png\")"));
        assert_eq!(sheet.get("--icon"), Some("url(data:image/png;base64,AAAA)"));

        sheet.set_variable("--c", "2");
        assert_eq!(sheet.to_css(), css.replace("--c: 1;", "--c: 2;"));
    }

    #[test]
    fn test_missing_root_is_appended() {
        let mut sheet = Stylesheet::parse("body { margin: 0; }");
        sheet.set_variable("--a", "1");
        assert_eq!(
            sheet.to_css(),
            "body { margin: 0; }\n\n:root {\n  --a: 1;\n}\n"
        );
    }

    #[test]
    fn test_nested_root_is_not_rewritten() {
        let media = "@media (prefers-color-scheme: dark) { :root { --a: #fff; } }\n";
        let mut sheet = Stylesheet::parse(media);
        assert_eq!(sheet.get("--a"), None);

        sheet.set_variable("--a", "#000");
        let out = sheet.to_css();
        assert!(out.starts_with(media));
        assert!(out.ends_with(":root {\n  --a: #000;\n}\n"));
    }

    #[test]
    fn test_unterminated_last_declaration() {
        let mut sheet = Stylesheet::parse(":root { --a: 1 }");
        assert_eq!(sheet.get("--a"), Some("1"));

        sheet.set_variable("--b", "2");
        let out = sheet.to_css();
        assert!(out.contains("--a: 1;"));
        assert!(out.contains("  --b: 2;\n}"));
    }

    #[test]
    fn test_unterminated_comment_is_ignored() {
        let css = "/* never closed :root { --a: 1; }";
        let mut sheet = Stylesheet::parse(css);
        assert_eq!(sheet.get("--a"), None);

        sheet.set_variable("--a", "2");
        assert!(sheet.to_css().starts_with(css));
    }
}
