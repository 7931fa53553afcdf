use regex::Regex;

/// Kind of declaration a code line was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Import,
    Class,
    Interface,
    Function,
}

/// Per-language matchers for declaration lines.
///
/// Every matcher is optional; a language without any matchers counts all of
/// its code lines as plain code.
#[derive(Debug, Clone, Default)]
pub struct DeclarationPatterns {
    import: Option<Regex>,
    class: Option<Regex>,
    interface: Option<Regex>,
    function: Option<Regex>,
    /// Leading words that rule out a function match (`if (x) {`, `return f(x);`).
    statement_keywords: &'static [&'static str],
}

const JAVA_STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "return", "new",
    "throw", "yield", "assert",
];

const JS_STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "return", "new",
    "throw", "yield", "await",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex")
}

impl DeclarationPatterns {
    /// Patterns with no matchers: every code line is plain code.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            import: None,
            class: None,
            interface: None,
            function: None,
            statement_keywords: &[],
        }
    }

    #[must_use]
    pub fn java() -> Self {
        Self {
            import: Some(compile(r"^\s*import\s+(?:static\s+)?[\w.*]+\s*;")),
            class: Some(compile(
                r"^\s*(?:(?:public|private|protected|static|final|abstract)\s+)*class\s+\w+(?:\s*<[\w\s?,&<>]+>)?(?:\s+extends\s+[\w.<>]+)?(?:\s+implements\s+[\w\s,.<>]+)?\s*\{?",
            )),
            interface: Some(compile(
                r"^\s*(?:(?:public|private|protected|static|abstract)\s+)*interface\s+\w+(?:\s*<[\w\s?,&<>]+>)?(?:\s+extends\s+[\w\s,.<>]+)?\s*\{?",
            )),
            function: Some(compile(
                r#"^\s*(?:(?:public|private|protected|static|final|synchronized|abstract|native|default)\s+)*(?:<[\w\s?,&<>]+>\s+)?[\w.\[\]?]+(?:<[\w\s?,.&<>\[\]]+>)?(?:\[\])*\s+\w+\s*\([\w\s.<>\[\],?:@'"]*\)\s*(?:throws\s+[\w\s,.]+)?\s*[{;]?\s*$"#,
            )),
            statement_keywords: JAVA_STATEMENT_KEYWORDS,
        }
    }

    #[must_use]
    pub fn python() -> Self {
        Self {
            import: Some(compile(
                r"^\s*(?:import\s+[\w.]+(?:\s+as\s+\w+)?|from\s+[\w.]+\s+import\s+(?:[\w.]+(?:\s+as\s+\w+)?|\*))",
            )),
            class: Some(compile(r"^\s*class\s+\w+\s*(?:\([\w\s.,=]*\))?\s*:")),
            interface: None,
            function: Some(compile(
                r#"^\s*(?:async\s+)?def\s+\w+\s*\([\w\s*.,=:'"\[\]|]*\)\s*(?:->\s*[\w.\[\], |]+)?\s*:"#,
            )),
            statement_keywords: &[],
        }
    }

    #[must_use]
    pub fn javascript() -> Self {
        Self {
            import: Some(compile(
                r#"^\s*(?:import\s+.*from\s*['"].*['"]\s*;?|const\s+\w+\s*=\s*require\(\s*['"].*['"]\s*\)\s*;?)"#,
            )),
            class: Some(compile(
                r"^\s*(?:export\s+)?(?:default\s+)?class\s+\w+(?:\s+extends\s+[\w.]+)?\s*\{?",
            )),
            interface: None,
            function: Some(compile(
                r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?(?:static\s+)?(?:function\s*\*?\s*\w+\s*\(.*?\)\s*\{?|(?:constructor|\w+)\s*\(.*?\)\s*\{)",
            )),
            statement_keywords: JS_STATEMENT_KEYWORDS,
        }
    }

    /// Returns `true` if no matcher is defined.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.import.is_none()
            && self.class.is_none()
            && self.interface.is_none()
            && self.function.is_none()
    }

    /// Classify one code fragment (already stripped of trailing comments).
    ///
    /// Precedence is import, class, interface, then function. A function match
    /// only counts when the line matches neither the class nor the interface
    /// matcher, so at most one kind is ever returned.
    #[must_use]
    pub fn classify(&self, code: &str) -> Option<DeclarationKind> {
        let hit = |pattern: Option<&Regex>| pattern.is_some_and(|re| re.is_match(code));

        if hit(self.import.as_ref()) {
            return Some(DeclarationKind::Import);
        }
        if hit(self.class.as_ref()) {
            return Some(DeclarationKind::Class);
        }
        if hit(self.interface.as_ref()) {
            return Some(DeclarationKind::Interface);
        }
        // Only reached when neither the class nor the interface matcher hit.
        (hit(self.function.as_ref()) && !self.starts_with_statement(code))
            .then_some(DeclarationKind::Function)
    }

    fn starts_with_statement(&self, code: &str) -> bool {
        let first_word = code
            .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
            .find(|word| !word.is_empty());
        first_word.is_some_and(|word| self.statement_keywords.contains(&word))
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
