use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DeclarationPatterns;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: Option<String>,
    pub multi_line: Option<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Option<&str>, multi_line: Option<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.map(String::from),
            multi_line: multi_line.map(|(s, e)| (s.to_string(), e.to_string())),
        }
    }

    /// `//` line comments and `/* */` block comments.
    #[must_use]
    pub fn c_like() -> Self {
        Self::new(Some("//"), Some(("/*", "*/")))
    }
}

/// Closed set of languages the classifier knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Java,
    Python,
    #[serde(alias = "js")]
    JavaScript,
    #[serde(rename = "c", alias = "cpp", alias = "c++")]
    CFamily,
    Default,
}

impl LanguageKind {
    pub const ALL: [Self; 5] = [
        Self::Java,
        Self::Python,
        Self::JavaScript,
        Self::CFamily,
        Self::Default,
    ];

    /// Map a file extension (with or without the leading dot) to a language.
    /// Unknown extensions map to [`LanguageKind::Default`].
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match normalize_extension(ext).as_str() {
            "java" => Self::Java,
            "py" => Self::Python,
            "js" => Self::JavaScript,
            "c" | "cpp" | "cxx" | "h" | "hpp" => Self::CFamily,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::CFamily => "C/C++",
            Self::Default => "Default (C-like)",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

/// Immutable description of how one language writes comments and declarations.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub kind: LanguageKind,
    pub comment_syntax: CommentSyntax,
    pub declarations: DeclarationPatterns,
}

impl LanguageProfile {
    /// Build the complete profile for `kind`, compiling all of its patterns.
    #[must_use]
    pub fn build(kind: LanguageKind) -> Self {
        let (comment_syntax, declarations) = match kind {
            LanguageKind::Java => (CommentSyntax::c_like(), DeclarationPatterns::java()),
            LanguageKind::Python => (
                CommentSyntax::new(Some("#"), Some(("\"\"\"", "\"\"\""))),
                DeclarationPatterns::python(),
            ),
            LanguageKind::JavaScript => {
                (CommentSyntax::c_like(), DeclarationPatterns::javascript())
            }
            LanguageKind::CFamily | LanguageKind::Default => {
                (CommentSyntax::c_like(), DeclarationPatterns::none())
            }
        };

        Self {
            kind,
            comment_syntax,
            declarations,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Lookup table from file extension to [`LanguageProfile`].
///
/// All profiles are built up front; the registry is read-only once constructed.
#[derive(Debug)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
    aliases: HashMap<String, LanguageKind>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: LanguageKind::ALL
                .into_iter()
                .map(LanguageProfile::build)
                .collect(),
            aliases: HashMap::new(),
        }
    }

    /// Registry that additionally maps the given extensions onto built-in languages.
    /// Aliases take precedence over the built-in extension table.
    #[must_use]
    pub fn with_aliases(aliases: &HashMap<String, LanguageKind>) -> Self {
        let mut registry = Self::new();
        registry.aliases = aliases
            .iter()
            .map(|(ext, kind)| (normalize_extension(ext), *kind))
            .collect();
        registry
    }

    #[must_use]
    pub fn kind_for_extension(&self, ext: &str) -> LanguageKind {
        self.aliases
            .get(&normalize_extension(ext))
            .copied()
            .unwrap_or_else(|| LanguageKind::from_extension(ext))
    }

    #[must_use]
    pub fn profile(&self, kind: LanguageKind) -> &LanguageProfile {
        &self.profiles[kind.index()]
    }

    #[must_use]
    pub fn profile_for_extension(&self, ext: &str) -> &LanguageProfile {
        self.profile(self.kind_for_extension(ext))
    }

    #[must_use]
    pub fn profile_for_path(&self, path: &Path) -> &LanguageProfile {
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(LanguageKind::Default, |ext| self.kind_for_extension(ext));
        self.profile(kind)
    }

    #[must_use]
    pub fn all(&self) -> &[LanguageProfile] {
        &self.profiles
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
