mod patterns;
mod registry;

pub use patterns::{DeclarationKind, DeclarationPatterns};
pub use registry::{CommentSyntax, LanguageKind, LanguageProfile, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
