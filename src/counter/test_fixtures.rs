//! Shared test fixtures for counter tests.
//!
//! Provides the profiles used across `comment_tests`, `classifier_tests`
//! and `tally_tests`.

use crate::language::{CommentSyntax, LanguageKind, LanguageProfile};

pub fn c_like_syntax() -> CommentSyntax {
    CommentSyntax::c_like()
}

pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(Some("#"), Some(("\"\"\"", "\"\"\"")))
}

pub fn java_profile() -> LanguageProfile {
    LanguageProfile::build(LanguageKind::Java)
}

pub fn python_profile() -> LanguageProfile {
    LanguageProfile::build(LanguageKind::Python)
}

pub fn javascript_profile() -> LanguageProfile {
    LanguageProfile::build(LanguageKind::JavaScript)
}

pub fn c_profile() -> LanguageProfile {
    LanguageProfile::build(LanguageKind::CFamily)
}

/// The twelve-line Java program used by the CLI acceptance scenario.
pub const JAVA_SAMPLE: &str = "import java.util.*;

// comment 1
// Comment 2

public class Main {

  // This is another comment line
  public static void main(String[] args) {
    System.out.println(\"Hello world!\"); // code, not comment 11
  }
}";
