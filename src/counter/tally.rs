use std::ops::AddAssign;

use serde::Serialize;

use crate::language::DeclarationKind;

/// Category of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    Code(Option<DeclarationKind>),
}

/// Line counters for one file or an aggregate of files.
///
/// `blank + comment + code == total` always holds, and the declaration
/// counters break down a subset of `code`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineTally {
    pub blank: usize,
    pub comment: usize,
    pub code: usize,
    pub total: usize,
    pub imports: usize,
    pub class_declarations: usize,
    pub interface_declarations: usize,
    pub function_declarations: usize,
}

impl LineTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blank: 0,
            comment: 0,
            code: 0,
            total: 0,
            imports: 0,
            class_declarations: 0,
            interface_declarations: 0,
            function_declarations: 0,
        }
    }

    pub const fn record(&mut self, class: LineClass) {
        self.total += 1;
        match class {
            LineClass::Blank => self.blank += 1,
            LineClass::Comment => self.comment += 1,
            LineClass::Code(declaration) => {
                self.code += 1;
                match declaration {
                    Some(DeclarationKind::Import) => self.imports += 1,
                    Some(DeclarationKind::Class) => self.class_declarations += 1,
                    Some(DeclarationKind::Interface) => self.interface_declarations += 1,
                    Some(DeclarationKind::Function) => self.function_declarations += 1,
                    None => {}
                }
            }
        }
    }

    #[must_use]
    pub const fn declarations(&self) -> usize {
        self.imports
            + self.class_declarations
            + self.interface_declarations
            + self.function_declarations
    }

    /// Checks the counter invariants.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.blank + self.comment + self.code == self.total && self.declarations() <= self.code
    }
}

impl AddAssign<&Self> for LineTally {
    fn add_assign(&mut self, other: &Self) {
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
        self.total += other.total;
        self.imports += other.imports;
        self.class_declarations += other.class_declarations;
        self.interface_declarations += other.interface_declarations;
        self.function_declarations += other.function_declarations;
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
