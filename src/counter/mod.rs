mod classifier;
mod comment;
mod tally;

pub use classifier::{ClassifierState, LineClassifier};
pub use comment::{CommentDetector, LineRemainder};
pub use tally::{LineClass, LineTally};

#[cfg(test)]
pub(crate) mod test_fixtures;
