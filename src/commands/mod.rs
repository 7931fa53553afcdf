mod context;
pub mod count;

pub use context::{build_filter, load_config};
pub use count::{CountOutcome, NO_FILES_MESSAGE, count_file, count_paths, run_count, run_count_impl};
