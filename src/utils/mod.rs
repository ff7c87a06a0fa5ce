pub mod error;
pub mod output;

pub use error::{AppError, AppResult};
pub use output::{print_empty_result, print_success, print_system_error, print_warning, OutputStyle};
