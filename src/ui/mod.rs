mod output;

pub use output::{print_error, print_greeting, print_response, print_saved};
