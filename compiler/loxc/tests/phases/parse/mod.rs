//! Front-end tests through `parse_source`, `format_tokens` and `format_ast`.

mod diagnostics;
mod printing;
