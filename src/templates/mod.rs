pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, flash_message, html_error_response, Flash};
pub use layouts::desktop::desktop_layout;
