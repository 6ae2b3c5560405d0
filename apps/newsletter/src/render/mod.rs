// Document renderer: record snapshot -> standalone HTML with inlined CSS.

pub mod document;
pub mod stylesheet;

pub use document::generate_html;
