//! Filter implementations
//!
//! One module per Markdown construct. Every filter here except [`CodeFenceFilter`] leaves the
//! lines flagged in the verbatim mask from [`crate::fence`] untouched.

pub mod bold;
pub mod code_fence;
pub mod emphasis;
pub mod header;
pub mod inline_code;
pub mod list;
pub mod paragraph;
mod toggle;

pub use bold::BoldFilter;
pub use code_fence::CodeFenceFilter;
pub use emphasis::EmphasisFilter;
pub use header::HeaderFilter;
pub use inline_code::InlineCodeFilter;
pub use list::ListFilter;
pub use paragraph::ParagraphFilter;
