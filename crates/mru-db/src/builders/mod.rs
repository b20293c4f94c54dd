//! Fluent builders that validate input before a single terminal request.
//!
//! Setters take `&mut self`, validate their own field, and return
//! `Result<&mut Self, ValidationError>`, so a chain stops at the first bad
//! field with the draft unchanged for that field. Terminal methods take
//! `&self` and may be re-run; each run re-issues the write.

mod filter;
mod modifier;
mod product;
mod report;
mod review;

pub use filter::ProductFilter;
pub use modifier::ProductModifier;
pub use product::ProductBuilder;
pub use report::ReportBuilder;
pub use review::ReviewPublisher;
