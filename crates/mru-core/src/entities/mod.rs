//! Row structs for every marketplace relation.
//!
//! Each struct mirrors one table as the data API returns it. All derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so fixtures can be checked
//! against the generated schema. Rows are never cached: every read is a
//! fresh round trip.

mod bookmark;
mod category;
mod chat;
mod interaction;
mod order;
mod product;
mod profile;
mod report;
mod review;
mod row;

pub use bookmark::{BookmarkedProduct, Bookmarker};
pub use category::{CategorizedProduct, Category};
pub use chat::{Chat, Message};
pub use interaction::Interaction;
pub use order::ProductOrder;
pub use product::{Product, ProductImages};
pub use profile::{ProfileImage, UserProfile};
pub use report::Report;
pub use review::{AverageRating, Review};
pub use row::RowId;
