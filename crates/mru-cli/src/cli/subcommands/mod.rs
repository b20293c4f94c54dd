mod auth;
mod bookmark;
mod category;
mod chat;
mod product;
mod report;
mod review;
mod user;

pub use auth::*;
pub use bookmark::*;
pub use category::*;
pub use chat::*;
pub use product::*;
pub use report::*;
pub use review::*;
pub use user::*;
