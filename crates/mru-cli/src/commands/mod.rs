pub mod auth;
pub mod bookmark;
pub mod category;
pub mod chat;
pub mod dispatch;
pub mod product;
pub mod report;
pub mod review;
pub mod shared;
pub mod user;
