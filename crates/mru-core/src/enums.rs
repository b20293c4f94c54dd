//! Table names, validated field names, and interaction enums.
//!
//! `Table::as_str` returns the exact relation name used by the data API, which
//! keeps the mixed-case table names in one place.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Relations exposed by the marketplace schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Table {
    #[serde(rename = "User_Information")]
    UserInformation,
    #[serde(rename = "Product_Information")]
    ProductInformation,
    #[serde(rename = "Product_Order")]
    ProductOrder,
    #[serde(rename = "Category_Tags")]
    CategoryTags,
    #[serde(rename = "Category_Assigned_Products")]
    CategoryAssignedProducts,
    #[serde(rename = "Shopping_Cart")]
    ShoppingCart,
    #[serde(rename = "Shopping_Cart_Products")]
    ShoppingCartProducts,
    #[serde(rename = "Chats")]
    Chats,
    #[serde(rename = "Messages")]
    Messages,
    #[serde(rename = "Reports")]
    Reports,
    #[serde(rename = "Reviews")]
    Reviews,
    #[serde(rename = "User_Interactions")]
    UserInteractions,
}

impl Table {
    /// Return the relation name used in data API paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserInformation => "User_Information",
            Self::ProductInformation => "Product_Information",
            Self::ProductOrder => "Product_Order",
            Self::CategoryTags => "Category_Tags",
            Self::CategoryAssignedProducts => "Category_Assigned_Products",
            Self::ShoppingCart => "Shopping_Cart",
            Self::ShoppingCartProducts => "Shopping_Cart_Products",
            Self::Chats => "Chats",
            Self::Messages => "Messages",
            Self::Reports => "Reports",
            Self::Reviews => "Reviews",
            Self::UserInteractions => "User_Interactions",
        }
    }

    /// Singular entity label used in not-found errors.
    #[must_use]
    pub const fn entity(self) -> &'static str {
        match self {
            Self::UserInformation => "user profile",
            Self::ProductInformation => "product",
            Self::ProductOrder => "order",
            Self::CategoryTags => "category",
            Self::CategoryAssignedProducts => "category assignment",
            Self::ShoppingCart => "bookmarker",
            Self::ShoppingCartProducts => "bookmarked product",
            Self::Chats => "chat",
            Self::Messages => "message",
            Self::Reports => "report",
            Self::Reviews => "review",
            Self::UserInteractions => "interaction",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A user-supplied field that a validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Price,
    Stock,
    Rating,
    Image,
    Link,
    Email,
    Password,
    Username,
    FirstName,
    LastName,
    Fullname,
    Seller,
    Subject,
    Message,
    Category,
    Search,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Rating => "rating",
            Self::Image => "image",
            Self::Link => "link",
            Self::Email => "email",
            Self::Password => "password",
            Self::Username => "username",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Fullname => "fullname",
            Self::Seller => "seller",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Category => "category",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Interaction
// ---------------------------------------------------------------------------

/// Per-side boolean tracked on an interaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InteractionFlag {
    Blocked,
    Muted,
}

impl InteractionFlag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Muted => "muted",
        }
    }
}

impl fmt::Display for InteractionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which column pair of an interaction row a user occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// `user_id_1` / `user_1_*` columns.
    First,
    /// `user_id_2` / `user_2_*` columns.
    Second,
}

impl Side {
    /// Column holding the given flag for this side.
    #[must_use]
    pub const fn column(self, flag: InteractionFlag) -> &'static str {
        match (self, flag) {
            (Self::First, InteractionFlag::Blocked) => "user_1_is_blocked",
            (Self::First, InteractionFlag::Muted) => "user_1_is_muted",
            (Self::Second, InteractionFlag::Blocked) => "user_2_is_blocked",
            (Self::Second, InteractionFlag::Muted) => "user_2_is_muted",
        }
    }
}
