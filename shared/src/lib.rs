//! Data model and list-processing pipeline shared by the comment dashboard.
//!
//! Everything here is platform independent: the browser crate renders it,
//! the tests drive it natively.

use serde::{Deserialize, Serialize};

pub mod cancel;
pub mod config;
pub mod filter;
pub mod paginate;
pub mod route;
pub mod sort;
pub mod view;

pub use cancel::{CancelToken, Settlement};
pub use config::ClientConfig;
pub use filter::filter_comments;
pub use paginate::{paginate, Page, PageSize};
pub use route::Route;
pub use sort::{sort_comments, SortColumn, SortDirection, SortState};
pub use view::{recompute, DashboardModel, ProfileModel, ViewCommand, ViewEffect, ViewState};

// ── Comments ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

// ── Users ──

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl Address {
    /// Single-line rendering used on the profile screen.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
}

impl User {
    /// Letter shown in the avatar badge.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

// ── Errors ──

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported page size {0:?} (expected 10, 50 or 100)")]
    PageSize(String),
}
