//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`UrlEntry`] - One row of the batch shortening form
//! - [`ShortenedResult`] - A fabricated short link produced by a submission
//! - [`StatItem`] / [`ClickRecord`] - Mock analytics records
//! - [`Notification`] - Transient message shown on the next render
//! - [`Theme`] / [`Route`] - Shell state

pub mod entry;
pub mod notification;
pub mod shortened;
pub mod stat_item;
pub mod theme;

pub use entry::{EntryErrors, EntryField, EntryId, EntryResult, EntryStatus, UrlEntry};
pub use notification::{Notification, NotificationKind};
pub use shortened::ShortenedResult;
pub use stat_item::{ClickRecord, StatItem};
pub use theme::{Route, Theme};
