/// State management module
///
/// This module handles all in-memory application state:
/// - Course data model (data.rs)
/// - The course store and completion toggling (catalog.rs)
/// - Built-in and file-based catalog provisioning (seed.rs)
/// - Search filtering (search.rs)
/// - Sign-in session and login dialog (session.rs)
/// - Detail panel visibility (detail.rs)
/// - Toast notifications (notify.rs)

pub mod catalog;
pub mod data;
pub mod detail;
pub mod notify;
pub mod search;
pub mod seed;
pub mod session;
