//! Server-rendered HTML layer.
//!
//! Pages are rendered with Askama templates from `templates/`; every form
//! action redirects back to a page (post/redirect/get).
//!
//! # Modules
//!
//! - [`forms`] - Decoding of posted entry fields
//! - [`handlers`] - Page renders and form actions
//! - [`middleware`] - Session cookie
//! - [`routes`] - Route configuration
//! - [`views`] - View models for the templates

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
