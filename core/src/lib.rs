//! Synchronous API client core for the lockscreen todo app.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The app executes the actual
//! HTTP round-trip, keeping the core deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.
//! - `widget` turns a todo list into the payload the lockscreen widget reads.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod widget;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Health, Todo, UpdateTodo};
pub use widget::{widget_items, widget_payload, WidgetItem, WIDGET_LIMIT};
