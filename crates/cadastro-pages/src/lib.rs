//! cadastro-pages - WASM client for the cadastro site
//!
//! A small browser-resident client that turns a set of statically served
//! pages into a single-page experience and enforces the registration form's
//! field rules before submission.
//!
//! ## Architecture
//!
//! Two cooperating components, both driven by DOM events:
//!
//! - [`navigator`]: intercepts header navigation clicks, fetches the target
//!   page, swaps the live `main` region and keeps the address bar in sync
//!   through the History API. After every swap it re-runs the form binder so
//!   a form inside the new content becomes interactive again.
//! - [`form`](mod@form): locates the registration form (if the current page
//!   has one), restricts the numeric fields to digits, validates on submit
//!   and renders inline plus aggregate feedback.
//!
//! All DOM, network and timer plumbing is gated behind
//! `#[cfg(target_arch = "wasm32")]`. The decision logic - validation rules,
//! the feedback state machine, main-region extraction and the stale-effect
//! sequencing - operates on explicit state snapshots and runs on any target,
//! so the interesting behavior is testable without a browser.
//!
//! ## Example
//!
//! ```ignore
//! use cadastro_pages::form::fields::{FieldKind, FieldState};
//! use cadastro_pages::form::validation::validate_all;
//!
//! let fields = vec![
//!     FieldState::new("email", FieldKind::Email).value("ana@exemplo.com"),
//!     FieldState::new("cpf", FieldKind::Text).value("123.456.789-09"),
//! ];
//! assert!(validate_all(&fields).is_empty());
//! ```

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod form;
pub mod logging;
pub mod navigator;
pub mod sequence;

pub use form::validation::{FieldError, FieldErrorKind};
pub use navigator::{LoadError, Navigator};
pub use sequence::{OpSequence, Ticket};
