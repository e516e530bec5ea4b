//! Plugin state: form inputs, UI visibility, and the store abstraction.
//!
//! DESIGN
//! ======
//! State types are plain structs. `Store` lets the same flows mutate them
//! through a Leptos signal in the browser or a `RefCell` in tests.

pub mod form;
pub mod store;
pub mod ui;
