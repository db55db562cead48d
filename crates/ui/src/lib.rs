//! UI module wiring for the network console.
//!
//! The application shell resolves a page URL against a [`menu::Menu`],
//! obtains the [`controller::Controller`] behind it, renders the view model,
//! and forwards button presses. Controllers own their backing resource and
//! answer with the follow-up navigation target; everything below the
//! [`resource`] traits (HTTP, caching, server-side validation) lives
//! elsewhere.

pub mod controller;
pub mod error;
pub mod form;
pub mod menu;
pub mod page;
pub mod resource;
pub mod roles;
