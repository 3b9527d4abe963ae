// ABOUTME: Library crate for shipmate exposing the guide catalog, state, and UI for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod guide;
