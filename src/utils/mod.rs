//! Shared utility functions.
//!
//! This module contains reusable utilities used across the codebase:
//! - `html`: HTML payload detection for fetched response bodies

mod html;

pub use html::{is_html, is_html_content_type};
