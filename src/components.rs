//! Reusable HTML components for page generation
//!
//! This module provides the Maud component functions that make up the page
//! shell: the document wrapper, the site header with its home and page
//! variants, the footer, and the internal link primitive they share.

pub mod document;
pub mod footer;
pub mod header;
pub mod layout;
pub mod link;
