//! Library surface of the `chroma` binary: logging setup and table
//! rendering.

#![deny(unsafe_code)]

pub mod logging;
pub mod summary;
