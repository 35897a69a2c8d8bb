//! Forces dynamic linking of `ponypaper-rs`.
//!
//! Enable the `dynamic_linking` feature of the root crate during development to cut
//! incremental link times; this crate should not be used directly.

#![allow(unused_imports, clippy::single_component_path_imports)]
use ponypaper_internal;
