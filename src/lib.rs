//! A statically-sized, no-heap configuration store.
//!
//! A caller declares a [`schema::Schema`] (a fixed set of named, typed
//! [`schema::Entry`] values with optional defaults); [`store::Context`]
//! provides typed get/set over that schema, [`page::pageout`] serializes
//! the live state into a compact MessagePack-subset page, and
//! [`pagein::pagein`]/[`pagein::pagein_remap`] reload it — the latter
//! optionally migrating from a blob produced by an older schema version
//! via index remapping plus a constrained set of type-widening coercions.
//!
//! Every piece of storage a [`store::Context`] touches — the values array,
//! the presence bitmap, the string pool — is borrowed from the caller.
//! Nothing in the core allocates, which is why the crate builds
//! `#![no_std]` by default; the `std` feature only widens the file and
//! decompression adapters, never the core path.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(dead_code)]

mod buf;
mod codec;
mod marker;

pub mod config;
pub mod error;
pub mod pagein;
pub mod page;
pub mod peek;
pub mod pool;
pub mod schema;
pub mod store;
pub mod value;

#[cfg(feature = "std")]
pub mod decompress;
#[cfg(feature = "std")]
pub mod file;

pub use buf::Buffer;
pub use config::{FSTR_MAX, MAX_ENTRIES, NAME_MAX, SKIP_MAX_DEPTH, STR_MAX};
pub use error::{Error, Result};
pub use page::pageout;
pub use pagein::{pagein, pagein_remap};
pub use peek::peek_name;
pub use pool::Pool;
pub use schema::{Entry, RemapEntry, Schema};
pub use store::Context;
pub use value::{Default, Kind, Value};
