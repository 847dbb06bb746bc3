//! Compile-time configuration knobs.
//!
//! These mirror the teacher's top-level `MAX_DOC_SIZE`/`MAX_DEPTH` consts
//! (see `fog-pack`'s `lib.rs`), broken out into their own module since
//! there are more of them here and they are part of the public contract a
//! schema parser and a store's caller both need to respect.

/// Maximum number of entries a single schema may declare. Sizes the
/// store's inline presence bitmap.
pub const MAX_ENTRIES: usize = 128;

/// Bound on `skip_value`'s iterative nesting depth. A blob nested deeper
/// than this is rejected with [`crate::Error::Decode`] rather than risking
/// unbounded stack growth. Worst-case stack cost is `4 * SKIP_MAX_DEPTH`
/// bytes (one `u32` counter per level).
pub const SKIP_MAX_DEPTH: usize = 32;

/// Maximum byte length of a `Kind::Str` value.
pub const STR_MAX: usize = 64;

/// Maximum byte length of a `Kind::FStr` value.
pub const FSTR_MAX: usize = 16;

/// Maximum byte length of a schema's `map_name`.
pub const NAME_MAX: usize = 5;
