//! Library error types.

use core::fmt;

/// A cfgpack Result, normally returning a cfgpack [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A cfgpack error. Encompasses any issue that can happen during store
/// construction, typed get/set, encoding, or decoding.
///
/// All operations are pure: an error never leaves global state behind, and
/// a failed `set` never flips the slot's presence bit. A failed `pagein`
/// may have already cleared presence before failing partway through the
/// wire map (`pagein` clears first, then restores); that is documented
/// behavior, not a bug — see the crate-level docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied capacity (values array, pool, presence bitmap, a
    /// `peek_name` output buffer, ...) was too small.
    Bounds,
    /// `get` was called on a slot with no value present.
    Missing,
    /// The requested kind didn't match the schema's declared kind for that
    /// slot, or a decode hit a coercion that the widening table in
    /// `pagein`/`pagein_remap` forbids.
    TypeMismatch,
    /// A string, on `set` or on decode, exceeded the slot kind's maximum
    /// length (`STR_MAX` for `Kind::Str`, `FSTR_MAX` for `Kind::FStr`).
    StrTooLong,
    /// A schema declared an invalid type (parser-side; surfaces through
    /// `Context::init` when a caller forwards a parse error as a schema).
    InvalidType,
    /// A schema declared the same entry index twice.
    Duplicate,
    /// A schema entry tried to claim index 0, which is reserved for the
    /// schema name.
    ReservedIndex,
    /// A value could not be encoded onto the wire (buffer overflow, or a
    /// value's shape is unrepresentable in the MessagePack subset).
    Encode,
    /// A value could not be decoded off the wire (malformed MessagePack,
    /// unsupported marker byte, depth budget exceeded, truncated input).
    Decode,
    /// An I/O operation failed. Only produced by the `std`-gated file and
    /// decompression adapters; the core never returns this.
    IO,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bounds => f.write_str("supplied capacity too small"),
            Error::Missing => f.write_str("no value present at that slot"),
            Error::TypeMismatch => f.write_str("kind disagreement between schema and operation"),
            Error::StrTooLong => f.write_str("string exceeds the slot's maximum length"),
            Error::InvalidType => f.write_str("schema declared an invalid entry type"),
            Error::Duplicate => f.write_str("schema declared a duplicate entry index"),
            Error::ReservedIndex => f.write_str("schema entry claimed reserved index 0"),
            Error::Encode => f.write_str("MessagePack subset encode failure"),
            Error::Decode => f.write_str("MessagePack subset decode failure"),
            Error::IO => f.write_str("I/O failure in a file or decompression adapter"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(not(feature = "std"))]
impl core::error::Error for Error {}
