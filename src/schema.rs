//! The runtime schema representation.
//!
//! Parsing schemas from their textual `.map`/JSON forms, or from a
//! self-describing MessagePack schema document, is out of scope here (it's
//! an external collaborator per `spec.md` §1). This module only defines the
//! shape such a parser must hand to [`crate::store::Context::init`], plus a
//! small literal-construction API so tests (and simple embedded callers who
//! hard-code their schema) don't need a parser at all.

use crate::config::NAME_MAX;
use crate::value::{Default, Kind};

/// One schema-declared, typed, named field.
#[derive(Clone, Copy, Debug)]
pub struct Entry<'a> {
    /// The on-the-wire key. Must be `>= 1` and unique within a schema;
    /// index `0` is reserved for the schema name.
    pub index: u16,
    /// Short identifier used only for by-name lookup.
    pub name: &'a str,
    /// The entry's declared type.
    pub kind: Kind,
    /// The default value restored by `Context::init` and by `pagein`'s
    /// final step when this entry is absent from a decoded page. Must be
    /// `Some` with a value whose kind matches `self.kind`, or `None`.
    pub default: Option<Default>,
}

impl<'a> Entry<'a> {
    /// Construct an entry with no default.
    pub const fn new(index: u16, name: &'a str, kind: Kind) -> Entry<'a> {
        Entry {
            index,
            name,
            kind,
            default: None,
        }
    }

    /// Construct an entry with a default value. The caller is responsible
    /// for the default's kind matching `kind` — `Context::init` checks this
    /// and fails with [`crate::Error::InvalidType`] if it doesn't.
    pub const fn with_default(index: u16, name: &'a str, kind: Kind, default: Default) -> Entry<'a> {
        Entry {
            index,
            name,
            kind,
            default: Some(default),
        }
    }
}

/// A complete schema: the ordered set of entries a [`crate::store::Context`]
/// is built against, plus the name serialized into the page's reserved key
/// 0 and an informational version number.
#[derive(Clone, Copy, Debug)]
pub struct Schema<'a> {
    /// Short identifier, at most [`NAME_MAX`] bytes, serialized into key 0.
    pub map_name: &'a str,
    /// Informational only; not used by the decoder for branching.
    pub version: u32,
    /// Ordered entries. An entry's position in this slice is its "slot";
    /// `Context` indexes its values array by slot.
    pub entries: &'a [Entry<'a>],
}

impl<'a> Schema<'a> {
    /// Construct a schema. Does not validate `map_name`'s length or the
    /// entries' indices — that happens once, in `Context::init`, which is
    /// the single place those invariants actually matter operationally.
    pub const fn new(map_name: &'a str, version: u32, entries: &'a [Entry<'a>]) -> Schema<'a> {
        Schema {
            map_name,
            version,
            entries,
        }
    }

    /// Find an entry's slot (its position in `entries`) by wire index.
    /// Linear scan — schemas are small, typically at most a few tens of
    /// entries.
    pub fn slot_for_index(&self, index: u16) -> Option<usize> {
        self.entries.iter().position(|e| e.index == index)
    }

    /// Find an entry's slot by exact, case-sensitive name match. Linear
    /// scan over the same array as `slot_for_index`.
    pub fn slot_for_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// `true` if `map_name` fits within [`NAME_MAX`] bytes.
    pub fn name_fits(&self) -> bool {
        self.map_name.len() <= NAME_MAX
    }
}

/// An `(old_index, new_index)` pair used by `pagein_remap` to translate
/// wire keys from a prior schema version before doing the slot lookup.
/// Duplicate `old_index` entries are implementation-defined (`spec.md`
/// §4.4); this crate resolves the first match in table order.
pub type RemapEntry = (u16, u16);
