//! Thin file-I/O wrapper around the in-memory `pageout`/`pagein`. Not part
//! of the core runtime; gated behind the `std` feature since it needs
//! `std::fs`. Whole-file reads and writes only — no streaming, no partial
//! pages.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::buf::Buffer;
use crate::error::{Error, Result};
use crate::page::pageout;
use crate::pagein::{pagein, pagein_remap};
use crate::schema::RemapEntry;
use crate::store::Context;

/// Read the whole file at `path` into `scratch`, then `pagein` it into
/// `ctx`. Any `std::io::Error` becomes [`Error::IO`]; a file larger than
/// `scratch` becomes [`Error::Bounds`].
pub fn load(ctx: &mut Context, path: &Path, scratch: &mut [u8]) -> Result<()> {
    let len = read_into(path, scratch)?;
    let result = pagein(ctx, &scratch[..len]);
    if let Err(e) = &result {
        log::warn!("pagein failed for {}: {:?}", path.display(), e);
    }
    result
}

/// Like [`load`], but translates wire keys through `remap_table` before
/// schema lookup, exactly as [`crate::pagein::pagein_remap`] does.
pub fn load_remap(ctx: &mut Context, path: &Path, scratch: &mut [u8], remap_table: &[RemapEntry]) -> Result<()> {
    let len = read_into(path, scratch)?;
    let result = pagein_remap(ctx, &scratch[..len], remap_table);
    if let Err(e) = &result {
        log::warn!("pagein_remap failed for {}: {:?}", path.display(), e);
    }
    result
}

fn read_into(path: &Path, scratch: &mut [u8]) -> Result<usize> {
    let bytes = fs::read(path).map_err(|e| {
        log::warn!("failed to read {}: {}", path.display(), e);
        Error::IO
    })?;
    if bytes.len() > scratch.len() {
        log::warn!(
            "{} is {} bytes, scratch is only {}",
            path.display(),
            bytes.len(),
            scratch.len()
        );
        return Err(Error::Bounds);
    }
    scratch[..bytes.len()].copy_from_slice(&bytes);
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes.len())
}

/// Serialize `ctx` with [`pageout`] into `scratch`, then write the result
/// to `path`, creating or truncating it.
pub fn store(ctx: &Context, path: &Path, scratch: &mut [u8]) -> Result<()> {
    let mut buf = Buffer::new(scratch);
    pageout(ctx, &mut buf)?;
    let mut file = fs::File::create(path).map_err(|e| {
        log::warn!("failed to create {}: {}", path.display(), e);
        Error::IO
    })?;
    file.write_all(buf.as_slice()).map_err(|e| {
        log::warn!("failed to write {}: {}", path.display(), e);
        Error::IO
    })?;
    log::debug!("wrote {} bytes to {}", buf.len(), path.display());
    Ok(())
}
