//! Span skipping: advancing past a value of unknown internal structure.
//!
//! To yield the next sibling of a list or dict element, the iterators need
//! the position one past the end of the current element, however deeply it
//! nests. `skip_value` computes that end position by walking the element's
//! encoding without materializing any of it.

use crate::cursor::read_length_prefix;
use crate::error::Error;

/// Maximum container nesting depth accepted before giving up.
const MAX_DEPTH: usize = 64;

/// Advances `pos` one past the end of the value starting at `pos`.
///
/// A failure at any recursion level invalidates the whole skip; `pos` is
/// left indeterminate and the caller must not continue walking.
pub(crate) fn skip_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::NestingTooDeep);
    }

    match data.get(*pos).copied() {
        Some(b'i') => skip_integer(data, pos),
        Some(b'l') => skip_list(data, pos, depth),
        Some(b'd') => skip_dict(data, pos, depth),
        Some(b'0'..=b'9') => skip_string(data, pos),
        Some(b) => Err(Error::UnexpectedByte(b)),
        None => Err(Error::TruncatedInput),
    }
}

fn skip_integer(data: &[u8], pos: &mut usize) -> Result<(), Error> {
    *pos += 1;
    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return Err(Error::InvalidInteger);
    }
    match data.get(*pos).copied() {
        Some(b'e') => {
            *pos += 1;
            Ok(())
        }
        Some(_) => Err(Error::InvalidInteger),
        None => Err(Error::MissingTerminator),
    }
}

fn skip_string(data: &[u8], pos: &mut usize) -> Result<(), Error> {
    let (payload_at, len) = read_length_prefix(&data[*pos..])?;
    let end = (*pos + payload_at)
        .checked_add(len)
        .ok_or(Error::InvalidLengthPrefix)?;
    if end > data.len() {
        return Err(Error::TruncatedInput);
    }
    *pos = end;
    Ok(())
}

fn skip_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<(), Error> {
    *pos += 1;
    loop {
        match data.get(*pos).copied() {
            Some(b'e') => {
                *pos += 1;
                return Ok(());
            }
            Some(_) => skip_value(data, pos, depth + 1)?,
            None => return Err(Error::MissingTerminator),
        }
    }
}

fn skip_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<(), Error> {
    *pos += 1;
    loop {
        match data.get(*pos).copied() {
            Some(b'e') => {
                *pos += 1;
                return Ok(());
            }
            Some(b) if b.is_ascii_digit() => {
                skip_string(data, pos).map_err(|e| match e {
                    Error::InvalidLengthPrefix => Error::MalformedKey,
                    other => other,
                })?;
                skip_value(data, pos, depth + 1)?;
            }
            Some(_) => return Err(Error::MalformedKey),
            None => return Err(Error::MissingTerminator),
        }
    }
}
