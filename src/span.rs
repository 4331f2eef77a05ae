use bytes::Bytes;

use crate::cursor::Cursor;
use crate::error::{Error, ValueKind};

impl<'a> Cursor<'a> {
    /// Returns the raw encoding of the dictionary under the cursor,
    /// including its `d` and `e` markers, as a borrowed slice.
    ///
    /// This walks a copy of the cursor to exhaustion, so the cursor itself
    /// is untouched. Useful when a caller needs the exact encoded bytes of
    /// a sub-document rather than its decoded contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencursor::Cursor;
    ///
    /// let mut outer = Cursor::new(b"d4:infod3:cow3:mooee").unwrap();
    /// let (_, info) = outer.dict_next().unwrap().unwrap();
    /// assert_eq!(info.dict_span().unwrap(), b"d3:cow3:mooe");
    /// ```
    pub fn dict_span(&self) -> Result<&'a [u8], Error> {
        if !self.is_dict() {
            return Err(Error::TypeMismatch {
                expected: ValueKind::Dict,
            });
        }
        let mut walk = self.child(self.pos);
        while walk.dict_next()?.is_some() {}
        // dict_next leaves the position on the closing marker
        Ok(&walk.buf[..walk.pos + 1])
    }

    /// Returns an owned copy of [`dict_span`](Cursor::dict_span), for
    /// callers that need to hold or hash the sub-document past the life of
    /// the input buffer (e.g. the `info` dict of a torrent).
    pub fn dict_bytes(&self) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(self.dict_span()?))
    }
}
