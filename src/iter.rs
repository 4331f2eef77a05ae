use crate::cursor::{read_length_prefix, Cursor};
use crate::error::{Error, ValueKind};
use crate::skip::skip_value;

impl<'a> Cursor<'a> {
    /// Returns true if the list under the cursor has another element.
    ///
    /// When the cursor still sits on the opening `l` this peeks past it, so
    /// an empty list reports false before any `list_next` call.
    pub fn list_has_next(&self) -> bool {
        let at = self.element_pos(b'l');
        matches!(self.buf.get(at), Some(b) if *b != b'e')
    }

    /// Yields the next list element as a child cursor.
    ///
    /// Returns `Ok(None)` once the closing `e` is reached. On `Err` this
    /// cursor's position is indeterminate and iteration must stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencursor::Cursor;
    ///
    /// let mut list = Cursor::new(b"l3:foo3:bare").unwrap();
    /// let first = list.list_next().unwrap().unwrap();
    /// assert_eq!(first.string_value().unwrap(), b"foo");
    /// let second = list.list_next().unwrap().unwrap();
    /// assert_eq!(second.string_value().unwrap(), b"bar");
    /// assert!(list.list_next().unwrap().is_none());
    /// ```
    pub fn list_next(&mut self) -> Result<Option<Cursor<'a>>, Error> {
        self.enter_container(b'l', ValueKind::List)?;
        match self.buf.get(self.pos).copied() {
            Some(b'e') => Ok(None),
            None => Err(Error::MissingTerminator),
            Some(_) => {
                let item = self.child(self.pos);
                skip_value(self.buf, &mut self.pos, 0).inspect_err(|e| {
                    tracing::trace!("list element walk failed at offset {}: {e}", self.pos);
                })?;
                Ok(Some(item))
            }
        }
    }

    /// Returns true if the dictionary under the cursor has another entry.
    pub fn dict_has_next(&self) -> bool {
        let at = self.element_pos(b'd');
        matches!(self.buf.get(at), Some(b) if *b != b'e')
    }

    /// Yields the next dictionary entry as a key slice and a value cursor.
    ///
    /// The key aliases the input buffer; the value cursor starts
    /// immediately after the key bytes and shares this cursor's window.
    /// Keys must be byte strings ([`Error::MalformedKey`] otherwise); no
    /// ordering or uniqueness check is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencursor::Cursor;
    ///
    /// let mut dict = Cursor::new(b"d8:intervali1800ee").unwrap();
    /// let (key, value) = dict.dict_next().unwrap().unwrap();
    /// assert_eq!(key, b"interval");
    /// assert_eq!(value.integer_value().unwrap(), 1800);
    /// assert!(dict.dict_next().unwrap().is_none());
    /// ```
    pub fn dict_next(&mut self) -> Result<Option<(&'a [u8], Cursor<'a>)>, Error> {
        self.enter_container(b'd', ValueKind::Dict)?;
        match self.buf.get(self.pos).copied() {
            Some(b'e') => return Ok(None),
            None => return Err(Error::MissingTerminator),
            Some(b) if !b.is_ascii_digit() => return Err(Error::MalformedKey),
            Some(_) => {}
        }

        let rest = &self.buf[self.pos..];
        let (payload_at, key_len) = read_length_prefix(rest).map_err(|_| Error::MalformedKey)?;
        let key_end = payload_at.checked_add(key_len).ok_or(Error::MalformedKey)?;
        if key_end > rest.len() {
            return Err(Error::TruncatedInput);
        }
        let key = &rest[payload_at..key_end];

        let value = self.child(self.pos + key_end);
        self.pos += key_end;
        skip_value(self.buf, &mut self.pos, 0).inspect_err(|e| {
            tracing::trace!("dict value walk failed at offset {}: {e}", self.pos);
        })?;
        Ok(Some((key, value)))
    }

    /// Returns an iterator over the elements of the list under the cursor.
    ///
    /// The iterator walks a copy, so this cursor's position is untouched.
    pub fn items(&self) -> ListItems<'a> {
        ListItems {
            cursor: *self,
            done: false,
        }
    }

    /// Returns an iterator over the entries of the dict under the cursor.
    pub fn entries(&self) -> DictEntries<'a> {
        DictEntries {
            cursor: *self,
            done: false,
        }
    }

    /// Offset of the current element, hopping the opening marker when the
    /// cursor still sits on it.
    fn element_pos(&self, marker: u8) -> usize {
        if self.pos == 0 && self.buf.first() == Some(&marker) {
            1
        } else {
            self.pos
        }
    }

    /// Consumes the opening marker on the first stepping call.
    fn enter_container(&mut self, marker: u8, expected: ValueKind) -> Result<(), Error> {
        if self.pos == 0 {
            if self.buf.first() != Some(&marker) {
                return Err(Error::TypeMismatch { expected });
            }
            self.pos = 1;
        }
        Ok(())
    }
}

/// Iterator over the elements of a bencoded list.
///
/// Yields `Err` at most once; iteration ends after any error.
#[derive(Debug, Clone)]
pub struct ListItems<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Iterator for ListItems<'a> {
    type Item = Result<Cursor<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.list_next() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterator over the entries of a bencoded dictionary.
///
/// Yields `Err` at most once; iteration ends after any error.
#[derive(Debug, Clone)]
pub struct DictEntries<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Iterator for DictEntries<'a> {
    type Item = Result<(&'a [u8], Cursor<'a>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.dict_next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
