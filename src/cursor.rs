use crate::error::{Error, ValueKind};

/// A non-owning, bounds-checked view into a bencoded buffer.
///
/// A cursor never copies bytes: every string or raw span it yields is a
/// sub-slice of the buffer it was created over. Child cursors produced by
/// iteration carry their parent's remaining window, so a nested value can
/// never read past the end of the original input.
///
/// Cursors are `Copy`; cloning one is how a caller re-walks a container
/// without disturbing its own position.
///
/// # Examples
///
/// ```
/// use bencursor::Cursor;
///
/// let cursor = Cursor::new(b"i42e").unwrap();
/// assert!(cursor.is_integer());
/// assert_eq!(cursor.integer_value().unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    pub(crate) buf: &'a [u8],
    pub(crate) pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over a bencoded buffer.
    ///
    /// Fails with [`Error::TruncatedInput`] if the buffer is empty.
    pub fn new(buf: &'a [u8]) -> Result<Self, Error> {
        if buf.is_empty() {
            return Err(Error::TruncatedInput);
        }
        Ok(Cursor { buf, pos: 0 })
    }

    /// Builds a child cursor over the rest of this cursor's window.
    pub(crate) fn child(&self, at: usize) -> Cursor<'a> {
        Cursor {
            buf: &self.buf[at..],
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Classifies the value under the cursor without consuming input.
    ///
    /// Returns `None` if the cursor is exhausted or the leading bytes start
    /// no bencode value (for strings this scans the digit run and requires
    /// the `:` to fall inside the window).
    pub fn kind(&self) -> Option<ValueKind> {
        match self.peek()? {
            b'i' => Some(ValueKind::Integer),
            b'l' => Some(ValueKind::List),
            b'd' => Some(ValueKind::Dict),
            b'0'..=b'9' => {
                let rest = &self.buf[self.pos..];
                let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
                (rest.get(digits) == Some(&b':')).then_some(ValueKind::String)
            }
            _ => None,
        }
    }

    /// Returns true if the cursor is positioned at an integer.
    pub fn is_integer(&self) -> bool {
        self.kind() == Some(ValueKind::Integer)
    }

    /// Returns true if the cursor is positioned at a byte string.
    pub fn is_string(&self) -> bool {
        self.kind() == Some(ValueKind::String)
    }

    /// Returns true if the cursor is positioned at a list.
    pub fn is_list(&self) -> bool {
        self.kind() == Some(ValueKind::List)
    }

    /// Returns true if the cursor is positioned at a dictionary.
    pub fn is_dict(&self) -> bool {
        self.kind() == Some(ValueKind::Dict)
    }

    /// Reads the integer value under the cursor.
    ///
    /// The cursor is not advanced. Only unsigned digit runs are accepted;
    /// a sign character is rejected as [`Error::InvalidInteger`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bencursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"i1800e").unwrap();
    /// assert_eq!(cursor.integer_value().unwrap(), 1800);
    /// ```
    pub fn integer_value(&self) -> Result<i64, Error> {
        if self.peek() != Some(b'i') {
            return Err(Error::TypeMismatch {
                expected: ValueKind::Integer,
            });
        }
        let rest = &self.buf[self.pos + 1..];
        let end = rest
            .iter()
            .position(|&b| b == b'e')
            .ok_or(Error::MissingTerminator)?;
        parse_digits(&rest[..end])
    }

    /// Reads the string value under the cursor as a borrowed slice.
    ///
    /// The cursor is not advanced, and the returned slice aliases the input
    /// buffer. A zero-length string (`0:`) yields an empty slice. Fails
    /// with [`Error::TruncatedInput`] when the length prefix claims more
    /// bytes than remain inside this cursor's window.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"4:spam").unwrap();
    /// assert_eq!(cursor.string_value().unwrap(), b"spam");
    /// ```
    pub fn string_value(&self) -> Result<&'a [u8], Error> {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(Error::TypeMismatch {
                expected: ValueKind::String,
            });
        }
        let rest = &self.buf[self.pos..];
        let (payload_at, len) = read_length_prefix(rest)?;
        let end = payload_at
            .checked_add(len)
            .ok_or(Error::InvalidLengthPrefix)?;
        if end > rest.len() {
            return Err(Error::TruncatedInput);
        }
        Ok(&rest[payload_at..end])
    }
}

/// Reads a `<length>:` prefix at the start of `data`.
///
/// Returns the offset of the first payload byte and the declared length.
pub(crate) fn read_length_prefix(data: &[u8]) -> Result<(usize, usize), Error> {
    let digits = data.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || data.get(digits) != Some(&b':') {
        return Err(Error::InvalidLengthPrefix);
    }
    let mut len = 0usize;
    for &b in &data[..digits] {
        len = len
            .checked_mul(10)
            .and_then(|l| l.checked_add(usize::from(b - b'0')))
            .ok_or(Error::InvalidLengthPrefix)?;
    }
    Ok((digits + 1, len))
}

fn parse_digits(digits: &[u8]) -> Result<i64, Error> {
    if digits.is_empty() {
        return Err(Error::InvalidInteger);
    }
    let mut value = 0i64;
    for &b in digits {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidInteger);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or(Error::InvalidInteger)?;
    }
    Ok(value)
}
