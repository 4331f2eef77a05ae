//! Zero-copy bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for
//! storing and transmitting structured data, including `.torrent` files and
//! tracker responses.
//!
//! Unlike a tree decoder, this crate never materializes parsed values: a
//! [`Cursor`] is a (buffer, position) view into the input, and walking a
//! list or dictionary yields child cursors that alias the same buffer.
//! Strings come back as borrowed slices; nothing is copied unless the
//! caller asks for it (see [`Cursor::dict_bytes`]).
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Walking a tracker response
//!
//! ```
//! use bencursor::Cursor;
//!
//! let data = b"d8:intervali1800e5:peers0:e";
//! let mut dict = Cursor::new(data).unwrap();
//!
//! let (key, value) = dict.dict_next().unwrap().unwrap();
//! assert_eq!(key, b"interval");
//! assert_eq!(value.integer_value().unwrap(), 1800);
//!
//! let (key, value) = dict.dict_next().unwrap().unwrap();
//! assert_eq!(key, b"peers");
//! assert_eq!(value.string_value().unwrap(), b"");
//!
//! assert!(dict.dict_next().unwrap().is_none());
//! ```
//!
//! ## Iterating a list
//!
//! ```
//! use bencursor::Cursor;
//!
//! let list = Cursor::new(b"l4:spami42ee").unwrap();
//! let items: Vec<_> = list.items().collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(items[0].string_value().unwrap(), b"spam");
//! assert_eq!(items[1].integer_value().unwrap(), 42);
//! ```
//!
//! # Error Handling
//!
//! Walking can fail for various reasons:
//!
//! - [`Error::TruncatedInput`] - A value claims more bytes than remain
//! - [`Error::InvalidLengthPrefix`] - Malformed string length prefix
//! - [`Error::MissingTerminator`] - A container or integer never closes
//! - [`Error::MalformedKey`] - A dictionary key that is not a string
//! - [`Error::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//!
//! An error from `list_next`/`dict_next` is terminal for that container:
//! the cursor's position is indeterminate and iteration must stop.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod cursor;
mod error;
mod iter;
mod skip;
mod span;

pub use cursor::Cursor;
pub use error::{Error, ValueKind};
pub use iter::{DictEntries, ListItems};
