//! # Byte Cursor
//!
//! This module provides the offset-tracked, bounds-checked cursor the record
//! decoders consume. Every read is big-endian (the container's byte order)
//! and advances the cursor; every read checks bounds first and fails with
//! `DecodeError::TruncatedInput` without advancing, so a failed decode never
//! leaves the cursor past the bytes it actually consumed.
//!
//! ## Consumed Interface
//!
//! | Operation | Bytes | Notes |
//! |-----------|-------|-------|
//! | `read_u8/u16/u32/i32` | 1/2/4/4 | big-endian fixed-width fields |
//! | `skip(n)` | n | reserved/ignored regions |
//! | `read_string` | 1 or 5 + len | length-prefixed, escape-to-wide form |
//! | `read_i32_array(n)` | 4×n | trailing element arrays |
//!
//! ## String Length Convention
//!
//! A string is prefixed by one length byte. The escape value `255` switches
//! to a 4-byte big-endian length that follows it, so the prefix occupies
//! 1 or 5 bytes. This rule is the container's wire convention and must not
//! be changed.

pub mod cursor;

pub use cursor::Cursor;
