//! # Internal Macros
//!
//! ## be_getters!
//!
//! Generates getter methods for zerocopy struct fields that use big-endian
//! wrapper types (U16, U32, I32). Raw wire-layout structs are read-only, so
//! only getters are generated.
//!
//! ### Usage
//!
//! ```ignore
//! use zerocopy::big_endian::{U16, U32};
//!
//! #[repr(C)]
//! struct RawRecord {
//!     tag: U16,
//!     value: U32,
//! }
//!
//! impl RawRecord {
//!     be_getters! {
//!         tag: u16,
//!         value: u32,
//!     }
//! }
//!
//! // Generates:
//! // pub fn tag(&self) -> u16 { self.tag.get() }
//! // pub fn value(&self) -> u32 { self.value.get() }
//! ```

/// Generates getter methods for zerocopy big-endian fields.
#[macro_export]
macro_rules! be_getters {
    ($($field:ident : $native_ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $field(&self) -> $native_ty {
                self.$field.get()
            }
        )*
    };
}
