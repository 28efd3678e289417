//! Fuzz testing for the record decoders.
//!
//! Feeds arbitrary byte sequences and mode flags through the class
//! registry to ensure malformed input is always rejected with an error,
//! never a panic, and that a successful array decode upholds the
//! size/length invariant.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use colref::reader::Cursor;
use colref::records::{ClassRegistry, DecodedRecord};

#[derive(Debug, Arbitrary)]
struct DecodeInput {
    class: FuzzClass,
    memberwise: bool,
    data: Vec<u8>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzClass {
    Scalar,
    Array,
}

impl FuzzClass {
    fn name(self) -> &'static str {
        match self {
            FuzzClass::Scalar => "ScalarRef",
            FuzzClass::Array => "ArrayRef",
        }
    }
}

fuzz_target!(|input: DecodeInput| {
    let registry = ClassRegistry::with_builtin_classes();
    let mut cursor = Cursor::new(&input.data);

    match registry.decode(input.class.name(), &mut cursor, input.memberwise) {
        Ok(DecodedRecord::Scalar(_)) => {
            assert_eq!(cursor.pos(), 12);
        }
        Ok(DecodedRecord::Array(record)) => {
            assert_eq!(record.size() as usize, record.len());
            assert!(cursor.pos() <= input.data.len());
        }
        Err(_) => {}
    }
});
