//! Readers and writers for the standard text and binary interchange formats.

mod wkb;
mod wkt;

pub use self::wkb::{ByteOrder, WkbReader, WkbWriter, WkbWriterOptions};
pub use self::wkt::{WktReader, WktWriter, WktWriterOptions};
