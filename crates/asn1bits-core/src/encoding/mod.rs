/// BIT STRING content octets: one unused-bits octet followed by the data.
pub mod content;
/// Zero-copy byte reader over a borrowed buffer.
pub mod reader;
/// Byte writer into a caller-owned buffer.
pub mod writer;

pub use content::{decode_content, encode_content};
pub use reader::Reader;
pub use writer::Writer;
