//! Fixed-length ASN.1 BIT STRING values in pure Rust.
//!
//! `asn1bits-core` provides [`BitString`], a sequence of exactly `len`
//! significant bits packed into `ceil(len / 8)` bytes and read as a
//! big-endian unsigned integer. It offers positional bit access, integer
//! conversion with wrap-around arithmetic, sub-range extraction, and the
//! BIT STRING content-octet form used by BER/DER codecs. The crate is
//! `no_std` compatible; it only needs an allocator.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`serde`** — derives `Serialize`/`Deserialize` on [`BitString`], with
//!   the byte-count invariant checked on the way in.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// The [`BitString`] value type and its bit, integer, and sub-range operations.
pub mod bit_string;
/// Zero-copy reader/writer and the BIT STRING content-octet codec.
pub mod encoding;
/// Error type shared by every fallible operation.
pub mod error;

pub use bit_string::{uint_to_bytes, BitString};
pub use error::InvalidArgument;
