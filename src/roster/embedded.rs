//! Embedded roster
//!
//! Character roster compiled into the binary at build time.

// Include generated roster from build script
include!(concat!(env!("OUT_DIR"), "/characters.rs"));
