//! Delimited numeric table reading and writing.
//!
//! The rig produces plain delimited files of floating-point columns: camera
//! pose files (tab-delimited, older recordings comma-delimited) and actuator
//! command files (comma-delimited). This module is the I/O collaborator the
//! pipeline delegates to; it knows nothing about angles.

pub mod io;

pub use io::{read_table, write_table, COMMA, TAB};
