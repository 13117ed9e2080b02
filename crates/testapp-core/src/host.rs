//! Host name lookup

use std::ffi::OsString;
use std::io;

/// Returns the machine's host name as reported by the operating system.
pub fn hostname() -> io::Result<OsString> {
    hostname::get()
}
