//! Common constants used throughout tombot.

/// Configuration file expected at the top level of every template root
pub const CONFIG_FILE: &str = "config.toml";

/// Character that introduces a template directive
pub const DELIMITER: char = '$';

/// Segment prefix rewritten to a leading `.` in rendered paths
pub const DOT_PREFIX: &str = "dot-";

/// Identifier grammar shared by variable and transformer names
pub const ID_PATTERN: &str = r"[_a-z][_a-z0-9]*";
