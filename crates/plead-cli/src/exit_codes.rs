/// Success, regardless of verdict class.
pub const SUCCESS: i32 = 0;
/// Unusable input: missing or malformed answers file, truncated stdin.
pub const CONFIG_ERROR: i32 = 2;
