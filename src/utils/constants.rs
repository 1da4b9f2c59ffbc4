pub const FORMAT_PLACEHOLDER: &str = "{fuzzed_string}";
pub const CHAR_LIMIT: i64 = 256;
