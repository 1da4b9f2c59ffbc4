// Defaults used when the host does not configure the odometer explicitly
pub const DEFAULT_MINIMUM: i64 = 0;
pub const DEFAULT_MAXIMUM: i64 = 255;
pub const EXHAUSTED_CURSOR: isize = -1;
