/// Wall-clock timestamps are milliseconds since the Unix epoch.
pub type TimestampMs = i64;
