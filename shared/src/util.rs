/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Build a Snowflake-style i64 from a timestamp and a low-bits sequence.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: caller-supplied sequence (4096 values per ms)
pub fn snowflake_id(timestamp_ms: i64, seq: u16) -> i64 {
    let ts = (timestamp_ms - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    (ts << 12) | i64::from(seq & 0xFFF)
}
