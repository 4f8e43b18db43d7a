/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a time-based numeric suffix for cart item ids.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at storefront scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Cart item id: product slug + time-based suffix (e.g. "bolo-andar-83721…").
///
/// Uniqueness is not cryptographically guaranteed; a single interactive
/// customer cannot realistically collide.
pub fn item_id(slug: &str) -> String {
    format!("{slug}-{}", snowflake_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_carries_slug_prefix() {
        let id = item_id("bolo-vulcao");
        assert!(id.starts_with("bolo-vulcao-"));
        let suffix = id.strip_prefix("bolo-vulcao-").unwrap();
        assert!(suffix.parse::<i64>().unwrap() > 0);
    }
}
