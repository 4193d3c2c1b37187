// src/clock.rs
//! 経過時間の計測に使う時計。テストでは手動で進められる時計に差し替えるよ⏱️

/// ミリ秒単位の現在時刻を返すもの。
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// 本物の時計。ブラウザでは `Date.now()`、それ以外では `SystemTime` を使う。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// 秒数を "MM:SS" (ゼロ埋め) にする。60分を超えても分はそのまま増えるよ。
pub fn format_elapsed(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(3725), "62:05");
    }

    #[test]
    fn test_manual_clock_is_shared_between_clones() {
        let clock = testing::ManualClock::default();
        let other = clock.clone();
        clock.advance_secs(3);
        assert_eq!(other.now_ms(), 3000);
    }
}
