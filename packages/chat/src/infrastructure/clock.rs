//! System clock backed by the shared JST millisecond timestamp.

use agora_shared::time::get_jst_timestamp;

use crate::domain::{Clock, Timestamp};

/// Wall-clock implementation of [`Clock`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(get_jst_timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances() {
        // テスト項目: SystemClock の時刻は減少しない
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let t1 = clock.now();
        let t2 = clock.now();

        // then (期待する結果):
        assert!(t2 >= t1);
        assert!(t1.value() > 0);
    }
}
