use super::*;

#[test]
fn defaults_try_remote_with_advisory_timer() {
    let config = AppConfig::default();
    assert_eq!(config.source_mode, SourceMode::Remote);
    assert_eq!(config.timeout_policy, TimeoutPolicy::Advisory);
}

#[test]
fn delays_convert_to_durations() {
    let config = AppConfig { generation_delay_ms: 250, run_delay_ms: 10, reply_delay_ms: 0, ..AppConfig::default() };
    assert_eq!(config.generation_delay(), Duration::from_millis(250));
    assert_eq!(config.run_delay(), Duration::from_millis(10));
    assert_eq!(config.reply_delay(), Duration::ZERO);
}

#[test]
fn default_delays_match_simulated_backend() {
    let config = AppConfig::default();
    assert_eq!(config.generation_delay(), Duration::from_secs(2));
    assert_eq!(config.reply_delay(), Duration::from_millis(1500));
    assert_eq!(config.recent_activity_limit, 5);
}
