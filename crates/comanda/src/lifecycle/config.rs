//! Runtime configuration, read from the environment (and `.env` when present).

use std::time::Duration;
use tracing::warn;

pub const ACTOR_BUFFER_VAR: &str = "COMANDA_ACTOR_BUFFER";
pub const DELIVERY_DELAY_VAR: &str = "COMANDA_DELIVERY_DELAY_MS";
pub const NOTIFICATION_RETENTION_VAR: &str = "COMANDA_NOTIFICATION_RETENTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Channel capacity of every actor.
    pub actor_buffer: usize,
    /// How long a dispatched order is in transit before it counts as delivered.
    pub delivery_delay: Duration,
    /// Newest notifications kept in the log.
    pub notification_retention: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            delivery_delay: Duration::from_millis(5000),
            notification_retention: 100,
        }
    }
}

impl SystemConfig {
    /// Loads `.env` if there is one, then reads each `COMANDA_*` variable. Missing or
    /// unparseable values keep their default.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: u64| -> u64 {
            match lookup(key) {
                None => default,
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(value) if value > 0 => value,
                    _ => {
                        warn!(key, value = %raw, default, "Ignoring invalid setting");
                        default
                    }
                },
            }
        };

        Self {
            actor_buffer: read(ACTOR_BUFFER_VAR, defaults.actor_buffer as u64) as usize,
            delivery_delay: Duration::from_millis(read(
                DELIVERY_DELAY_VAR,
                defaults.delivery_delay.as_millis() as u64,
            )),
            notification_retention: read(
                NOTIFICATION_RETENTION_VAR,
                defaults.notification_retention as u64,
            ) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_overrides_and_ignores_garbage() {
        let config = SystemConfig::from_lookup(lookup(&[
            (ACTOR_BUFFER_VAR, "8"),
            (DELIVERY_DELAY_VAR, "250"),
            (NOTIFICATION_RETENTION_VAR, "lots"),
        ]));
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.delivery_delay, Duration::from_millis(250));
        assert_eq!(config.notification_retention, 100);
    }

    #[test]
    fn test_zero_buffer_falls_back() {
        let config = SystemConfig::from_lookup(lookup(&[(ACTOR_BUFFER_VAR, "0")]));
        assert_eq!(config.actor_buffer, 32);
    }
}
