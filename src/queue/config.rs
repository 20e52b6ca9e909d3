//! Queue configuration
//!
//! The `[queue]` table of the configuration file maps onto `QueueConfig`.
//! Filter frames are listed bottom-to-top and pushed in file order.

use crate::queue::filter::InfoQueueFilter;
use crate::queue::message::{MessageCategory, MessageId, MessageSeverity};
use crate::queue::types::{DEFAULT_MESSAGE_COUNT_LIMIT, UNLIMITED};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakOnConfig {
    pub categories: Vec<MessageCategory>,
    pub severities: Vec<MessageSeverity>,
    pub ids: Vec<MessageId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct QueueConfig {
    /// A count, or the string `"unlimited"`
    #[serde(deserialize_with = "deserialize_limit")]
    pub message_count_limit: u64,
    pub mute_debug_output: bool,
    pub break_on: BreakOnConfig,
    pub storage_filter: Vec<InfoQueueFilter>,
    pub retrieval_filter: Vec<InfoQueueFilter>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            message_count_limit: DEFAULT_MESSAGE_COUNT_LIMIT,
            mute_debug_output: false,
            break_on: BreakOnConfig::default(),
            storage_filter: Vec::new(),
            retrieval_filter: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LimitValue {
    Count(u64),
    Keyword(String),
}

fn deserialize_limit<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match LimitValue::deserialize(deserializer)? {
        LimitValue::Count(count) => Ok(count),
        LimitValue::Keyword(keyword) if keyword.eq_ignore_ascii_case("unlimited") => Ok(UNLIMITED),
        LimitValue::Keyword(other) => Err(D::Error::custom(format!(
            "invalid message count limit '{other}' (expected a number or \"unlimited\")"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::filter::FilterDesc;

    #[test]
    fn test_defaults_when_table_is_empty() {
        let config: QueueConfig = toml::from_str("").unwrap();
        assert_eq!(config, QueueConfig::default());
        assert_eq!(config.message_count_limit, DEFAULT_MESSAGE_COUNT_LIMIT);
    }

    #[test]
    fn test_full_table() {
        let config: QueueConfig = toml::from_str(
            r#"
            message-count-limit = 16
            mute-debug-output = true

            [break-on]
            severities = ["corruption", "error"]
            ids = [42]

            [[storage-filter]]
            deny = { severities = ["message"] }

            [[storage-filter]]
            deny = { severities = ["message", "info"] }

            [[retrieval-filter]]
            allow = { categories = ["execution"] }
            "#,
        )
        .unwrap();

        assert_eq!(config.message_count_limit, 16);
        assert!(config.mute_debug_output);
        assert_eq!(
            config.break_on.severities,
            vec![MessageSeverity::Corruption, MessageSeverity::Error]
        );
        assert_eq!(config.break_on.ids, vec![MessageId(42)]);
        assert_eq!(config.storage_filter.len(), 2);
        assert_eq!(
            config.retrieval_filter[0],
            InfoQueueFilter::allow(
                FilterDesc::default().with_categories([MessageCategory::Execution])
            )
        );
    }

    #[test]
    fn test_unlimited_keyword() {
        let config: QueueConfig = toml::from_str("message-count-limit = \"unlimited\"").unwrap();
        assert_eq!(config.message_count_limit, UNLIMITED);

        let err = toml::from_str::<QueueConfig>("message-count-limit = \"lots\"").unwrap_err();
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_unknown_keys_and_names_are_rejected() {
        assert!(toml::from_str::<QueueConfig>("message-limit = 3").is_err());
        assert!(toml::from_str::<QueueConfig>("[break-on]\nseverities = [\"fatal\"]").is_err());
    }
}
