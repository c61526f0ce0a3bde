use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use std::path::PathBuf;

/// The name of the per-user data folder under the home directory
pub const DATA_FOLDER: &str = ".issue-tracker";

/// Get the per-user data folder (`~/.issue-tracker`), falling back to the
/// current directory when no home directory is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FOLDER)
}

/// Current time truncated to the millisecond precision used on the wire.
///
/// Truncating here keeps stored timestamps equal to what clients read back.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Format a timestamp as ISO 8601 with milliseconds, e.g. `2024-05-01T12:00:00.000Z`
#[must_use]
pub fn format_iso(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    format_iso(&now())
}

/// Serde adapter for timestamps in the [`format_iso`] form.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "utils_tests_1.rs"]
mod tests;
