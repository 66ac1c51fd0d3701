//! serde codecs for dates in the GTFS yyyymmdd format.

pub mod gtfs {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(GTFS_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: String = String::deserialize(deserializer)?;
        chrono::NaiveDate::parse_from_str(&date_str, GTFS_DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
    }
}
