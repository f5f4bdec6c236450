//! Breed entities and country grouping.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A cat breed record.
///
/// `country` is only serialized when non-empty: once a record has been placed
/// into its country group the field is cleared and disappears from output.
/// Missing and `null` fields both decode as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub breed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pattern: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub country: String,
}

/// One page of the upstream breed listing.
///
/// `data: null` decodes as an empty page. `last_page` is clamped to
/// `0..=u32::MAX`, with `null` read as 0.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedPage {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<BreedRecord>,
    #[serde(deserialize_with = "page_count")]
    pub last_page: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn page_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = Option::<i64>::deserialize(deserializer)?.unwrap_or_default();
    Ok(u32::try_from(count.clamp(0, i64::from(u32::MAX))).unwrap_or_default())
}

/// Breeds keyed by country name. Records without a country land under `""`.
pub type GroupedBreeds = BTreeMap<String, Vec<BreedRecord>>;

/// Groups records by country, clearing `country` on every record.
///
/// Records keep their input order inside each group.
pub fn group_by_country(records: Vec<BreedRecord>) -> GroupedBreeds {
    let mut grouped = GroupedBreeds::new();

    for mut record in records {
        let country = std::mem::take(&mut record.country);
        grouped.entry(country).or_default().push(record);
    }

    grouped
}
