use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset: {0}")]
    Parse(#[from] json5::Error),
}

/// One input record. `value <= 0` is kept here and filtered at layout time,
/// so callers can still report how many records were dropped.
#[derive(Debug, Clone)]
pub struct Item {
    /// Stable identity used for palette assignment. Unique per dataset;
    /// synthesized from the index when the label is null or duplicated.
    pub id: String,
    pub label: Option<String>,
    pub value: f32,
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub title: Option<String>,
    pub items: Vec<Item>,
}

impl Dataset {
    pub fn positive_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.value > 0.0)
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    label: Option<String>,
    value: f32,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    items: Vec<RawItem>,
}

/// Parses a JSON5 dataset and assigns unique identities.
pub fn parse_dataset(input: &str) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = json5::from_str(input)?;
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    let items = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let label = item.label.filter(|label| !label.trim().is_empty());
            let mut id = match &label {
                Some(label) => label.clone(),
                None => format!("item-{index}"),
            };
            let mut suffix = 2usize;
            while !seen.insert(id.clone()) {
                id = match &label {
                    Some(label) => format!("{label}-{suffix}"),
                    None => format!("item-{index}-{suffix}"),
                };
                suffix += 1;
            }
            Item {
                id,
                label,
                value: item.value,
                color: item.color,
            }
        })
        .collect();
    Ok(Dataset {
        title: raw.title,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json5_with_comments_and_trailing_commas() {
        let dataset = parse_dataset(
            r#"{
                // quarterly numbers
                title: "Q3",
                items: [
                    { label: "North", value: 120, },
                    { label: "South", value: 80 },
                ],
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.title.as_deref(), Some("Q3"));
        assert_eq!(dataset.items.len(), 2);
        assert_eq!(dataset.items[0].id, "North");
    }

    #[test]
    fn null_labels_get_synthetic_identities() {
        let dataset = parse_dataset(
            r#"{ items: [ { label: null, value: 3 }, { value: 5 }, { label: " ", value: 1 } ] }"#,
        )
        .unwrap();
        let ids: Vec<&str> = dataset.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["item-0", "item-1", "item-2"]);
        assert!(dataset.items.iter().all(|i| i.label.is_none()));
    }

    #[test]
    fn duplicate_labels_are_disambiguated() {
        let dataset = parse_dataset(
            r#"{ items: [ { label: "A", value: 1 }, { label: "A", value: 2 }, { label: "A", value: 3 } ] }"#,
        )
        .unwrap();
        let ids: Vec<&str> = dataset.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["A", "A-2", "A-3"]);
    }

    #[test]
    fn positive_items_filters_non_positive_values() {
        let dataset = parse_dataset(
            r#"{ items: [ { label: "A", value: 1 }, { label: "B", value: 0 }, { label: "C", value: -2.5 } ] }"#,
        )
        .unwrap();
        let kept: Vec<&str> = dataset.positive_items().map(|i| i.id.as_str()).collect();
        assert_eq!(kept, ["A"]);
    }

    #[test]
    fn empty_items_list_is_valid() {
        let dataset = parse_dataset("{}").unwrap();
        assert!(dataset.items.is_empty());
        let broken = parse_dataset("{ items: [ { label: 3 } ] }");
        assert!(broken.is_err());
    }
}
