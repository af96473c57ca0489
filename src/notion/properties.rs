//! Page properties for an inbox entry.

use serde_json::{Map, Value, json};

use crate::domain::Entry;

/// Builds the database property map for an entry.
///
/// `Tags` is only present when the entry has tags.
pub fn entry_properties(entry: &Entry) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "Name".to_string(),
        json!({ "title": [{ "text": { "content": entry.title() } }] }),
    );
    properties.insert("Type".to_string(), select(entry.entry_type().as_str()));
    properties.insert("Project".to_string(), select(entry.project().as_str()));
    properties.insert("Status".to_string(), select(entry.status().as_str()));
    properties.insert("Source".to_string(), select(entry.source().as_str()));
    properties.insert("Pinned".to_string(), json!({ "checkbox": entry.pinned() }));

    if !entry.tags().is_empty() {
        let options: Vec<Value> = entry
            .tags()
            .iter()
            .map(|tag| json!({ "name": tag }))
            .collect();
        properties.insert("Tags".to_string(), json!({ "multi_select": options }));
    }

    Value::Object(properties)
}

fn select(name: &str) -> Value {
    json!({ "select": { "name": name } })
}
