//! Minimal string-ID localization backed by an embedded JSON catalog.

use std::{collections::HashMap, sync::OnceLock};

use serde_json::Value;

static EN_CATALOG: &str = include_str!("../locales/en.json");

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

fn catalog() -> &'static HashMap<String, String> {
    static CATALOG: OnceLock<HashMap<String, String>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut out = HashMap::new();
        match serde_json::from_str::<Value>(EN_CATALOG) {
            Ok(root) => flatten("", &root, &mut out),
            Err(e) => log::error!("invalid locale catalog: {e}"),
        }
        out
    })
}

/// Looks up a dotted message ID such as `login.withGitHub`. Unknown IDs
/// fall back to the ID itself so a missing string stays visible.
pub fn t(key: &str) -> String {
    catalog()
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
