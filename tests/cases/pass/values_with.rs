// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cursor_core::{ContentValues, Value};
use cursor_derive::CursorValue;

mod codec {
    use cursor_core::ContentValues;

    pub fn labels(labels: &Vec<String>) -> Option<ContentValues> {
        if labels.is_empty() {
            return None;
        }
        let mut values = ContentValues::new();
        values.put("labels", labels.join(","));
        values.put("label_count", labels.len() as i64);
        Some(values)
    }
}

#[derive(CursorValue)]
#[cursor(write = "collect_values")]
pub struct Issue {
    pub title: String,

    #[cursor(values_with = "codec::labels")]
    pub labels: Vec<String>,
}

fn main() {
    let issue = Issue {
        title: "crash".to_string(),
        labels: vec!["bug".to_string(), "p1".to_string()],
    };
    let values: ContentValues = issue.collect_values();
    assert_eq!(values.get("labels"), Some(&Value::Text("bug,p1".to_string())));
    assert_eq!(values.get("label_count"), Some(&Value::Integer(2)));

    let bare = Issue {
        title: "typo".to_string(),
        labels: Vec::new(),
    };
    assert_eq!(bare.collect_values().len(), 1);
}
