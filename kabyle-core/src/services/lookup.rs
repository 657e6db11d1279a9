use crate::model::verb::VerbRecord;

use super::normalize::normalize;

/// First record whose normalized name equals the normalized query.
/// Records without a name never match.
pub fn find<'a>(records: &'a [VerbRecord], query: &str) -> Option<&'a VerbRecord> {
    let norm = normalize(query);

    records
        .iter()
        .find(|r| r.name().map(normalize).as_deref() == Some(norm.as_str()))
}

/// Names of the first `limit` records, in dataset order.
pub fn sample_names(records: &[VerbRecord], limit: usize) -> Vec<&str> {
    records
        .iter()
        .take(limit)
        .map(|r| r.name().unwrap_or("N/A"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: serde_json::Value) -> Vec<VerbRecord> {
        serde_json::from_value(v).expect("records should deserialize")
    }

    #[test]
    fn query_is_case_and_whitespace_insensitive() {
        let rs = records(json!([{ "name": "ečč", "id": 1 }, { "name": "addi", "id": 2 }]));

        let found = find(&rs, "ADDI ").expect("addi should be found");
        assert_eq!(found.id_text(), "2");
        assert!(find(&rs, "\tEČČ").is_some());
    }

    #[test]
    fn stored_names_are_normalized_too() {
        let rs = records(json!([{ "name": "  Addi  ", "id": 7 }]));
        assert_eq!(find(&rs, "addi").map(|r| r.id_text()), Some("7"));
    }

    #[test]
    fn unmatched_query_is_not_found() {
        let rs = records(json!([{ "name": "addi" }]));
        assert!(find(&rs, "add").is_none());
        assert!(find(&rs, "addi2").is_none());
        assert!(find(&[], "addi").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let rs = records(json!([
            { "name": "addi", "id": 1 },
            { "name": "ADDI", "id": 2 }
        ]));
        assert_eq!(find(&rs, "addi").map(|r| r.id_text()), Some("1"));
    }

    #[test]
    fn nameless_records_never_match() {
        let rs = records(json!([{ "id": 1 }]));
        assert!(find(&rs, "").is_none());
        assert!(find(&rs, "N/A").is_none());
    }

    #[test]
    fn samples_are_bounded_and_ordered() {
        let items: Vec<_> = (0..15).map(|i| json!({ "name": format!("v{i}") })).collect();
        let rs = records(serde_json::Value::Array(items));

        let names = sample_names(&rs, 10);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "v0");
        assert_eq!(names[9], "v9");

        let few = records(json!([{ "name": "a" }, { "id": 3 }]));
        assert_eq!(sample_names(&few, 10), vec!["a", "N/A"]);
    }
}
