use serde::Deserialize;

/// One element of the dataset's JSON array, before validation.
///
/// Every field is optional: the dataset omits keys freely and occasionally
/// carries explicit nulls, and a malformed record must be rejected on its own
/// rather than abort the batch. Fields the pipeline does not use are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub location: Option<String>,
    pub applicant: Option<String>,
    pub dayofweekstr: Option<String>,
    pub start24: Option<String>,
    pub end24: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_and_nulls_both_deserialize_to_none() {
        let record: RawRecord = serde_json::from_str(
            r#"{"applicant": "Taco Cart", "location": null, "objectid": "12345"}"#,
        )
        .expect("the record should deserialize");
        assert_eq!(record.applicant.as_deref(), Some("Taco Cart"));
        assert!(record.location.is_none());
        assert!(record.dayofweekstr.is_none());
        assert!(record.start24.is_none());
        assert!(record.end24.is_none());
    }
}
