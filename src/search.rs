use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Filter criteria for the event-search endpoint. Chain the setters and
/// hand the result to [`crate::client::Client::search`]:
///
/// ```
/// use chrono::NaiveDate;
/// use mispclient::search::SearchRequest;
///
/// let req = SearchRequest::new()
///     .with_from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
///     .with_to(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap())
///     .with_type("ip-dst");
/// ```
///
/// No validation happens at set time; serialization cannot fail.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    from: NaiveDate,
    to: NaiveDate,
    value: String,
    type_: String,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = to;
        self
    }

    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Serializes the criteria for the wire. `from`/`to` are always emitted
    /// as `YYYY-MM-DD`; a date never set falls back to the
    /// `NaiveDate::default()` sentinel of 1970-01-01, so callers wanting a
    /// meaningful window must set both. `value` and `type` are emitted only
    /// when non-empty — emission is content-driven, so an explicitly set
    /// empty string is indistinguishable from an untouched field.
    pub fn wire_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("from".into(), Value::from(format_wire_date(self.from)));
        body.insert("to".into(), Value::from(format_wire_date(self.to)));

        if !self.value.is_empty() {
            body.insert("value".into(), Value::from(self.value.clone()));
        }
        if !self.type_.is_empty() {
            body.insert("type".into(), Value::from(self.type_.clone()));
        }

        Value::Object(body)
    }
}

fn format_wire_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
