use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the search response array. The server nests every event
/// one level under an `Event` key; the wrapper is kept rather than
/// flattened so re-serialization reproduces the wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Event", default)]
    pub event: Event,
}

/// A threat-intelligence event. Numeric-looking fields (`id`, `timestamp`,
/// `attribute_count`, ...) are strings on purpose: the wire format mixes
/// numeric and string renditions across fields and server versions, so
/// values are kept verbatim and never coerced.
///
/// `galaxy`, `object`, `related_event` and `shadow_attribute` have no stable
/// schema; they are carried as opaque JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub uuid: String,
    pub info: String,
    pub date: String,
    pub timestamp: String,
    pub publish_timestamp: String,
    pub analysis: String,
    pub distribution: String,
    pub threat_level_id: String,
    pub sharing_group_id: String,
    pub attribute_count: String,
    pub extends_uuid: String,
    pub published: bool,
    pub locked: bool,
    pub disable_correlation: bool,
    pub proposal_email_lock: bool,
    pub org_id: String,
    pub orgc_id: String,
    #[serde(rename = "Org")]
    pub org: Org,
    #[serde(rename = "Orgc")]
    pub orgc: Org,
    #[serde(rename = "Attribute")]
    pub attributes: Vec<Attribute>,
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,
    #[serde(rename = "Galaxy")]
    pub galaxy: Value,
    #[serde(rename = "Object")]
    pub object: Value,
    #[serde(rename = "RelatedEvent")]
    pub related_event: Value,
    #[serde(rename = "ShadowAttribute")]
    pub shadow_attribute: Value,
}

/// A single indicator attached to an event, in server order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub id: String,
    pub uuid: String,
    pub event_id: String,
    pub object_id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
    pub comment: String,
    pub distribution: String,
    pub sharing_group_id: String,
    pub timestamp: String,
    pub deleted: bool,
    pub disable_correlation: bool,
    pub to_ids: bool,
    /// Absent, null, a string, or something else entirely depending on the
    /// server; kept as an open value.
    pub object_relation: Value,
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,
    #[serde(rename = "Galaxy")]
    pub galaxy: Value,
    #[serde(rename = "ShadowAttribute")]
    pub shadow_attribute: Value,
}

/// Classification marker. The same shape hangs off events and attributes;
/// each owner holds its own copy by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub colour: String,
    pub user_id: String,
    pub exportable: bool,
    pub hide_tag: bool,
}

/// Organisation sub-record embedded in events as `Org` and `Orgc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Org {
    pub id: String,
    pub name: String,
    pub uuid: String,
}
