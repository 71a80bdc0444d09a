//! Typed views over D4Sign records.
//!
//! D4Sign listings are loosely shaped: a documents page mixes a pagination
//! header object with document objects, and fields go missing. Records are
//! therefore read as raw JSON and projected here; anything that does not fit
//! is dropped rather than failing the whole page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One page of a paginated listing, as returned by D4Sign.
pub type RawPage = Vec<Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "uuid_safe": "0b9e1c3a-6a2c-4f0e-9d4e-2f1f5b6d7e88", "name_safe": "Contracts" }))]
pub struct Safe {
    #[serde(rename = "uuid_safe")]
    pub id: String,
    #[serde(rename(serialize = "name_safe", deserialize = "name-safe"), alias = "name_safe", default)]
    pub name: String,
}

impl Safe {
    pub fn from_record(record: &Value) -> Option<Self> {
        let object = record.as_object()?;
        Some(Self {
            id: non_empty_str(object, "uuid_safe")?,
            name: non_empty_str(object, "name-safe")
                .or_else(|| non_empty_str(object, "name_safe"))
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "uuidDoc": "5c1d7a0e-3b2f-4a8e-8c55-0e1f2d3c4b5a", "nameDoc": "Contract.pdf" }))]
pub struct DocumentSummary {
    #[serde(rename = "uuidDoc")]
    pub id: String,
    #[serde(rename = "nameDoc", default)]
    pub name: String,
}

impl DocumentSummary {
    /// Records without a non-empty `uuidDoc` yield `None`.
    pub fn from_record(record: &Value) -> Option<Self> {
        let object = record.as_object()?;
        Some(Self {
            id: non_empty_str(object, "uuidDoc")?,
            name: scalar_string(object, "nameDoc").unwrap_or_default(),
        })
    }

    pub fn project_page(page: &[Value]) -> Vec<Self> {
        page.iter().filter_map(Self::from_record).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "name": "Maria Silva", "email": "maria@example.com", "phone": "+5511999990000", "whatsapp": null }))]
pub struct SignerRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
}

impl SignerRecord {
    pub fn from_record(record: &Value) -> Option<Self> {
        let object = record.as_object()?;
        Some(Self {
            name: scalar_string(object, "name").unwrap_or_default(),
            email: scalar_string(object, "email"),
            phone: scalar_string(object, "phone"),
            whatsapp: scalar_string(object, "whatsapp"),
        })
    }

    /// Flattens a signers listing.
    ///
    /// Accepts a bare array of signers, an object with a `list` array, or an
    /// array of such objects (the shape D4Sign actually returns).
    pub fn extract_all(listing: &Value) -> Vec<Self> {
        match listing {
            Value::Array(items) => items
                .iter()
                .flat_map(|item| match item.get("list") {
                    Some(Value::Array(list)) => list.iter().filter_map(Self::from_record).collect::<Vec<_>>(),
                    _ => Self::from_record(item).into_iter().collect::<Vec<_>>(),
                })
                .collect(),
            Value::Object(object) => match object.get("list") {
                Some(Value::Array(list)) => list.iter().filter_map(Self::from_record).collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.whatsapp.is_some()
    }
}

/// Pagination header D4Sign places among the records of a documents page,
/// e.g. `{"total_documents": "12", "total_pages": 2, "current_page": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub current_page: Option<u64>,
    pub total_pages: u64,
}

impl PageHeader {
    pub fn from_record(record: &Value) -> Option<Self> {
        let object = record.as_object()?;
        Some(Self {
            total_pages: unsigned(object, "total_pages")?,
            current_page: unsigned(object, "current_page"),
        })
    }

    /// `requested_page` stands in when the header omits `current_page`.
    pub fn is_last_page(&self, requested_page: u32) -> bool {
        self.current_page.unwrap_or(u64::from(requested_page)) >= self.total_pages
    }
}

fn non_empty_str(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Strings and numbers are both accepted, phone numbers come back as either.
fn scalar_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn unsigned(object: &Map<String, Value>, key: &str) -> Option<u64> {
    match object.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
