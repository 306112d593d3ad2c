//! # SMS Export Ingestion
//!
//! Turns the XML export into the ordered seed the store starts from, and
//! writes a readable JSON copy of it beside the raw data.
//!
//! Extraction rules:
//! - every `<sms>` element below the root becomes a record carrying the six
//!   known attributes, missing ones defaulting to empty strings;
//! - when the export carries no `<sms>` elements at all, every
//!   attribute-bearing element below the root becomes a record of its raw
//!   attribute bag plus `element_tag`;
//! - ids are assigned sequentially from 1 in document order.

mod errors;

pub use errors::{IngestError, IngestResult};

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Value;

use crate::store::{Fields, Record};

/// Attributes copied from `<sms>` elements, in the order the export lists
/// them.
const SMS_ATTRIBUTES: [&str; 6] = [
    "address",
    "body",
    "date",
    "type",
    "readable_date",
    "contact_name",
];

/// Extract the ordered record seed from an SMS export.
pub fn extract_records(xml_path: &Path) -> IngestResult<Vec<Record>> {
    if !xml_path.exists() {
        return Err(IngestError::FileNotFound(xml_path.display().to_string()));
    }

    let mut reader = Reader::from_file(xml_path).map_err(|e| IngestError::Xml(e.to_string()))?;
    let mut buf = Vec::new();

    let mut sms_fields: Vec<Fields> = Vec::new();
    let mut fallback_fields: Vec<Fields> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) => {
                if depth > 0 {
                    collect_element(&element, &mut sms_fields, &mut fallback_fields)?;
                }
                depth += 1;
            }
            Ok(Event::Empty(element)) => {
                if depth > 0 {
                    collect_element(&element, &mut sms_fields, &mut fallback_fields)?;
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(IngestError::Xml(e.to_string())),
        }
        buf.clear();
    }

    let chosen = if sms_fields.is_empty() {
        fallback_fields
    } else {
        sms_fields
    };

    Ok(chosen
        .into_iter()
        .enumerate()
        .map(|(index, fields)| Record::new(index as u64 + 1, fields))
        .collect())
}

/// Persist the seed as a readable JSON artifact, creating parent
/// directories as needed.
pub fn write_artifact(records: &[Record], artifact_path: &Path) -> IngestResult<()> {
    if let Some(parent) = artifact_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(records)?;
    fs::write(artifact_path, content)?;
    Ok(())
}

/// Sort one element into the `<sms>` sequence or the fallback bag.
fn collect_element(
    element: &BytesStart<'_>,
    sms_fields: &mut Vec<Fields>,
    fallback_fields: &mut Vec<Fields>,
) -> IngestResult<()> {
    let attributes = read_attributes(element)?;

    if element.local_name().as_ref() == b"sms" {
        let mut fields = Fields::new();
        for name in SMS_ATTRIBUTES {
            let value = attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default();
            fields.insert(name.to_string(), Value::String(value));
        }
        sms_fields.push(fields);
    } else if !attributes.is_empty() {
        let tag = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
        let mut fields = Fields::new();
        fields.insert("element_tag".to_string(), Value::String(tag));
        for (key, value) in attributes {
            fields.insert(key, Value::String(value));
        }
        fallback_fields.push(fields);
    }

    Ok(())
}

/// Decode an element's attributes as (name, value) pairs in document order.
fn read_attributes(element: &BytesStart<'_>) -> IngestResult<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| IngestError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| IngestError::Xml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}
