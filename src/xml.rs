//! XML encode/decode helpers.
//!
//! Thin wrappers over `quick-xml`'s serde integration. Requests are emitted
//! with two-space indentation, matching what the processor's sandbox echoes
//! back and keeping logged envelopes readable.

use quick_xml::se::Serializer;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Serializes a value to an indented XML document.
pub(crate) fn to_xml<T: Serialize>(value: &T) -> Result<String> {
    let mut out = String::new();
    let mut serializer = Serializer::new(&mut out);
    serializer.indent(' ', 2);
    value.serialize(serializer)?;
    Ok(out)
}

/// Deserializes a value from an XML document.
pub(crate) fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T> {
    Ok(quick_xml::de::from_str(xml)?)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename = "probe")]
    struct Probe {
        #[serde(rename = "@id")]
        id: String,
        value: String,
    }

    #[test]
    fn test_to_xml_attributes_and_elements() {
        let probe = Probe { id: "7".to_owned(), value: "ok".to_owned() };
        let xml = to_xml(&probe).unwrap();
        assert!(xml.starts_with("<probe id=\"7\">"));
        assert!(xml.contains("<value>ok</value>"));
    }

    #[test]
    fn test_to_xml_indents_children() {
        let probe = Probe { id: "7".to_owned(), value: "ok".to_owned() };
        let xml = to_xml(&probe).unwrap();
        assert!(xml.contains("\n  <value>"));
    }

    #[test]
    fn test_from_xml_round_trip() {
        let probe = Probe { id: "42".to_owned(), value: "text & markup".to_owned() };
        let xml = to_xml(&probe).unwrap();
        let decoded: Probe = from_xml(&xml).unwrap();
        assert_eq!(decoded, probe);
    }

    #[test]
    fn test_from_xml_rejects_garbage() {
        let result: Result<Probe> = from_xml("not xml at all");
        assert!(result.is_err());
    }
}
