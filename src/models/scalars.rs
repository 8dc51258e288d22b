use serde::Deserialize;

/// Price values arrive either as a decimal string or a JSON number.
/// Variant order is the decode order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(f64),
}

impl PriceValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PriceValue::Text(text) => text.parse().ok(),
            PriceValue::Number(number) => Some(*number),
        }
    }
}

/// Spam flags arrive either as a JSON bool or as "true"/"false" text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SpamValue {
    Flag(bool),
    Text(String),
}

impl SpamValue {
    /// Unrecognized text yields `None` rather than an error.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SpamValue::Flag(flag) => Some(*flag),
            SpamValue::Text(text) => match text.to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}
