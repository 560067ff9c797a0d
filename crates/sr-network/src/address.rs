//! Address labels: lookup and parsing.

use rustc_hash::FxHashMap;

use sr_core::Coord;

use crate::{AddressRecord, NetworkError, NetworkResult};

// ── AddressBook ───────────────────────────────────────────────────────────────

/// Full address label → coordinate.
///
/// Labels are built by [`AddressRecord::label`].  When two rows share a
/// label the later row wins.
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    by_label: FxHashMap<String, Coord>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn from_records(records: &[AddressRecord]) -> Self {
        let mut by_label = FxHashMap::default();
        let mut order = Vec::new();
        for row in records {
            let label = row.label();
            if by_label.insert(label.clone(), row.coord()).is_none() {
                order.push(label);
            }
        }
        tracing::debug!(labels = order.len(), rows = records.len(), "address book built");
        Self { by_label, order }
    }

    /// Coordinate of `label` (surrounding whitespace ignored).
    pub fn resolve(&self, label: &str) -> NetworkResult<Coord> {
        let label = label.trim();
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| NetworkError::UnknownAddress(label.to_owned()))
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── parse_address ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressKind {
    /// A numbered street address.  `number` has its leading zeros removed.
    Street { number: String },
    Motorway,
}

/// The street part of an address label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedAddress {
    pub name: String,
    pub kind: AddressKind,
}

const NUMBER_MARKER: &str = " NUM";
const MOTORWAY_PREFIX: &str = "AUTOVIA";

/// Split an address label into street name and number.
///
/// Two shapes are understood, both matched from the start of the label:
///
/// * `"<name> NUM<digits>…"`, where `<name>` contains no digit:
///   `"CALLE DE ALCALA NUM0012"` → name `"CALLE DE ALCALA"`, number `"12"`;
/// * `"AUTOVIA<whitespace>A-<digits>…"`: `"AUTOVIA A-6"` → name `"A-6"`.
///
/// Anything else is [`NetworkError::AddressFormat`].
pub fn parse_address(label: &str) -> NetworkResult<ParsedAddress> {
    if let Some(parsed) = parse_street(label) {
        return Ok(parsed);
    }
    if let Some(parsed) = parse_motorway(label) {
        return Ok(parsed);
    }
    Err(NetworkError::AddressFormat(label.to_owned()))
}

fn parse_street(label: &str) -> Option<ParsedAddress> {
    let first_digit = label.find(|c: char| c.is_ascii_digit())?;
    let name = label[..first_digit].strip_suffix(NUMBER_MARKER)?;
    if name.is_empty() {
        return None;
    }

    let digits = leading_digits(&label[first_digit..]);
    let number = digits.trim_start_matches('0');
    let number = if number.is_empty() { "0" } else { number };

    Some(ParsedAddress {
        name: name.trim().to_owned(),
        kind: AddressKind::Street { number: number.to_owned() },
    })
}

fn parse_motorway(label: &str) -> Option<ParsedAddress> {
    let rest = label.strip_prefix(MOTORWAY_PREFIX)?;
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    let digits = leading_digits(trimmed.strip_prefix("A-")?);
    if digits.is_empty() {
        return None;
    }
    Some(ParsedAddress {
        name: format!("A-{digits}"),
        kind: AddressKind::Motorway,
    })
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}
