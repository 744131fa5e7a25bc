use crate::models::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One or more human-readable messages for a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessages(pub Vec<String>);

impl From<&str> for ErrorMessages {
    fn from(message: &str) -> Self {
        Self(vec![message.to_string()])
    }
}

impl From<String> for ErrorMessages {
    fn from(message: String) -> Self {
        Self(vec![message])
    }
}

impl From<Vec<String>> for ErrorMessages {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<Vec<&str>> for ErrorMessages {
    fn from(messages: Vec<&str>) -> Self {
        Self(messages.into_iter().map(str::to_string).collect())
    }
}

/// Error messages keyed by field
///
/// Holds one slot per [`Field`]. A slot is either absent or holds at least one
/// message; storing an empty list clears the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Field, Vec<String>>",
    into = "BTreeMap<Field, Vec<String>>"
)]
pub struct FieldErrors {
    slots: [Option<Vec<String>>; Field::ALL.len()],
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.slots[field.index()].as_deref()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }

    /// First message for `field`, the one a form would show inline
    pub fn first_message(&self, field: Field) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Replace the messages for `field`
    pub fn set(&mut self, field: Field, messages: impl Into<ErrorMessages>) {
        let ErrorMessages(messages) = messages.into();
        self.slots[field.index()] = if messages.is_empty() {
            None
        } else {
            Some(messages)
        };
    }

    /// Append one message to `field`
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.slots[field.index()]
            .get_or_insert_with(Vec::new)
            .push(message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<Vec<String>> {
        self.slots[field.index()].take()
    }

    /// Overlay `other` on top of `self`; fields present in `other` win
    pub fn merge(&mut self, other: FieldErrors) {
        for (slot, incoming) in self.slots.iter_mut().zip(other.slots) {
            if incoming.is_some() {
                *slot = incoming;
            }
        }
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Present fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> + '_ {
        Field::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(field, slot)| slot.as_deref().map(|messages| (*field, messages)))
    }

    pub fn fields(&self) -> Vec<Field> {
        self.iter().map(|(field, _)| field).collect()
    }
}

impl From<BTreeMap<Field, Vec<String>>> for FieldErrors {
    fn from(map: BTreeMap<Field, Vec<String>>) -> Self {
        let mut errors = FieldErrors::new();
        for (field, messages) in map {
            errors.set(field, messages);
        }
        errors
    }
}

impl From<FieldErrors> for BTreeMap<Field, Vec<String>> {
    fn from(errors: FieldErrors) -> Self {
        Field::ALL
            .into_iter()
            .zip(errors.slots)
            .filter_map(|(field, slot)| slot.map(|messages| (field, messages)))
            .collect()
    }
}

impl FromIterator<(Field, Vec<String>)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, Vec<String>)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, messages) in iter {
            errors.set(field, messages);
        }
        errors
    }
}
