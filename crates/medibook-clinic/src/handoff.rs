//! Session handoff store
//!
//! A narrow key-value pass-through used to carry a selected record from one
//! screen to the next, standing in for a browser's session storage. It is
//! owned by the app state and handed to screens explicitly, so the core
//! stays testable without anything browser-like. Values are JSON-encoded;
//! nothing survives the process.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClinicError, Result};

/// Key under which the selected doctor travels between screens
pub const SELECTED_DOCTOR_KEY: &str = "selected-doctor";

/// Session-scoped key-value store
#[derive(Debug, Clone, Default)]
pub struct HandoffStore {
    entries: HashMap<String, Value>,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Fetch and decode the value under `key`, if present.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Fetch the value under `key`, failing with `MissingContext` when it is
    /// absent. Screens that need their handoff record use this and redirect
    /// on the error.
    pub fn require<T: DeserializeOwned>(&self, key: &'static str) -> Result<T> {
        self.get(key)?.ok_or(ClinicError::MissingContext(key))
    }

    /// Drop the entry under `key`.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let mut store = HandoffStore::new();
        store.set("greeting", &"hello".to_string()).unwrap();
        let value: Option<String> = store.get("greeting").unwrap();
        assert_eq!(value.as_deref(), Some("hello"));
    }

    #[test]
    fn get_of_absent_key_is_none() {
        let store = HandoffStore::new();
        let value: Option<String> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn require_of_absent_key_is_missing_context() {
        let store = HandoffStore::new();
        let result: Result<String> = store.require(SELECTED_DOCTOR_KEY);
        assert!(matches!(
            result,
            Err(ClinicError::MissingContext(SELECTED_DOCTOR_KEY))
        ));
    }

    #[test]
    fn set_replaces_and_remove_deletes() {
        let mut store = HandoffStore::new();
        store.set("n", &1u32).unwrap();
        store.set("n", &2u32).unwrap();
        assert_eq!(store.get::<u32>("n").unwrap(), Some(2));
        store.remove("n");
        assert!(!store.contains("n"));
    }

    #[test]
    fn doctors_survive_the_round_trip() {
        use medibook_core::{Availability, Doctor, DoctorId, Specialty};

        let doctor = Doctor {
            id: DoctorId(2),
            name: "Dr. Rajiv Mehta".to_string(),
            specialty: Specialty::Dermatologist,
            availability: Availability::NotAvailableToday,
            bio: "Dr. Rajiv specializes in skin treatments.".to_string(),
            hours: "11:00 AM - 05:00 PM".to_string(),
            credentials: "MBBS, MD".to_string(),
            stats: medibook_core::doctor::ProfileStats {
                patients: 3200,
                years_experience: 8,
                rating: 4.6,
                reviews: 2817,
            },
        };
        let mut store = HandoffStore::new();
        store.set(SELECTED_DOCTOR_KEY, &doctor).unwrap();
        let fetched: Doctor = store.require(SELECTED_DOCTOR_KEY).unwrap();
        assert_eq!(fetched, doctor);
    }
}
