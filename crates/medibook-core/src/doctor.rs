//! Doctor identity and profile types
//!
//! Doctors are seeded from a fixed in-memory directory; there is no backend.
//! The profile carries everything the list, profile, and booking screens
//! render, so a single record can travel through the session handoff store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique doctor identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoctorId(pub u32);

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doctor-{}", self.0)
    }
}

/// Medical specialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialty {
    Cardiologist,
    Dermatologist,
    Pediatrician,
    OrthopedicSurgeon,
    Neurologist,
}

impl Specialty {
    /// Human-readable label as shown on the list and profile screens
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::OrthopedicSurgeon => "Orthopedic Surgeon",
            Specialty::Neurologist => "Neurologist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the doctor is taking appointments today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    AvailableToday,
    NotAvailableToday,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::AvailableToday)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::AvailableToday => "Available today",
            Availability::NotAvailableToday => "Not available today",
        }
    }
}

/// Headline figures shown on the profile stats strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Patients treated, rounded for display ("5,000+")
    pub patients: u32,
    /// Years of practice
    pub years_experience: u8,
    /// Average review score out of 5
    pub rating: f32,
    /// Number of reviews behind the rating
    pub reviews: u32,
}

/// A doctor record as carried between screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: Specialty,
    pub availability: Availability,
    /// Short biography shown on cards and the About section
    pub bio: String,
    /// Consulting hours, e.g. "10:00 AM - 06:00 PM"
    pub hours: String,
    /// Credentials line, e.g. "MBBS, MD (Internal Medicine)"
    pub credentials: String,
    pub stats: ProfileStats,
}

impl Doctor {
    /// True when the search term matches the name or specialization,
    /// case-insensitively
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.specialty.label().to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Doctor {
        Doctor {
            id: DoctorId(1),
            name: "Dr. Anjali Sharma".to_string(),
            specialty: Specialty::Cardiologist,
            availability: Availability::AvailableToday,
            bio: "Dr. Anjali has 10+ years of experience in heart care.".to_string(),
            hours: "10:00 AM - 06:00 PM".to_string(),
            credentials: "MBBS, MD (Specialist)".to_string(),
            stats: ProfileStats {
                patients: 5000,
                years_experience: 10,
                rating: 4.8,
                reviews: 4942,
            },
        }
    }

    #[test]
    fn matches_name_case_insensitive() {
        assert!(doctor().matches("anjali"));
        assert!(doctor().matches("SHARMA"));
    }

    #[test]
    fn matches_specialty() {
        assert!(doctor().matches("cardio"));
        assert!(!doctor().matches("dermat"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(doctor().matches(""));
    }
}
