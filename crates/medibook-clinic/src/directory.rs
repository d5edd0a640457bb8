//! Doctor directory
//!
//! The directory is seeded once with the demo roster and never changes
//! size. Favorites are session state: they live here so the list screen
//! can stay a pure renderer, and they are gone when the process exits.

use std::collections::HashSet;

use medibook_core::doctor::ProfileStats;
use medibook_core::{Availability, Doctor, DoctorId, Specialty};

use crate::error::{ClinicError, Result};

/// Registry of all doctors plus the session's favorite marks
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    favorites: HashSet<DoctorId>,
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DoctorDirectory {
    /// Build the directory with the demo roster.
    pub fn seeded() -> Self {
        Self {
            doctors: demo_roster(),
            favorites: HashSet::new(),
        }
    }

    /// Every doctor, in roster order.
    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Look a doctor up by id.
    pub fn get(&self, id: DoctorId) -> Result<&Doctor> {
        self.doctors
            .iter()
            .find(|d| d.id == id)
            .ok_or(ClinicError::UnknownDoctor(id))
    }

    /// Doctors whose name or specialization contains `term`,
    /// case-insensitively. An empty term returns the full roster.
    pub fn search(&self, term: &str) -> Vec<&Doctor> {
        self.doctors.iter().filter(|d| d.matches(term)).collect()
    }

    /// Flip the favorite mark for a doctor. Returns the new state.
    pub fn toggle_favorite(&mut self, id: DoctorId) -> bool {
        if !self.favorites.insert(id) {
            self.favorites.remove(&id);
            return false;
        }
        true
    }

    pub fn is_favorite(&self, id: DoctorId) -> bool {
        self.favorites.contains(&id)
    }
}

/// The hard-coded demo roster shown by the list screen.
fn demo_roster() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DoctorId(1),
            name: "Dr. Anjali Sharma".to_string(),
            specialty: Specialty::Cardiologist,
            availability: Availability::AvailableToday,
            bio: "Dr. Anjali has 10+ years of experience in heart care and treatment."
                .to_string(),
            hours: "10:00 AM - 06:00 PM".to_string(),
            credentials: "MBBS, MD (Cardiology)".to_string(),
            stats: ProfileStats {
                patients: 5000,
                years_experience: 10,
                rating: 4.8,
                reviews: 4942,
            },
        },
        Doctor {
            id: DoctorId(2),
            name: "Dr. Rajiv Mehta".to_string(),
            specialty: Specialty::Dermatologist,
            availability: Availability::NotAvailableToday,
            bio: "Dr. Rajiv specializes in skin treatments with 8+ years of practice."
                .to_string(),
            hours: "11:00 AM - 05:00 PM".to_string(),
            credentials: "MBBS, MD (Dermatology)".to_string(),
            stats: ProfileStats {
                patients: 3200,
                years_experience: 8,
                rating: 4.6,
                reviews: 2817,
            },
        },
        Doctor {
            id: DoctorId(3),
            name: "Dr. Neha Verma".to_string(),
            specialty: Specialty::Pediatrician,
            availability: Availability::AvailableToday,
            bio: "Dr. Neha has 6+ years of experience treating children and newborns."
                .to_string(),
            hours: "09:00 AM - 03:00 PM".to_string(),
            credentials: "MBBS, DCH".to_string(),
            stats: ProfileStats {
                patients: 2600,
                years_experience: 6,
                rating: 4.9,
                reviews: 1968,
            },
        },
        Doctor {
            id: DoctorId(4),
            name: "Dr. Arjun Singh".to_string(),
            specialty: Specialty::OrthopedicSurgeon,
            availability: Availability::AvailableToday,
            bio: "Dr. Arjun focuses on bone and joint surgeries with 12+ years of experience."
                .to_string(),
            hours: "12:00 PM - 08:00 PM".to_string(),
            credentials: "MBBS, MS (Orthopedics)".to_string(),
            stats: ProfileStats {
                patients: 6100,
                years_experience: 12,
                rating: 4.7,
                reviews: 5204,
            },
        },
        Doctor {
            id: DoctorId(5),
            name: "Dr. Kavita Rao".to_string(),
            specialty: Specialty::Neurologist,
            availability: Availability::NotAvailableToday,
            bio: "Dr. Kavita has 9+ years of experience in neurological disorders and treatment."
                .to_string(),
            hours: "10:30 AM - 04:30 PM".to_string(),
            credentials: "MBBS, DM (Neurology)".to_string(),
            stats: ProfileStats {
                patients: 4100,
                years_experience: 9,
                rating: 4.5,
                reviews: 3345,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn roster_has_five_doctors() {
        let directory = DoctorDirectory::seeded();
        assert_eq!(directory.all().len(), 5);
    }

    #[rstest]
    #[case("anjali", &["Dr. Anjali Sharma"])]
    #[case("MEHTA", &["Dr. Rajiv Mehta"])]
    #[case("neuro", &["Dr. Kavita Rao"])]
    #[case("dr.", &[
        "Dr. Anjali Sharma",
        "Dr. Rajiv Mehta",
        "Dr. Neha Verma",
        "Dr. Arjun Singh",
        "Dr. Kavita Rao",
    ])]
    #[case("homeopath", &[])]
    fn search_filters_by_name_and_specialty(#[case] term: &str, #[case] expected: &[&str]) {
        let directory = DoctorDirectory::seeded();
        let names: Vec<&str> = directory.search(term).iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_search_returns_everyone() {
        let directory = DoctorDirectory::seeded();
        assert_eq!(directory.search("").len(), directory.all().len());
    }

    #[test]
    fn favorites_toggle_on_and_off() {
        let mut directory = DoctorDirectory::seeded();
        let id = DoctorId(3);
        assert!(!directory.is_favorite(id));
        assert!(directory.toggle_favorite(id));
        assert!(directory.is_favorite(id));
        assert!(!directory.toggle_favorite(id));
        assert!(!directory.is_favorite(id));
    }

    #[test]
    fn unknown_doctor_is_an_error() {
        let directory = DoctorDirectory::seeded();
        assert!(matches!(
            directory.get(DoctorId(99)),
            Err(ClinicError::UnknownDoctor(_))
        ));
    }
}
