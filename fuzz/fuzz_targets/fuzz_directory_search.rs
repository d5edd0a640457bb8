#![no_main]

use libfuzzer_sys::fuzz_target;
use medibook_clinic::DoctorDirectory;

fuzz_target!(|term: &str| {
    let directory = DoctorDirectory::seeded();

    // Search never panics, and never invents doctors
    let hits = directory.search(term);
    assert!(hits.len() <= directory.all().len());

    if term.is_empty() {
        assert_eq!(hits.len(), directory.all().len());
    }
});
