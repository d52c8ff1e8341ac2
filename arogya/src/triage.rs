//! Rule-based triage: case complexity, location context, and specialty
//! detection.
//!
//! All matching is case-insensitive substring containment over data tables,
//! evaluated as "first matching category in priority order". Like the
//! emotion classifier there is no tokenization or negation handling; the
//! approximation is deliberate.

use crate::hospitals::Specialty;
use crate::sentiment::contains_any;

/// Per-request triage outcome. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triage {
    pub is_bangalore: bool,
    pub wants_facility: bool,
    pub specialty: Specialty,
    pub is_complicated: bool,
}

// Symptoms that always warrant professional attention.
const SERIOUS_KEYWORDS: &[&str] = &[
    "severe",
    "intense",
    "unbearable",
    "chronic",
    "persistent",
    "blood",
    "bleeding",
    "unconscious",
    "seizure",
    "stroke",
    "heart attack",
    "chest pain",
    "difficulty breathing",
    "can't breathe",
    "suicidal",
    "suicide",
    "kill myself",
    "end my life",
    "broken bone",
    "fracture",
    "accident",
    "injury",
    "high fever",
    "very high temperature",
    "fever for days",
    "swelling",
    "lump",
    "growth",
    "tumor",
    "vision loss",
    "blind",
    "can't see",
    "blurry vision",
    "paralysis",
    "can't move",
    "numbness",
    "vomiting blood",
    "blood in stool",
    "blood in urine",
    "extreme pain",
    "severe pain",
    "excruciating",
    "weeks",
    "months",
    "long time",
    "getting worse",
    "pregnant",
    "pregnancy",
    "miscarriage",
    "allergic reaction",
    "allergy",
    "rash spreading",
    "infection",
    "pus",
    "wound",
    "cut deep",
];

const EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "urgent",
    "critical",
    "immediately",
    "right now",
    "911",
    "108",
    "ambulance",
    "help me",
    "dying",
];

const BANGALORE_KEYWORDS: &[&str] = &["bangalore", "bengaluru", "blr", "karnataka"];

const FACILITY_KEYWORDS: &[&str] = &[
    "hospital",
    "doctor",
    "clinic",
    "medical center",
    "specialist",
    "physician",
    "surgeon",
];

// Specialty triggers in priority order; first match wins, `General` is the
// fallback. Emergency deliberately sits after orthopedic so injuries route
// to a specialist list rather than the generic emergency one.
const SPECIALTY_TRIGGERS: &[(Specialty, &[&str])] = &[
    (
        Specialty::Cardiac,
        &["heart", "cardiac", "chest pain", "heart attack", "palpitation"],
    ),
    (
        Specialty::Pediatric,
        &["child", "baby", "pediatric", "kid", "infant", "toddler"],
    ),
    (
        Specialty::Orthopedic,
        &["bone", "fracture", "joint", "orthopedic", "accident", "injury", "sprain"],
    ),
    (
        Specialty::Emergency,
        &["emergency", "urgent", "immediate", "911", "108", "critical", "severe"],
    ),
    (
        Specialty::Dermatology,
        &["skin", "rash", "acne", "dermatology", "itch"],
    ),
    (
        Specialty::Ophthalmology,
        &["eye", "vision", "ophthalmology", "blind", "see"],
    ),
    (
        Specialty::Psychiatry,
        &["mental", "depression", "anxiety", "psychiatry", "therapy"],
    ),
];

/// True when the case looks complicated enough to push the user towards
/// professional care: a serious symptom, an emergency keyword, or the crude
/// multi-symptom heuristic (two or more "and"/"," occurrences).
fn detect_complicated(text_lower: &str) -> bool {
    let has_serious = contains_any(text_lower, SERIOUS_KEYWORDS);
    let has_emergency = contains_any(text_lower, EMERGENCY_KEYWORDS);

    let symptom_count = text_lower.matches("and").count() + text_lower.matches(',').count();
    let multiple_symptoms = symptom_count >= 2;

    has_serious || has_emergency || multiple_symptoms
}

fn detect_specialty(text_lower: &str) -> Specialty {
    SPECIALTY_TRIGGERS
        .iter()
        .find(|(_, triggers)| contains_any(text_lower, triggers))
        .map(|(specialty, _)| *specialty)
        .unwrap_or(Specialty::General)
}

/// Classify one user message.
pub fn classify(text: &str) -> Triage {
    let text_lower = text.to_lowercase();

    Triage {
        is_bangalore: contains_any(&text_lower, BANGALORE_KEYWORDS),
        wants_facility: contains_any(&text_lower, FACILITY_KEYWORDS),
        specialty: detect_specialty(&text_lower),
        is_complicated: detect_complicated(&text_lower),
    }
}
