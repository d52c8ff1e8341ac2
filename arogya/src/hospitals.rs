//! Static Bangalore hospital directory and recommendation formatting.
//!
//! Pure data plus a deterministic formatter: given a specialty and an
//! urgency flag, [`recommend`] renders the same text every time. Lookups
//! never fail; unknown or unmatched specialties fall back to the general
//! list.

/// Medical department categories used to select a hospital list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Emergency,
    Cardiac,
    Pediatric,
    Orthopedic,
    Dermatology,
    Ophthalmology,
    Psychiatry,
    General,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Emergency => "emergency",
            Specialty::Cardiac => "cardiac",
            Specialty::Pediatric => "pediatric",
            Specialty::Orthopedic => "orthopedic",
            Specialty::Dermatology => "dermatology",
            Specialty::Ophthalmology => "ophthalmology",
            Specialty::Psychiatry => "psychiatry",
            Specialty::General => "general",
        }
    }

    /// Capitalized form used in the recommendation header.
    fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provider entry in the directory.
#[derive(Debug, Clone, Copy)]
pub struct HospitalRecord {
    pub name: &'static str,
    pub phone: &'static str,
    pub area: &'static str,
    pub specialties: &'static [&'static str],
}

const EMERGENCY: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Manipal Hospital",
        phone: "+91-80-2502-4444",
        area: "HAL Airport Road",
        specialties: &["Emergency Care", "Trauma", "24/7 Service"],
    },
    HospitalRecord {
        name: "Fortis Hospital",
        phone: "+91-80-6621-4444",
        area: "Bannerghatta Road",
        specialties: &["Emergency Care", "Cardiac", "24/7 Service"],
    },
    HospitalRecord {
        name: "Apollo Hospital",
        phone: "+91-80-2630-0400",
        area: "Bannerghatta Road",
        specialties: &["Multi-specialty", "Emergency", "24/7 Service"],
    },
    HospitalRecord {
        name: "Columbia Asia",
        phone: "+91-80-6132-0000",
        area: "Whitefield",
        specialties: &["Emergency Care", "General", "24/7 Service"],
    },
];

const CARDIAC: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Narayana Health City",
        phone: "+91-80-7122-2222",
        area: "Bommasandra",
        specialties: &["Cardiac Surgery", "Cardiology", "Heart Specialist"],
    },
    HospitalRecord {
        name: "Fortis Hospital",
        phone: "+91-80-6621-4444",
        area: "Bannerghatta Road",
        specialties: &["Cardiac Care", "Interventional Cardiology"],
    },
    HospitalRecord {
        name: "Apollo Hospital",
        phone: "+91-80-2630-0400",
        area: "Bannerghatta Road",
        specialties: &["Cardiac Care", "Heart Surgery"],
    },
];

const PEDIATRIC: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Rainbow Children's Hospital",
        phone: "+91-80-4967-9999",
        area: "Marathahalli",
        specialties: &["Pediatrics", "Child Care", "NICU"],
    },
    HospitalRecord {
        name: "Manipal Hospital",
        phone: "+91-80-2502-4444",
        area: "HAL Airport Road",
        specialties: &["Pediatrics", "Child Health"],
    },
    HospitalRecord {
        name: "Cloudnine Hospital",
        phone: "+91-80-6910-6910",
        area: "Jayanagar",
        specialties: &["Pediatrics", "Maternity", "Child Care"],
    },
];

const ORTHOPEDIC: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Manipal Hospital",
        phone: "+91-80-2502-4444",
        area: "HAL Airport Road",
        specialties: &["Orthopedics", "Sports Medicine", "Joint Replacement"],
    },
    HospitalRecord {
        name: "Apollo Hospital",
        phone: "+91-80-2630-0400",
        area: "Bannerghatta Road",
        specialties: &["Orthopedics", "Joint Replacement", "Spine Surgery"],
    },
    HospitalRecord {
        name: "Sparsh Hospital",
        phone: "+91-80-4344-4444",
        area: "Yeshwanthpur",
        specialties: &["Orthopedics", "Bone & Joint", "Sports Injuries"],
    },
];

const DERMATOLOGY: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Manipal Hospital",
        phone: "+91-80-2502-4444",
        area: "HAL Airport Road",
        specialties: &["Dermatology", "Skin Care", "Cosmetic Dermatology"],
    },
    HospitalRecord {
        name: "Apollo Hospital",
        phone: "+91-80-2630-0400",
        area: "Bannerghatta Road",
        specialties: &["Dermatology", "Skin Specialist"],
    },
];

const OPHTHALMOLOGY: &[HospitalRecord] = &[
    HospitalRecord {
        name: "Narayana Nethralaya",
        phone: "+91-80-6692-2020",
        area: "Rajajinagar",
        specialties: &["Eye Care", "Ophthalmology", "Vision Correction"],
    },
    HospitalRecord {
        name: "Sankara Eye Hospital",
        phone: "+91-80-2663-0800",
        area: "Pampa Mahakavi Road",
        specialties: &["Eye Care", "Cataract Surgery", "Retina"],
    },
];

const PSYCHIATRY: &[HospitalRecord] = &[
    HospitalRecord {
        name: "NIMHANS",
        phone: "+91-80-2699-5000",
        area: "Hosur Road",
        specialties: &["Mental Health", "Psychiatry", "Psychology"],
    },
    HospitalRecord {
        name: "Manipal Hospital",
        phone: "+91-80-2502-4444",
        area: "HAL Airport Road",
        specialties: &["Psychiatry", "Mental Health", "Counseling"],
    },
];

const GENERAL: &[HospitalRecord] = &[
    HospitalRecord {
        name: "St. John's Medical College Hospital",
        phone: "+91-80-2206-5000",
        area: "Koramangala",
        specialties: &["General Medicine", "Multi-specialty", "Family Medicine"],
    },
    HospitalRecord {
        name: "Victoria Hospital",
        phone: "+91-80-2670-1150",
        area: "K.R. Market",
        specialties: &["Government Hospital", "General", "Multi-specialty"],
    },
    HospitalRecord {
        name: "Fortis Hospital",
        phone: "+91-80-6621-4444",
        area: "Bannerghatta Road",
        specialties: &["Multi-specialty", "General Medicine"],
    },
];

/// Directory lookup. Never fails.
pub fn records(specialty: Specialty) -> &'static [HospitalRecord] {
    match specialty {
        Specialty::Emergency => EMERGENCY,
        Specialty::Cardiac => CARDIAC,
        Specialty::Pediatric => PEDIATRIC,
        Specialty::Orthopedic => ORTHOPEDIC,
        Specialty::Dermatology => DERMATOLOGY,
        Specialty::Ophthalmology => OPHTHALMOLOGY,
        Specialty::Psychiatry => PSYCHIATRY,
        Specialty::General => GENERAL,
    }
}

/// Format the hospital recommendation block for one specialty.
///
/// Deterministic: identical arguments produce byte-identical output.
pub fn recommend(specialty: Specialty, is_complicated: bool) -> String {
    let hospitals = records(specialty);

    let urgency_msg = if is_complicated {
        "\n⚠️ **IMPORTANT:** Your symptoms appear serious. Please seek medical attention promptly.\n"
    } else {
        ""
    };

    let mut response = format!(
        "{urgency_msg}\n**🏥 Recommended Hospitals & Doctors in Bangalore ({}):**\n\n",
        specialty.title()
    );

    for (idx, hospital) in hospitals.iter().enumerate() {
        response.push_str(&format!("{}. **{}**\n", idx + 1, hospital.name));
        response.push_str(&format!("   📞 Phone: {}\n", hospital.phone));
        response.push_str(&format!("   📍 Location: {}, Bangalore\n", hospital.area));
        response.push_str(&format!(
            "   🩺 Specialties: {}\n\n",
            hospital.specialties.join(", ")
        ));
    }

    response.push_str("\n💡 **Next Steps:**\n");
    response.push_str("   • Call ahead to book an appointment\n");
    response.push_str("   • Mention your symptoms when calling\n");
    response.push_str("   • Ask for the earliest available slot\n");

    if is_complicated {
        response
            .push_str("   • **If symptoms worsen, call emergency services (108) immediately**\n");
    }

    response
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_specialty_has_records() {
        for specialty in [
            Specialty::Emergency,
            Specialty::Cardiac,
            Specialty::Pediatric,
            Specialty::Orthopedic,
            Specialty::Dermatology,
            Specialty::Ophthalmology,
            Specialty::Psychiatry,
            Specialty::General,
        ] {
            assert!(!records(specialty).is_empty(), "{specialty} list is empty");
        }
    }

    #[test]
    fn recommend_is_idempotent() {
        let first = recommend(Specialty::Cardiac, true);
        let second = recommend(Specialty::Cardiac, true);
        assert_eq!(first, second);
    }

    #[test]
    fn recommend_lists_every_record_numbered() {
        let text = recommend(Specialty::Orthopedic, false);
        for (idx, hospital) in records(Specialty::Orthopedic).iter().enumerate() {
            assert!(text.contains(&format!("{}. **{}**", idx + 1, hospital.name)));
            assert!(text.contains(hospital.phone));
            assert!(text.contains(hospital.area));
        }
        assert!(text.contains("(Orthopedic)"));
    }

    #[test]
    fn urgency_banner_only_for_complicated_cases() {
        let routine = recommend(Specialty::General, false);
        let urgent = recommend(Specialty::General, true);

        assert!(!routine.contains("IMPORTANT"));
        assert!(!routine.contains("108"));
        assert!(urgent.contains("Your symptoms appear serious"));
        assert!(urgent.contains("call emergency services (108) immediately"));
    }

    #[test]
    fn footer_is_always_present() {
        let text = recommend(Specialty::Psychiatry, false);
        assert!(text.contains("Next Steps"));
        assert!(text.contains("Call ahead to book an appointment"));
    }
}
