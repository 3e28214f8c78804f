//! Shared display labels for state, size, industry and program type codes.
//!
//! Both the engine (diagnosis texts) and API consumers resolve codes through
//! this module so the mappings exist exactly once. Unknown codes echo back
//! unchanged instead of failing.

use crate::models::{CompanySize, Effort, ProgramType};

/// Bundesland code to display name
pub fn state_label(code: &str) -> &str {
    match code {
        "BW" => "Baden-Württemberg",
        "BY" => "Bayern",
        "BE" => "Berlin",
        "BB" => "Brandenburg",
        "HB" => "Bremen",
        "HH" => "Hamburg",
        "HE" => "Hessen",
        "MV" => "Mecklenburg-Vorpommern",
        "NI" => "Niedersachsen",
        "NW" => "Nordrhein-Westfalen",
        "RP" => "Rheinland-Pfalz",
        "SL" => "Saarland",
        "SN" => "Sachsen",
        "ST" => "Sachsen-Anhalt",
        "SH" => "Schleswig-Holstein",
        "TH" => "Thüringen",
        other => other,
    }
}

/// Size class to display label including the employee band
pub fn size_label(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Micro => "Kleinstunternehmen (1-9 MA)",
        CompanySize::Small => "Kleinunternehmen (10-49 MA)",
        CompanySize::Medium => "Mittelstand (50-249 MA)",
        CompanySize::Large => "Großunternehmen (250+ MA)",
    }
}

/// Industry code to display label, as used by onboarding
pub fn industry_label(code: &str) -> &str {
    match code {
        "manufacturing" => "Produktion / Fertigung",
        "it" => "IT / Software",
        "consulting" => "Beratung / Dienstleistung",
        "retail" => "Handel / E-Commerce",
        "healthcare" => "Gesundheit / Medizin",
        "construction" => "Bau / Handwerk",
        "logistics" => "Logistik / Transport",
        "food" => "Lebensmittel / Gastronomie",
        "energy" => "Energie / Umwelt",
        "other" => "Andere",
        other => other,
    }
}

pub fn program_type_label(program_type: ProgramType) -> &'static str {
    match program_type {
        ProgramType::Grant => "Zuschuss",
        ProgramType::Loan => "Förderkredit",
        ProgramType::Tax => "Steuerbonus",
        ProgramType::Guarantee => "Bürgschaft",
    }
}

pub fn effort_label(effort: Effort) -> &'static str {
    match effort {
        Effort::Low => "Gering",
        Effort::Medium => "Mittel",
        Effort::High => "Hoch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(state_label("BY"), "Bayern");
        assert_eq!(state_label("NW"), "Nordrhein-Westfalen");
    }

    #[test]
    fn test_unknown_state_echoes_code() {
        assert_eq!(state_label("XX"), "XX");
    }

    #[test]
    fn test_size_labels_carry_employee_bands() {
        assert_eq!(size_label(CompanySize::Micro), "Kleinstunternehmen (1-9 MA)");
        assert_eq!(size_label(CompanySize::Large), "Großunternehmen (250+ MA)");
    }

    #[test]
    fn test_program_type_labels() {
        assert_eq!(program_type_label(ProgramType::Tax), "Steuerbonus");
    }
}
