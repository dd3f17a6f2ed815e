use serde::{Deserialize, Serialize};

/// Reader profile the analysis service tailors its explanations to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Persona {
    #[default]
    #[serde(rename = "General User")]
    GeneralUser,
    Student,
    #[serde(rename = "Small Business")]
    SmallBusiness,
    #[serde(rename = "Senior Citizen")]
    SeniorCitizen,
}

impl Persona {
    /// Value sent in the `persona` form field
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::GeneralUser => "General User",
            Persona::Student => "Student",
            Persona::SmallBusiness => "Small Business",
            Persona::SeniorCitizen => "Senior Citizen",
        }
    }

    /// Icon key understood by the frontend icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            Persona::GeneralUser => "user",
            Persona::Student => "academic-cap",
            Persona::SmallBusiness => "building-office",
            Persona::SeniorCitizen => "user-group",
        }
    }

    pub fn all() -> [Persona; 4] {
        [
            Persona::GeneralUser,
            Persona::Student,
            Persona::SmallBusiness,
            Persona::SeniorCitizen,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.display_name() == name)
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general_user() {
        assert_eq!(Persona::default(), Persona::GeneralUser);
        assert_eq!(Persona::default().to_string(), "General User");
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Persona::SmallBusiness).unwrap();
        assert_eq!(json, "\"Small Business\"");
        let parsed: Persona = serde_json::from_str("\"Senior Citizen\"").unwrap();
        assert_eq!(parsed, Persona::SeniorCitizen);
    }

    #[test]
    fn test_from_display_name() {
        assert_eq!(Persona::from_display_name("Student"), Some(Persona::Student));
        assert_eq!(Persona::from_display_name("Lawyer"), None);
    }
}
