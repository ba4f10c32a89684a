use crate::core::errors::PeError;
use std::str::FromStr;

/// The five kinds of component a PE is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    Input,
    Output,
    Register,
    Mux,
    FunctionalUnit,
}

impl ComponentCategory {
    /// All categories, in export order
    pub const ALL: [ComponentCategory; 5] = [
        ComponentCategory::Input,
        ComponentCategory::Output,
        ComponentCategory::Register,
        ComponentCategory::Mux,
        ComponentCategory::FunctionalUnit,
    ];

    /// ID prefix; the ordinal is appended to it
    pub fn prefix(&self) -> &'static str {
        match self {
            ComponentCategory::Input => "in",
            ComponentCategory::Output => "out",
            ComponentCategory::Register => "r",
            ComponentCategory::Mux => "m",
            ComponentCategory::FunctionalUnit => "fu",
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ComponentCategory::Input => "input",
            ComponentCategory::Output => "output",
            ComponentCategory::Register => "register",
            ComponentCategory::Mux => "mux",
            ComponentCategory::FunctionalUnit => "fu",
        }
    }

    /// Drawn icon size (width, height) on the canvas
    pub fn footprint(&self) -> (f64, f64) {
        match self {
            ComponentCategory::Input | ComponentCategory::Output => (50.0, 50.0),
            ComponentCategory::Register => (90.0, 30.0),
            ComponentCategory::Mux => (100.0, 25.0),
            ComponentCategory::FunctionalUnit => (100.0, 50.0),
        }
    }
}

impl FromStr for ComponentCategory {
    type Err = PeError;

    /// Accepts canonical names and the palette labels (`Register`, `MUX`, `FU`), nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(ComponentCategory::Input),
            "output" => Ok(ComponentCategory::Output),
            "register" | "Register" => Ok(ComponentCategory::Register),
            "mux" | "MUX" => Ok(ComponentCategory::Mux),
            "fu" | "FU" => Ok(ComponentCategory::FunctionalUnit),
            _ => Err(PeError::UnknownComponentCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_labels_parse() {
        assert_eq!("input".parse::<ComponentCategory>().unwrap(), ComponentCategory::Input);
        assert_eq!("output".parse::<ComponentCategory>().unwrap(), ComponentCategory::Output);
        assert_eq!("Register".parse::<ComponentCategory>().unwrap(), ComponentCategory::Register);
        assert_eq!("MUX".parse::<ComponentCategory>().unwrap(), ComponentCategory::Mux);
        assert_eq!("FU".parse::<ComponentCategory>().unwrap(), ComponentCategory::FunctionalUnit);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "adder".parse::<ComponentCategory>().unwrap_err();
        assert!(matches!(err, PeError::UnknownComponentCategory(ref name) if name == "adder"));
    }

    #[test]
    fn test_accepted_names_are_exact() {
        let accepted = ["input", "output", "register", "Register", "mux", "MUX", "fu", "FU"];
        for name in accepted {
            assert!(name.parse::<ComponentCategory>().is_ok(), "{} should be accepted", name);
        }

        let rejected = ["Input", "OUTPUT", "REGISTER", "Mux", "Fu", " input", "input ", " INPUT ", ""];
        for name in rejected {
            assert!(name.parse::<ComponentCategory>().is_err(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_prefixes() {
        let prefixes: Vec<&str> = ComponentCategory::ALL.iter().map(|c| c.prefix()).collect();
        assert_eq!(prefixes, vec!["in", "out", "r", "m", "fu"]);
    }

    #[test]
    fn test_footprints() {
        assert_eq!(ComponentCategory::Register.footprint(), (90.0, 30.0));
        assert_eq!(ComponentCategory::Mux.footprint(), (100.0, 25.0));
    }
}
