//! Closed set of supported knot families.

use std::fmt;
use std::str::FromStr;

use knot_core::KnotError;
use serde::{Deserialize, Serialize};

/// Which closed-form formula a knot curve is evaluated with.
///
/// Serialized as its canonical kebab-case name. Parsing accepts the names
/// case-insensitively with `-`, `_` and spaces ignored, plus a few aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KnotFamily {
    #[default]
    Trefoil,
    FigureEight,
    Cinquefoil,
    TorusKnot,
    Lissajous,
    Celtic,
}

impl KnotFamily {
    pub const ALL: [KnotFamily; 6] = [
        KnotFamily::Trefoil,
        KnotFamily::FigureEight,
        KnotFamily::Cinquefoil,
        KnotFamily::TorusKnot,
        KnotFamily::Lissajous,
        KnotFamily::Celtic,
    ];

    /// Canonical name, as written to JSON and accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            KnotFamily::Trefoil => "trefoil",
            KnotFamily::FigureEight => "figure-eight",
            KnotFamily::Cinquefoil => "cinquefoil",
            KnotFamily::TorusKnot => "torus-knot",
            KnotFamily::Lissajous => "lissajous",
            KnotFamily::Celtic => "celtic",
        }
    }
}

impl fmt::Display for KnotFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KnotFamily {
    type Err = KnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "trefoil" => Ok(KnotFamily::Trefoil),
            "figureeight" | "figure8" => Ok(KnotFamily::FigureEight),
            "cinquefoil" | "cinquefoilknot" => Ok(KnotFamily::Cinquefoil),
            "torusknot" | "torus" => Ok(KnotFamily::TorusKnot),
            "lissajous" => Ok(KnotFamily::Lissajous),
            "celtic" | "star" => Ok(KnotFamily::Celtic),
            _ => Err(KnotError::UnsupportedCurveFamily(s.to_string())),
        }
    }
}

impl TryFrom<&str> for KnotFamily {
    type Error = KnotError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for KnotFamily {
    type Error = KnotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KnotFamily> for String {
    fn from(family: KnotFamily) -> Self {
        family.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_parse_back() {
        for family in KnotFamily::ALL {
            assert_eq!(family.name().parse::<KnotFamily>().unwrap(), family);
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("Figure_Eight".parse::<KnotFamily>().unwrap(), KnotFamily::FigureEight);
        assert_eq!("figure8".parse::<KnotFamily>().unwrap(), KnotFamily::FigureEight);
        assert_eq!("CinquefoilKnot".parse::<KnotFamily>().unwrap(), KnotFamily::Cinquefoil);
        assert_eq!("TORUS".parse::<KnotFamily>().unwrap(), KnotFamily::TorusKnot);
        assert_eq!("star".parse::<KnotFamily>().unwrap(), KnotFamily::Celtic);
    }

    #[test]
    fn test_unknown_family_is_an_error() {
        let err = "hopf-link".parse::<KnotFamily>().unwrap_err();
        match err {
            KnotError::UnsupportedCurveFamily(name) => assert_eq!(name, "hopf-link"),
            other => panic!("Expected UnsupportedCurveFamily, got {:?}", other),
        }
        assert!(KnotFamily::try_from("").is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&KnotFamily::TorusKnot).unwrap();
        assert_eq!(json, "\"torus-knot\"");
        let back: KnotFamily = serde_json::from_str("\"Lissajous\"").unwrap();
        assert_eq!(back, KnotFamily::Lissajous);
        assert!(serde_json::from_str::<KnotFamily>("\"unknot\"").is_err());
    }
}
