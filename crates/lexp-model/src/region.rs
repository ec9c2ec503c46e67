//! Region codes found in the Eurostat life expectancy dataset.
//!
//! The set is closed: every `geo` code that appears in the raw export has a
//! variant here. Aggregates (EU28, EFTA, ...) are regions too, but they are
//! not countries and are left out of [`Region::actual_countries`].

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

macro_rules! regions {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// A country or aggregate code from the `geo` dimension.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Region {
            $($variant,)+
        }

        impl Region {
            /// Every region, in dataset order.
            pub const ALL: &'static [Region] = &[$(Region::$variant),+];

            /// Returns the code as it appears in the dataset.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Region::$variant => $code,)+
                }
            }
        }
    };
}

regions! {
    Al => "AL",
    Am => "AM",
    At => "AT",
    Az => "AZ",
    Be => "BE",
    Bg => "BG",
    By => "BY",
    Ch => "CH",
    Cy => "CY",
    Cz => "CZ",
    De => "DE",
    DeTot => "DE_TOT",
    Dk => "DK",
    Ea18 => "EA18",
    Ea19 => "EA19",
    Ee => "EE",
    Eea30_2007 => "EEA30_2007",
    Eea31 => "EEA31",
    Efta => "EFTA",
    El => "EL",
    Es => "ES",
    Eu27_2007 => "EU27_2007",
    Eu27_2020 => "EU27_2020",
    Eu28 => "EU28",
    Fi => "FI",
    Fr => "FR",
    Fx => "FX",
    Ge => "GE",
    Hr => "HR",
    Hu => "HU",
    Ie => "IE",
    Is => "IS",
    It => "IT",
    Li => "LI",
    Lt => "LT",
    Lu => "LU",
    Lv => "LV",
    Md => "MD",
    Me => "ME",
    Mk => "MK",
    Mt => "MT",
    Nl => "NL",
    No => "NO",
    Pl => "PL",
    Pt => "PT",
    Ro => "RO",
    Rs => "RS",
    Ru => "RU",
    Se => "SE",
    Si => "SI",
    Sk => "SK",
    Sm => "SM",
    Tr => "TR",
    Ua => "UA",
    Uk => "UK",
    Xk => "XK",
}

impl Region {
    /// Returns true for codes that group several countries.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Region::DeTot
                | Region::Ea18
                | Region::Ea19
                | Region::Eea30_2007
                | Region::Eea31
                | Region::Efta
                | Region::Eu27_2007
                | Region::Eu27_2020
                | Region::Eu28
        )
    }

    /// Returns the regions that are actual countries, excluding aggregates.
    pub fn actual_countries() -> Vec<Region> {
        Region::ALL
            .iter()
            .copied()
            .filter(|region| !region.is_aggregate())
            .collect()
    }

    /// Normalizes a free-text code (trim + uppercase) and looks it up.
    ///
    /// Returns `None` when the code does not name a region.
    pub fn lookup(code: &str) -> Option<Region> {
        let normalized = code.trim().to_uppercase();
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == normalized)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = ModelError;

    /// Parse a region code (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::lookup(s).ok_or_else(|| ModelError::UnknownRegion {
            code: s.trim().to_string(),
        })
    }
}
