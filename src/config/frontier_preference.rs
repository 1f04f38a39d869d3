use std::str::FromStr;

/// Where the decision policy looks for a move once no adjacent cell is known to be the teleporter, glowing, or safe and unvisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrontierPreference {
    /// Adjacent unvisited cells with no conclusion, then stored frontier entries.
    Adjacent = 0,

    /// Stored safe frontier entries, then adjacent unvisited cells with no conclusion, then stored unknown entries.
    Stored,
}

impl std::fmt::Display for FrontierPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adjacent => write!(f, "adjacent"),
            Self::Stored => write!(f, "stored"),
        }
    }
}

impl FrontierPreference {
    /// The minimum FrontierPreference type.
    pub const MIN: FrontierPreference = FrontierPreference::Adjacent;

    /// The maximum FrontierPreference type.
    pub const MAX: FrontierPreference = FrontierPreference::Stored;
}

impl FromStr for FrontierPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(Self::Adjacent),

            "stored" => Ok(Self::Stored),

            _unknown_string => Err(()),
        }
    }
}
