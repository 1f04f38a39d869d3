use std::str::FromStr;

/// Which remembered facts are asserted in a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemoryScope {
    /// Facts for the current cell and its successors.
    Local = 0,

    /// Facts for every visited cell.
    Global,
}

impl std::fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Global => write!(f, "global"),
        }
    }
}

impl MemoryScope {
    /// The minimum MemoryScope type.
    pub const MIN: MemoryScope = MemoryScope::Local;

    /// The maximum MemoryScope type.
    pub const MAX: MemoryScope = MemoryScope::Global;
}

impl FromStr for MemoryScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),

            "global" => Ok(Self::Global),

            _unknown_string => Err(()),
        }
    }
}
