use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single name carried by an edge. Shielded names are route numbers
/// that are signposted inside a shield (e.g. `I-95`, `A1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoadName {
    pub name: String,
    #[serde(default)]
    pub shielded: bool,
}

impl RoadName {
    pub fn new(name: impl Into<String>, shielded: bool) -> Self {
        Self {
            name: name.into(),
            shielded,
        }
    }
}

impl Display for RoadName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.shielded {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
