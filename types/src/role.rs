use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, err};

/// The two areas of the console. Each role gets its own shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Trainer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
        }
    }

    /// Human readable name shown in the shell header.
    pub fn title(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Trainer => "Trainer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            // Older screens called the trainer area "staff".
            "trainer" | "staff" => Ok(Role::Trainer),
            other => Err(err!("unknown role: {other}")),
        }
    }
}
