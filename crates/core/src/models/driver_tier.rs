use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Service level a pricing time slot applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverTier {
    NormalDriver,
    PremiumDriver,
    EliteDriver,
}

impl DriverTier {
    /// All tiers, in the order they are flattened into a payload.
    pub const ALL: [DriverTier; 3] = [
        DriverTier::NormalDriver,
        DriverTier::PremiumDriver,
        DriverTier::EliteDriver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DriverTier::NormalDriver => "normal-driver",
            DriverTier::PremiumDriver => "premium-driver",
            DriverTier::EliteDriver => "elite-driver",
        }
    }

    /// Price a freshly added slot starts with.
    pub fn seed_price(&self) -> f64 {
        match self {
            DriverTier::NormalDriver => 100.0,
            DriverTier::PremiumDriver => 150.0,
            DriverTier::EliteDriver => 200.0,
        }
    }
}

impl fmt::Display for DriverTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DriverTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown driver tier '{}'", s))
    }
}
