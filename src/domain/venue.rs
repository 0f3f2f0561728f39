use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five revenue areas of the business. Each maps to one resource path on
/// the backing store, mirroring the per-page API endpoints of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Bar,
    Kitchen,
    Gym,
    GuestHouse,
    Billiard,
}

impl Venue {
    pub const ALL: [Venue; 5] = [
        Venue::Bar,
        Venue::Kitchen,
        Venue::Gym,
        Venue::GuestHouse,
        Venue::Billiard,
    ];

    /// Resource segment used by the store (historically the REST path).
    pub fn resource(&self) -> &'static str {
        match self {
            Venue::Bar => "drinks",
            Venue::Kitchen => "food",
            Venue::Gym => "gym",
            Venue::GuestHouse => "guesthouse",
            Venue::Billiard => "billiard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Venue::Bar => "Bar",
            Venue::Kitchen => "Kitchen",
            Venue::Gym => "Gym",
            Venue::GuestHouse => "Guest House",
            Venue::Billiard => "Billiard",
        }
    }

    /// Venues that split daily takings into cash and mobile money.
    pub fn tracks_momo(&self) -> bool {
        matches!(self, Venue::Gym | Venue::Billiard)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Venue {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "bar" | "drinks" => Ok(Venue::Bar),
            "kitchen" | "food" => Ok(Venue::Kitchen),
            "gym" => Ok(Venue::Gym),
            "guesthouse" | "guest-house" => Ok(Venue::GuestHouse),
            "billiard" => Ok(Venue::Billiard),
            other => Err(format!("unknown venue `{}`", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_resource_aliases() {
        assert_eq!("bar".parse::<Venue>().unwrap(), Venue::Bar);
        assert_eq!("drinks".parse::<Venue>().unwrap(), Venue::Bar);
        assert_eq!("Guest-House".parse::<Venue>().unwrap(), Venue::GuestHouse);
        assert!("pool".parse::<Venue>().is_err());
    }

    #[test]
    fn momo_split_covers_gym_and_billiard() {
        let with_momo: Vec<_> = Venue::ALL.iter().filter(|v| v.tracks_momo()).collect();
        assert_eq!(with_momo, [&Venue::Gym, &Venue::Billiard]);
    }
}
