//! Choice enums for ormlab entities.
//!
//! Every choice is stored in SQL and serialized by its display label (the
//! value users type, e.g. `"Deluxe"` or `"Chrome OS"`), so the serde rename
//! and `as_str()` always agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Every display label, in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// Return the label used in SQL storage and output.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Look up a variant by its exact label.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| {
                    format!(
                        "'{s}' is not a valid {}; expected one of: {}",
                        stringify!($name),
                        Self::LABELS.join(", ")
                    )
                })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Hotel rooms
// ---------------------------------------------------------------------------

choice_enum! {
    /// Category of a hotel room.
    RoomType {
        Standard => "Standard",
        Deluxe => "Deluxe",
        Suite => "Suite",
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

choice_enum! {
    /// Class of a game character. `Fusion` is only produced by fusing two others.
    CharacterClass {
        Mage => "Mage",
        Warrior => "Warrior",
        Assassin => "Assassin",
        Scout => "Scout",
        Fusion => "Fusion",
    }
}

// ---------------------------------------------------------------------------
// Laptops
// ---------------------------------------------------------------------------

choice_enum! {
    LaptopBrand {
        Asus => "Asus",
        Acer => "Acer",
        Apple => "Apple",
        Lenovo => "Lenovo",
        Dell => "Dell",
    }
}

choice_enum! {
    OperatingSystem {
        Windows => "Windows",
        MacOs => "MacOS",
        Linux => "Linux",
        ChromeOs => "Chrome OS",
    }
}

// ---------------------------------------------------------------------------
// Zoo
// ---------------------------------------------------------------------------

choice_enum! {
    /// Area of expertise of a zookeeper.
    Specialty {
        Mammals => "Mammals",
        Birds => "Birds",
        Reptiles => "Reptiles",
        Others => "Others",
    }
}

// ---------------------------------------------------------------------------
// Managers
// ---------------------------------------------------------------------------

choice_enum! {
    PropertyType {
        House => "House",
        Flat => "Flat",
        Villa => "Villa",
        Cottage => "Cottage",
        Studio => "Studio",
    }
}

choice_enum! {
    Genre {
        Action => "Action",
        Rpg => "RPG",
        Adventure => "Adventure",
        Sports => "Sports",
        Strategy => "Strategy",
    }
}

choice_enum! {
    /// Priority of a planner task.
    Priority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

choice_enum! {
    /// Which flavour of reservation a row holds. Only `Special` can be extended.
    ReservationKind {
        Regular => "Regular",
        Special => "Special",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_through_serde() {
        for genre in Genre::ALL {
            let json = serde_json::to_string(genre).unwrap();
            assert_eq!(json, format!("\"{}\"", genre.as_str()));
            let back: Genre = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *genre);
        }
    }

    #[test]
    fn labels_with_spaces_and_caps() {
        assert_eq!(OperatingSystem::ChromeOs.as_str(), "Chrome OS");
        assert_eq!(Genre::Rpg.to_string(), "RPG");
        assert_eq!(
            "MacOS".parse::<OperatingSystem>().unwrap(),
            OperatingSystem::MacOs
        );
    }

    #[test]
    fn from_str_lists_choices_on_error() {
        let err = "Fish".parse::<Specialty>().unwrap_err();
        assert!(err.contains("Mammals, Birds, Reptiles, Others"));
    }

    #[test]
    fn labels_match_all() {
        assert_eq!(RoomType::ALL.len(), RoomType::LABELS.len());
        assert_eq!(Priority::LABELS, &["Low", "Medium", "High"]);
    }
}
