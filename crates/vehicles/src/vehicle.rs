use serde::{Deserialize, Serialize};

use identikit_core::Identifiable;

/// License plate, the vehicle's identifier.
///
/// Any string is a valid plate; no format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(pub String);

impl Plate {
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Plate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Plate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Plate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Plate> for String {
    fn from(value: Plate) -> Self {
        value.0
    }
}

/// Entity: a vehicle, identified by its plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    color: String,
    plate: Plate,
}

impl Vehicle {
    /// Create a vehicle. Accepts any values as-is.
    pub fn new(color: impl Into<String>, plate: Plate) -> Self {
        Self {
            color: color.into(),
            plate,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }
}

impl Identifiable for Vehicle {
    type Id = Plate;

    fn id(&self) -> &Self::Id {
        &self.plate
    }

    fn set_id(&mut self, id: Self::Id) {
        self.plate = id;
    }
}

impl core::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vehicle {{ color: {}, plate: {} }}", self.color, self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vehicle_is_identified_by_its_plate() {
        let vehicle = Vehicle::new("Rojo", Plate::new("ABC123"));

        assert_eq!(vehicle.id(), &Plate::new("ABC123"));
        assert_eq!(vehicle.plate().as_str(), "ABC123");
        assert_eq!(vehicle.color(), "Rojo");
    }

    #[test]
    fn set_id_reassigns_the_plate() {
        let mut vehicle = Vehicle::new("Rojo", Plate::new("ABC123"));

        vehicle.set_id(Plate::new("ABD454"));

        assert_eq!(vehicle.id(), &Plate::new("ABD454"));
        assert_eq!(vehicle.plate().as_str(), "ABD454");
        // Unrelated state is untouched.
        assert_eq!(vehicle.color(), "Rojo");
    }

    #[test]
    fn display_includes_every_attribute() {
        let vehicle = Vehicle::new("Azul", Plate::new("XYZ789"));
        let rendered = vehicle.to_string();

        assert!(rendered.contains("Azul"));
        assert!(rendered.contains("XYZ789"));
    }

    #[test]
    fn plate_converts_to_and_from_strings() {
        let plate: Plate = "ABC123".into();
        assert_eq!(plate.to_string(), "ABC123");

        let raw: String = plate.into();
        assert_eq!(raw, "ABC123");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: set_id followed by id returns exactly the new plate,
            /// for any string (no format restriction).
            #[test]
            fn set_id_round_trips(color in "[A-Za-z]{1,12}", plate in any::<String>()) {
                let mut vehicle = Vehicle::new(color, Plate::new("seed"));

                vehicle.set_id(Plate::new(plate.clone()));

                prop_assert_eq!(vehicle.id(), &Plate::new(plate));
            }

            /// Property: construction stores the plate unmodified.
            #[test]
            fn new_stores_the_plate_unmodified(plate in any::<String>()) {
                let vehicle = Vehicle::new("Rojo", Plate::new(plate.clone()));

                prop_assert_eq!(vehicle.id().as_str(), plate.as_str());
            }
        }
    }
}
