//! `identikit-demo` — polymorphic identification scenario.
//!
//! Exercises the identity capability across both entity variants: constructs
//! a person and a vehicle, identifies each through the capability, reassigns
//! both identifiers, and identifies again.

use std::io::{self, Write};

use identikit_core::Identifiable;
use identikit_people::{NationalId, Person};
use identikit_vehicles::{Plate, Vehicle};

/// Write one identification line for anything that carries an identifier.
///
/// Generic over the capability; the concrete identifier type is elided.
pub fn identify<T: Identifiable>(out: &mut impl Write, subject: &T) -> io::Result<()> {
    writeln!(out, "I am {}", subject.id())
}

/// Run the demonstration scenario, writing exactly four lines to `out`.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let mut person = Person::new("Gomez", NationalId::new(1234), "Luis");
    let mut vehicle = Vehicle::new("Rojo", Plate::new("ABC123"));
    tracing::debug!(%person, %vehicle, "constructed entities");

    identify(out, &person)?;
    identify(out, &vehicle)?;

    vehicle.set_id(Plate::new("ABD454"));
    tracing::debug!(plate = %vehicle.id(), "vehicle identifier reassigned");
    person.set_id(NationalId::new(15155));
    tracing::debug!(national_id = %person.id(), "person identifier reassigned");

    identify(out, &person)?;
    identify(out, &vehicle)?;

    Ok(())
}
