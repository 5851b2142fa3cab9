//! Flavour-string generation and parsing for spawnable entities.
//!
//! Entities are described by short phrases ("vibrant branching coral",
//! "small darting fish") which are regenerated per spawn and parsed back
//! into mesh parameters. Known gap, preserved from the original design:
//! [`parse_description`] returns `None` for strings it does not
//! recognize instead of raising an error; callers treat an unparseable
//! description as "nothing to build".

use crate::entity::{CoralParams, CoralShape, FishParams, MeshParams, SubmarineParams};

/// Generates a random coral description, e.g. "dull rounded coral".
pub fn coral_description(rng: &mut fastrand::Rng) -> String {
    let color = if rng.bool() { "vibrant" } else { "dull" };
    let shape = if rng.bool() { "branching" } else { "rounded" };
    format!("{color} {shape} coral")
}

/// Generates a random fish description, e.g. "small darting fish".
pub fn fish_description(rng: &mut fastrand::Rng) -> String {
    let size = if rng.bool() { "small" } else { "medium" };
    let behavior = if rng.bool() { "darting" } else { "swimming" };
    format!("{size} {behavior} fish")
}

/// Parses a description phrase into mesh parameters.
///
/// Returns `None` when the phrase names no known entity kind.
#[must_use]
pub fn parse_description(description: &str) -> Option<MeshParams> {
    let words: Vec<&str> = description.split_whitespace().collect();
    let first = words.first().copied().unwrap_or("");
    let second = words.get(1).copied().unwrap_or("");

    if description.contains("coral") {
        Some(MeshParams::Coral(CoralParams {
            color: if first == "vibrant" { 0x00ff_3333 } else { 0x0066_6633 },
            shape: if second == "branching" {
                CoralShape::Branching
            } else {
                CoralShape::Rounded
            },
        }))
    } else if description.contains("fish") {
        Some(MeshParams::FishSchool(crate::entity::FishSchoolParams {
            fish: FishParams {
                size: if first == "small" { 0.5 } else { 1.0 },
                speed: if second == "darting" { 2.0 } else { 1.0 },
                color: 0x0000_77ff,
            },
            count: crate::entity::FISH_PER_SCHOOL,
        }))
    } else if description.contains("submarine") {
        Some(MeshParams::Submarine(SubmarineParams {
            size: if first == "small" { 0.5 } else { 1.0 },
            color: if second == "yellow" { 0x00ff_ff00 } else { 0x0066_6666 },
        }))
    } else {
        None
    }
}
