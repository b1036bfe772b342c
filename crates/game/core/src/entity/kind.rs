/// Combatant archetype.
///
/// Kinds are descriptive only: they show up in strike lines and snapshots but
/// carry no rules of their own.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// Warrior - frontline fighter
    Warrior,
    /// Goblin - small, quick, cowardly
    Goblin,
    /// Sentinel - slow, heavily armored guard
    Sentinel,
}
