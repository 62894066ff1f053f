//! Potion kinds and the hero's potion bag.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

/// Closed set of potions a hero can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PotionKind {
    #[strum(serialize = "Health Potion")]
    Health,
    #[strum(serialize = "Damage Potion")]
    Damage,
    #[strum(serialize = "Block Potion")]
    Block,
}

/// What drinking a potion did to the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PotionEffect {
    /// Health restored (after capping at max health).
    Healed(u32),
    /// Bonus damage armed for the next damaging ability.
    DamageArmed(u32),
    /// Block armed for the next monster attack.
    BlockArmed(u32),
}

/// Enum-keyed potion counts.
///
/// Every [`PotionKind`] always has an entry, so counts are never missing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionBag {
    counts: BTreeMap<PotionKind, u32>,
}

impl PotionBag {
    /// Creates a bag with zero of every potion.
    pub fn empty() -> Self {
        Self {
            counts: PotionKind::iter().map(|kind| (kind, 0)).collect(),
        }
    }

    /// Creates a bag from `(kind, count)` pairs; unlisted kinds start at zero.
    pub fn with_counts(pairs: impl IntoIterator<Item = (PotionKind, u32)>) -> Self {
        let mut bag = Self::empty();
        for (kind, count) in pairs {
            bag.add(kind, count);
        }
        bag
    }

    pub fn count(&self, kind: PotionKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn add(&mut self, kind: PotionKind, amount: u32) {
        let slot = self.counts.entry(kind).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    /// Removes one potion. Returns `false` without mutating when the slot is empty.
    pub fn take(&mut self, kind: PotionKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn has_any(&self) -> bool {
        self.counts.values().any(|&count| count > 0)
    }

    /// Iterates `(kind, count)` in declaration order of [`PotionKind`].
    pub fn iter(&self) -> impl Iterator<Item = (PotionKind, u32)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }
}

impl Default for PotionBag {
    /// The starter kit: two Health, one Damage, one Block.
    fn default() -> Self {
        Self::with_counts([
            (PotionKind::Health, 2),
            (PotionKind::Damage, 1),
            (PotionKind::Block, 1),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_strum() {
        assert_eq!(PotionKind::Health.to_string(), "Health Potion");
        assert_eq!("block potion".parse::<PotionKind>(), Ok(PotionKind::Block));
        assert!("Mana Potion".parse::<PotionKind>().is_err());
    }

    #[test]
    fn take_refuses_empty_slot() {
        let mut bag = PotionBag::with_counts([(PotionKind::Damage, 1)]);
        assert!(bag.take(PotionKind::Damage));
        assert!(!bag.take(PotionKind::Damage));
        assert_eq!(bag.count(PotionKind::Damage), 0);
        assert!(!bag.has_any());
    }

    #[test]
    fn starter_kit_counts() {
        let bag = PotionBag::default();
        let counts: Vec<_> = bag.iter().collect();
        assert_eq!(
            counts,
            vec![
                (PotionKind::Health, 2),
                (PotionKind::Damage, 1),
                (PotionKind::Block, 1)
            ]
        );
    }
}
