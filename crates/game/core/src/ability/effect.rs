//! Typed outcome of an ability use.

/// Result of resolving an ability.
///
/// Exactly one of `damage`, `healing`, or `block` is meaningfully nonzero per
/// use. `missed` and `critical` only decorate damage effects and are never
/// both set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub damage: u32,
    pub healing: u32,
    pub block: u32,
    pub missed: bool,
    pub critical: bool,
}

impl Effect {
    pub const fn miss() -> Self {
        Self {
            damage: 0,
            healing: 0,
            block: 0,
            missed: true,
            critical: false,
        }
    }

    pub const fn hit(damage: u32) -> Self {
        Self {
            damage,
            healing: 0,
            block: 0,
            missed: false,
            critical: false,
        }
    }

    pub const fn critical(damage: u32) -> Self {
        Self {
            damage,
            healing: 0,
            block: 0,
            missed: false,
            critical: true,
        }
    }

    pub const fn heal(amount: u32) -> Self {
        Self {
            damage: 0,
            healing: amount,
            block: 0,
            missed: false,
            critical: false,
        }
    }

    pub const fn guard(amount: u32) -> Self {
        Self {
            damage: 0,
            healing: 0,
            block: amount,
            missed: false,
            critical: false,
        }
    }

    /// Narrates this effect for the battle log.
    ///
    /// Shape priority: miss, critical, damage, healing, block. Returns `None`
    /// for an empty effect.
    pub fn describe(&self, hero_name: &str, ability_name: &str) -> Option<String> {
        if self.missed {
            Some(format!("{hero_name}'s {ability_name} missed!"))
        } else if self.critical {
            Some(format!(
                "{hero_name}'s {ability_name} landed a critical hit for {} damage!",
                self.damage
            ))
        } else if self.damage > 0 {
            Some(format!(
                "{hero_name} used {ability_name} dealing {} damage!",
                self.damage
            ))
        } else if self.healing > 0 {
            Some(format!(
                "{hero_name} used {ability_name} restoring {} health!",
                self.healing
            ))
        } else if self.block > 0 {
            Some(format!(
                "{hero_name} used {ability_name} gaining {} block!",
                self.block
            ))
        } else {
            None
        }
    }
}
