/// Battle rules and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Energy restored by a single rest, capped at the hero's maximum.
    pub rest_energy: u32,
    /// Health restored by a Health Potion, capped at the hero's maximum.
    pub health_potion_heal: u32,
    /// Bonus damage granted by a Damage Potion to the next damaging ability.
    pub damage_potion_bonus: u32,
    /// Damage blocked from the next monster attack after a Block Potion.
    pub block_potion_bonus: u32,
    /// Health gained on level up.
    pub level_up_health: u32,
    /// Experience required per hero level (`experience_per_level × level`).
    pub experience_per_level: u32,
    /// Base seed for every roll made during an encounter.
    pub seed: u64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities a hero can know.
    pub const MAX_ABILITIES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REST_ENERGY: u32 = 3;
    pub const DEFAULT_HEALTH_POTION_HEAL: u32 = 5;
    pub const DEFAULT_DAMAGE_POTION_BONUS: u32 = 3;
    pub const DEFAULT_BLOCK_POTION_BONUS: u32 = 2;
    pub const DEFAULT_LEVEL_UP_HEALTH: u32 = 5;
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u32 = 10;

    pub fn new() -> Self {
        Self {
            rest_energy: Self::DEFAULT_REST_ENERGY,
            health_potion_heal: Self::DEFAULT_HEALTH_POTION_HEAL,
            damage_potion_bonus: Self::DEFAULT_DAMAGE_POTION_BONUS,
            block_potion_bonus: Self::DEFAULT_BLOCK_POTION_BONUS,
            level_up_health: Self::DEFAULT_LEVEL_UP_HEALTH,
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
            seed: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
