//! RNG oracle for deterministic battle rolls.
//!
//! Every random decision in an encounter (hit checks, critical checks, starting
//! health rolls) is derived from the configured seed, so a battle can be
//! replayed exactly from its seed and the sequence of hero actions.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for percentage-based mechanics like hit and critical chance.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Produces 32-bit output from 64-bit state with a single multiply,
/// xorshift, and rotate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Roll contexts used when one action needs several independent rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollContext {
    Hit,
    Critical,
    Spawn,
}

impl RollContext {
    /// Odd per-context salt folded into the roll seed.
    const fn salt(self) -> u64 {
        match self {
            Self::Hit => 0x243f_6a88_85a3_08d3,
            Self::Critical => 0x1319_8a2e_0370_7345,
            Self::Spawn => 0xa409_3822_299f_31d1,
        }
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Derives the seed for one roll from the battle seed, the action nonce and
/// the roll context.
///
/// The battle seed and nonce are mixed first so that consecutive nonces land
/// far apart; the context salt is applied last and mixed again.
pub fn compute_seed(battle_seed: u64, nonce: u64, context: RollContext) -> u64 {
    let action = splitmix64(battle_seed.wrapping_add(nonce.wrapping_mul(GOLDEN_GAMMA)));
    splitmix64(action ^ context.salt())
}
