//! Question generation: one target, a handful of unique distractors,
//! uniformly shuffled presentation order.

use crate::core::rng::SimpleRng;
use crate::data::CountryEntry;

/// Single-use resolution token for one round.
///
/// The first of {player selection, clock expiry} to claim it is
/// authoritative; the loser is ignored.
#[derive(Debug, Clone, Default)]
pub struct ResolutionSlot {
    claimed: bool,
}

impl ResolutionSlot {
    /// Claim the slot. Returns true only for the first caller.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.claimed, true)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}

/// One round's target and its presentation-ordered option set.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    target: CountryEntry,
    options: Vec<CountryEntry>,
}

impl Question {
    pub fn target(&self) -> &CountryEntry {
        &self.target
    }

    pub fn options(&self) -> &[CountryEntry] {
        &self.options
    }

    pub fn is_correct(&self, id: &str) -> bool {
        self.target.id == id
    }
}

/// Build a round's question.
///
/// Distractors are sampled uniformly from `pool \ {target}` without
/// replacement, then the full option set is shuffled with a uniform
/// permutation. Expected O(option_count) sampling for pools comfortably
/// larger than the option count.
///
/// Preconditions (enforced at `start_session`): `option_count >= 1` and
/// `pool.len() >= option_count`.
pub fn next_question(
    pool: &[CountryEntry],
    target_index: usize,
    option_count: usize,
    rng: &mut SimpleRng,
) -> Question {
    debug_assert!(option_count >= 1);
    debug_assert!(pool.len() >= option_count);
    debug_assert!(target_index < pool.len());

    let mut picked: Vec<usize> = Vec::with_capacity(option_count);
    picked.push(target_index);
    while picked.len() < option_count {
        let candidate = rng.next_range(pool.len() as u32) as usize;
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    let mut options: Vec<CountryEntry> = picked.into_iter().map(|i| pool[i].clone()).collect();
    rng.shuffle(&mut options);

    Question {
        target: pool[target_index].clone(),
        options,
    }
}
