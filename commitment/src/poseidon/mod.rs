//! Poseidon permutation in the circom arrangement.
//!
//! The state is `[0, inputs..]`. Every round adds its constants and raises lanes to the fifth
//! power (all lanes in full rounds, lane zero in partial rounds) before the MDS multiplication. The
//! digest is lane zero after the last round. There is no padding and no domain tag; the width of
//! the instance fixes the number of inputs.

mod constants;

use std::sync::OnceLock;

use halo2_base::halo2_proofs::halo2curves::ff::Field;

use self::constants::{Limbs, T3_MDS, T3_ROUND_CONSTANTS, T4_MDS, T4_ROUND_CONSTANTS};
use crate::{errors::DomainError, Scalar};

/// Full rounds, split evenly before and after the partial rounds.
pub const R_F: usize = 8;

pub const T3_PARTIAL_ROUNDS: usize = 57;

pub const T4_PARTIAL_ROUNDS: usize = 56;

static T3: OnceLock<Poseidon> = OnceLock::new();
static T4: OnceLock<Poseidon> = OnceLock::new();

/// A fixed-width Poseidon instance.
#[derive(Clone, Debug)]
pub struct Poseidon {
    width: usize,
    full_rounds: usize,
    partial_rounds: usize,
    round_constants: Vec<Scalar>,
    mds: Vec<Vec<Scalar>>,
}

impl Poseidon {
    /// Two inputs, one output (`PoseidonT3`).
    pub fn t3() -> &'static Poseidon {
        T3.get_or_init(|| Self::from_limbs(R_F, T3_PARTIAL_ROUNDS, &T3_ROUND_CONSTANTS, &T3_MDS))
    }

    /// Three inputs, one output (`PoseidonT4`).
    pub fn t4() -> &'static Poseidon {
        T4.get_or_init(|| Self::from_limbs(R_F, T4_PARTIAL_ROUNDS, &T4_ROUND_CONSTANTS, &T4_MDS))
    }

    fn from_limbs<const T: usize>(
        full_rounds: usize,
        partial_rounds: usize,
        round_constants: &[Limbs],
        mds: &[[Limbs; T]; T],
    ) -> Self {
        debug_assert_eq!(round_constants.len(), (full_rounds + partial_rounds) * T);

        Self {
            width: T,
            full_rounds,
            partial_rounds,
            round_constants: round_constants.iter().copied().map(Scalar::from_raw).collect(),
            mds: mds
                .iter()
                .map(|row| row.iter().copied().map(Scalar::from_raw).collect())
                .collect(),
        }
    }

    /// Number of field elements in the permutation state.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of inputs absorbed by [`Poseidon::hash`].
    pub fn arity(&self) -> usize {
        self.width - 1
    }

    pub fn hash(&self, inputs: &[Scalar]) -> Result<Scalar, DomainError> {
        if inputs.len() != self.arity() {
            return Err(DomainError::UnsupportedArity(inputs.len()));
        }
        Ok(self.permute(inputs))
    }

    pub(crate) fn permute(&self, inputs: &[Scalar]) -> Scalar {
        debug_assert_eq!(inputs.len(), self.arity());

        let mut state = Vec::with_capacity(self.width);
        state.push(Scalar::ZERO);
        state.extend_from_slice(inputs);

        let half = self.full_rounds / 2;
        for (round, constants) in self.round_constants.chunks(self.width).enumerate() {
            for (lane, constant) in state.iter_mut().zip(constants) {
                *lane += constant;
            }

            if round < half || round >= half + self.partial_rounds {
                state.iter_mut().for_each(|lane| *lane = sbox(*lane));
            } else {
                state[0] = sbox(state[0]);
            }

            state = self.mix(&state);
        }

        state[0]
    }

    fn mix(&self, state: &[Scalar]) -> Vec<Scalar> {
        self.mds
            .iter()
            .map(|row| {
                row.iter()
                    .zip(state)
                    .fold(Scalar::ZERO, |acc, (m, s)| acc + *m * s)
            })
            .collect()
    }
}

fn sbox(x: Scalar) -> Scalar {
    x.square().square() * x
}

/// Hashes two or three field elements with the matching circom instance.
pub fn poseidon_hash(inputs: &[Scalar]) -> Result<Scalar, DomainError> {
    match inputs.len() {
        2 => Poseidon::t3().hash(inputs),
        3 => Poseidon::t4().hash(inputs),
        n => Err(DomainError::UnsupportedArity(n)),
    }
}
