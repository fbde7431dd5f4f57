//! The quantum channel capability: single-shot measurement of a prepared
//! qubit in a chosen basis.
//!
//! The core of the protocol only relies on the measurement statistics, not
//! on how they are produced. [`LocalChannel`] samples them directly from a
//! lookup table; a state-vector simulator or real hardware backend slots in
//! behind the same trait.

use rand::Rng;

use crate::error::ChannelError;
use crate::states::{Basis, PreparedQubit};

/// Single-shot measurement capability.
///
/// `measure` consumes the qubit, modeling wavefunction collapse: there is
/// no way to measure the same prepared state twice.
///
/// Implementations must satisfy the BB84 contract: if `basis` equals the
/// qubit's preparation basis, the returned bit equals the encoded bit with
/// probability 1; otherwise the result is uniform over {0, 1}, independent
/// of the encoded bit.
pub trait QuantumChannel {
    fn measure(&mut self, qubit: PreparedQubit, basis: Basis) -> Result<bool, ChannelError>;
}

/// Noiseless local backend sampling the BB84 measurement statistics.
///
/// Owns its RNG so the probabilistic branch (mismatched bases) can be made
/// deterministic in tests by seeding.
#[derive(Debug)]
pub struct LocalChannel<R: Rng> {
    rng: R,
}

impl<R: Rng> LocalChannel<R> {
    pub fn new(rng: R) -> Self {
        LocalChannel { rng }
    }
}

impl<R: Rng> QuantumChannel for LocalChannel<R> {
    fn measure(&mut self, qubit: PreparedQubit, basis: Basis) -> Result<bool, ChannelError> {
        let bit = match (qubit, basis) {
            // Measurement basis matches preparation: deterministic outcome.
            (PreparedQubit::QubitZero, Basis::Computational) => false,
            (PreparedQubit::QubitOne, Basis::Computational) => true,
            (PreparedQubit::QubitPlus, Basis::Superposition) => false,
            (PreparedQubit::QubitMinus, Basis::Superposition) => true,
            // Conjugate basis: the outcome is uniform and carries no
            // information about the encoded bit.
            (PreparedQubit::QubitZero, Basis::Superposition)
            | (PreparedQubit::QubitOne, Basis::Superposition)
            | (PreparedQubit::QubitPlus, Basis::Computational)
            | (PreparedQubit::QubitMinus, Basis::Computational) => self.rng.gen(),
        };
        Ok(bit)
    }
}
