//! The BB84 state alphabet: two conjugate bases and the four qubit states
//! they prepare.

use rand::Rng;

/// Preparation/measurement basis for a single qubit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Basis {
    /// Rectilinear (Z) basis: |0⟩ and |1⟩.
    Computational,
    /// Diagonal (X) basis: |+⟩ and |−⟩.
    Superposition,
}

impl Basis {
    /// Draw a basis uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen() {
            Basis::Superposition
        } else {
            Basis::Computational
        }
    }
}

/// One of the four BB84 qubit states.
///
/// Deliberately neither `Copy` nor `Clone`: a prepared qubit is consumed by
/// measurement, so a second measurement of the same state cannot be
/// expressed. |0⟩ is an explicit state like the other three, never an
/// "absence of preparation".
#[derive(Debug, PartialEq, Eq)]
pub enum PreparedQubit {
    /// |0⟩ — bit 0 in the computational basis.
    QubitZero,
    /// |1⟩ — bit 1 in the computational basis.
    QubitOne,
    /// |+⟩ — bit 0 in the superposition basis.
    QubitPlus,
    /// |−⟩ — bit 1 in the superposition basis.
    QubitMinus,
}

impl PreparedQubit {
    /// The basis this state was prepared in.
    pub fn preparation_basis(&self) -> Basis {
        match self {
            PreparedQubit::QubitZero | PreparedQubit::QubitOne => Basis::Computational,
            PreparedQubit::QubitPlus | PreparedQubit::QubitMinus => Basis::Superposition,
        }
    }

    /// The classical bit this state encodes.
    pub fn encoded_bit(&self) -> bool {
        match self {
            PreparedQubit::QubitZero | PreparedQubit::QubitPlus => false,
            PreparedQubit::QubitOne | PreparedQubit::QubitMinus => true,
        }
    }
}

/// Generate `n` independent uniform random bits.
pub fn random_bits<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.gen()).collect()
}

/// Generate `n` independent uniform random basis choices.
pub fn random_bases<R: Rng>(n: usize, rng: &mut R) -> Vec<Basis> {
    (0..n).map(|_| Basis::random(rng)).collect()
}
