//! Alice's side of the protocol: turning (bit, basis) pairs into prepared
//! qubit states.

use crate::error::SessionError;
use crate::states::{Basis, PreparedQubit};

/// Prepare a single qubit from a classical bit and a basis choice.
///
/// The mapping is exhaustive: bit 0 in the computational basis is the
/// explicit |0⟩ state, not a degenerate no-op.
pub fn encode(bit: bool, basis: Basis) -> PreparedQubit {
    match (bit, basis) {
        (false, Basis::Computational) => PreparedQubit::QubitZero,
        (true, Basis::Computational) => PreparedQubit::QubitOne,
        (false, Basis::Superposition) => PreparedQubit::QubitPlus,
        (true, Basis::Superposition) => PreparedQubit::QubitMinus,
    }
}

/// Encode Alice's full message: one prepared qubit per index, aligned with
/// the bit and basis sequences.
///
/// The two input slices must be the same length; a mismatch means the
/// caller's sequence generation is broken and is surfaced as a fatal
/// [`SessionError::LengthMismatch`].
pub fn encode_message(bits: &[bool], bases: &[Basis]) -> Result<Vec<PreparedQubit>, SessionError> {
    if bits.len() != bases.len() {
        return Err(SessionError::LengthMismatch {
            what: "sender bits vs sender bases",
            expected: bits.len(),
            actual: bases.len(),
        });
    }
    Ok(bits
        .iter()
        .zip(bases.iter())
        .map(|(&bit, &basis)| encode(bit, basis))
        .collect())
}
