//! Bob's side of the protocol: measuring the received qubit sequence in his
//! own random bases.

use crate::channel::QuantumChannel;
use crate::error::SessionError;
use crate::states::{Basis, PreparedQubit};

/// Measure every qubit in index order, one shot each, in the receiver's
/// chosen bases.
///
/// Consumes the qubit sequence; outcome `i` is positionally aligned with
/// `qubits[i]` and `bases[i]`. A channel failure aborts the whole run, so
/// no truncated outcome sequence can escape.
pub fn measure_message<C: QuantumChannel>(
    channel: &mut C,
    qubits: Vec<PreparedQubit>,
    bases: &[Basis],
) -> Result<Vec<bool>, SessionError> {
    if qubits.len() != bases.len() {
        return Err(SessionError::LengthMismatch {
            what: "qubits vs receiver bases",
            expected: qubits.len(),
            actual: bases.len(),
        });
    }
    let mut outcomes = Vec::with_capacity(qubits.len());
    for (qubit, &basis) in qubits.into_iter().zip(bases.iter()) {
        outcomes.push(channel.measure(qubit, basis)?);
    }
    Ok(outcomes)
}
