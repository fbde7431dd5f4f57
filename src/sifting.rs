//! Key sifting: after the public basis comparison, both parties discard
//! every position where their basis choices disagree.

use crate::error::SessionError;
use crate::states::Basis;

/// Keep `values[i]` for every position where the two basis sequences
/// agree, in index order.
///
/// A stable filter: the output is the input restricted to matching
/// positions, never reordered. Called twice per session with the same two
/// basis sequences (once over Alice's bits, once over Bob's outcomes), so
/// both keys select the identical index set and always have equal length.
///
/// All three sequences must have the same length. Silently truncating to
/// the shortest would hide a desynchronized key, so a mismatch is fatal.
pub fn sift(
    sender_bases: &[Basis],
    receiver_bases: &[Basis],
    values: &[bool],
) -> Result<Vec<bool>, SessionError> {
    if sender_bases.len() != receiver_bases.len() {
        return Err(SessionError::LengthMismatch {
            what: "sender bases vs receiver bases",
            expected: sender_bases.len(),
            actual: receiver_bases.len(),
        });
    }
    if values.len() != sender_bases.len() {
        return Err(SessionError::LengthMismatch {
            what: "bases vs sifted values",
            expected: sender_bases.len(),
            actual: values.len(),
        });
    }
    Ok(sender_bases
        .iter()
        .zip(receiver_bases.iter())
        .zip(values.iter())
        .filter(|((a, b), _)| a == b)
        .map(|(_, &value)| value)
        .collect())
}

/// Number of positions where the two basis sequences agree.
pub fn matching_bases(sender_bases: &[Basis], receiver_bases: &[Basis]) -> usize {
    sender_bases
        .iter()
        .zip(receiver_bases.iter())
        .filter(|(a, b)| a == b)
        .count()
}
