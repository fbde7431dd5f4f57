//! End-to-end protocol session: generate randomness for both parties,
//! encode, transmit, measure, sift, and report the distillation counts.

use log::debug;
use rand::Rng;

use crate::channel::QuantumChannel;
use crate::encoding::encode_message;
use crate::error::SessionError;
use crate::measurement::measure_message;
use crate::sifting::{matching_bases, sift};
use crate::states::{random_bases, random_bits};

/// Configuration for one protocol session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of qubits exchanged. Zero is a valid degenerate session
    /// producing empty keys.
    pub num_qubits: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { num_qubits: 20 }
    }
}

/// Outcome of one protocol session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    /// Number of qubits initially exchanged (N).
    pub initial_bit_count: usize,
    /// Positions where Alice's and Bob's bases agreed.
    pub matching_bases_count: usize,
    /// Alice's sifted key.
    pub sender_key: Vec<bool>,
    /// Bob's sifted key. Always the same length as `sender_key`; identical
    /// to it over an honest noiseless channel.
    pub receiver_key: Vec<bool>,
}

impl SessionResult {
    /// Length of the distilled key.
    pub fn final_key_bit_count(&self) -> usize {
        self.sender_key.len()
    }

    /// Fraction of the initial bits surviving sifting (0 for an empty
    /// session). Converges to 0.5 over many runs.
    pub fn retention_ratio(&self) -> f64 {
        if self.initial_bit_count == 0 {
            0.0
        } else {
            self.final_key_bit_count() as f64 / self.initial_bit_count as f64
        }
    }
}

/// Run one complete BB84 session.
///
/// Alice's bits and bases and Bob's bases are drawn independently and
/// uniformly from `rng`; the channel supplies the measurement statistics.
/// The whole run is a single pipeline over one batch of randomness: any
/// failure aborts the session with no partial key.
pub fn run_session<C: QuantumChannel, R: Rng>(
    config: &SessionConfig,
    channel: &mut C,
    rng: &mut R,
) -> Result<SessionResult, SessionError> {
    let n = config.num_qubits;

    let alice_bits = random_bits(n, rng);
    let alice_bases = random_bases(n, rng);
    let bob_bases = random_bases(n, rng);

    let qubits = encode_message(&alice_bits, &alice_bases)?;
    let bob_outcomes = measure_message(channel, qubits, &bob_bases)?;

    let sender_key = sift(&alice_bases, &bob_bases, &alice_bits)?;
    let receiver_key = sift(&alice_bases, &bob_bases, &bob_outcomes)?;

    let matching = matching_bases(&alice_bases, &bob_bases);
    debug!(
        "session: {} qubits, {} matching bases, {} key bits",
        n,
        matching,
        sender_key.len()
    );

    Ok(SessionResult {
        initial_bit_count: n,
        matching_bases_count: matching,
        sender_key,
        receiver_key,
    })
}
