//! # bb84-sim
//!
//! Single-shot simulation of the BB84 quantum key distribution protocol
//! over a noiseless channel.
//!
//! Alice encodes random bits in randomly chosen bases (rectilinear Z or
//! diagonal X), Bob measures each qubit in his own random basis, and both
//! parties sift out the positions where their bases disagree. With an
//! honest channel the surviving bits form an identical shared key, roughly
//! half the initial length.
//!
//! The quantum side is abstracted behind the [`channel::QuantumChannel`]
//! trait: matching preparation and measurement bases reproduce the encoded
//! bit with certainty, mismatched bases yield a uniform random bit. The
//! bundled [`channel::LocalChannel`] realizes exactly those statistics;
//! any state-vector simulator or hardware backend satisfying the same
//! contract can be substituted.
//!
//! ## Usage
//!
//! ```
//! use bb84_sim::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut channel = LocalChannel::new(StdRng::seed_from_u64(11));
//! let result = run_session(&SessionConfig::default(), &mut channel, &mut rng).unwrap();
//! assert_eq!(result.sender_key, result.receiver_key);
//! ```

pub mod channel;
pub mod encoding;
pub mod error;
pub mod measurement;
pub mod report;
pub mod session;
pub mod sifting;
pub mod states;

pub mod prelude {
    pub use crate::channel::{LocalChannel, QuantumChannel};
    pub use crate::encoding::{encode, encode_message};
    pub use crate::error::{ChannelError, SessionError};
    pub use crate::measurement::measure_message;
    pub use crate::report::format_report;
    pub use crate::session::{run_session, SessionConfig, SessionResult};
    pub use crate::sifting::{matching_bases, sift};
    pub use crate::states::{random_bases, random_bits, Basis, PreparedQubit};
}
