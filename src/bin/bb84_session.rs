use log::info;
use rand::thread_rng;

use bb84_sim::prelude::*;

fn main() {
    env_logger::init();

    let config = SessionConfig::default();
    let mut channel = LocalChannel::new(thread_rng());
    let mut rng = thread_rng();

    info!("running BB84 session with {} qubits", config.num_qubits);
    match run_session(&config, &mut channel, &mut rng) {
        Ok(result) => print!("{}", format_report(&result)),
        Err(e) => {
            eprintln!("session failed: {e}");
            std::process::exit(1);
        }
    }
}
