//! Textual summary of a session: the key-distillation counts as a bar
//! chart plus both parties' keys.

use std::fmt::Write;

use crate::session::SessionResult;

const BAR_WIDTH: usize = 40;

fn key_string(key: &[bool]) -> String {
    key.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn bar_line(out: &mut String, label: &str, count: usize, max: usize) {
    let width = if max == 0 { 0 } else { count * BAR_WIDTH / max };
    let _ = writeln!(out, "{label:<16} {:<BAR_WIDTH$} {count}", "#".repeat(width));
}

/// Render the key-distillation summary for one session.
pub fn format_report(result: &SessionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "BB84 Key Distillation");
    let max = result.initial_bit_count;
    bar_line(&mut out, "Initial Bits", result.initial_bit_count, max);
    bar_line(&mut out, "Matching Bases", result.matching_bases_count, max);
    bar_line(&mut out, "Final Key", result.final_key_bit_count(), max);
    let _ = writeln!(out);
    let _ = writeln!(out, "Alice's key: {}", key_string(&result.sender_key));
    let _ = writeln!(out, "Bob's key:   {}", key_string(&result.receiver_key));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Each party generated {} bits; bases matched at {} positions.",
        result.initial_bit_count, result.matching_bases_count
    );
    let _ = writeln!(
        out,
        "Sifting discarded the non-matching positions, leaving a {}-bit key \
         (about 50% of the initial bits on average).",
        result.final_key_bit_count()
    );
    out
}
