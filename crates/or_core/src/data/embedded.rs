//! Default rosters embedded at compile time.
//!
//! Lets the CLI work with no asset files on disk. Parsed on first use and
//! cached for the process lifetime.

use std::sync::OnceLock;

use crate::models::Roster;

/// Attacker roster JSON (compile-time embedded)
pub const ATTACKERS_JSON: &str = include_str!("../../../../data/attackers.json");

/// Defender roster JSON (compile-time embedded)
pub const DEFENDERS_JSON: &str = include_str!("../../../../data/defenders.json");

static ATTACKERS: OnceLock<Roster> = OnceLock::new();
static DEFENDERS: OnceLock<Roster> = OnceLock::new();

fn parse_embedded(json: &str, which: &str) -> Roster {
    match serde_json::from_str(json) {
        Ok(roster) => roster,
        Err(err) => {
            // Same degrade policy as file loads; an empty default roster
            // still renders as five cleared slots.
            log::error!("embedded {which} roster is malformed: {err}");
            Roster::empty()
        }
    }
}

/// Built-in attacker roster.
pub fn default_attackers() -> &'static Roster {
    ATTACKERS.get_or_init(|| parse_embedded(ATTACKERS_JSON, "attacker"))
}

/// Built-in defender roster.
pub fn default_defenders() -> &'static Roster {
    DEFENDERS.get_or_init(|| parse_embedded(DEFENDERS_JSON, "defender"))
}
