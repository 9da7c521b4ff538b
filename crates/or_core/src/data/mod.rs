//! Roster asset loading.
//!
//! Roster files are JSON arrays of operator records. Loads never fail the
//! caller: any IO or parse problem is logged and degrades to an empty
//! roster, which the rest of the system treats as a defined state.

pub mod embedded;

pub use embedded::{default_attackers, default_defenders};

use std::path::Path;

use crate::error::RosterError;
use crate::models::Roster;

/// Read and parse a roster asset.
///
/// The strict variant: IO and parse failures are returned to the caller.
pub fn read_roster(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    let text = std::fs::read_to_string(path)?;
    let roster = serde_json::from_str(&text)?;
    Ok(roster)
}

/// Load a roster, degrading to an empty roster on any failure.
///
/// Failures are logged with the offending path and swallowed; the caller
/// always gets a usable roster back.
pub fn load_roster(path: impl AsRef<Path>) -> Roster {
    let path = path.as_ref();
    match read_roster(path) {
        Ok(roster) => {
            log::info!("loaded {} operators from {}", roster.len(), path.display());
            roster
        }
        Err(err) => {
            log::error!("could not load roster from {}: {err}", path.display());
            Roster::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_roster_parses_a_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "name": "Ash", "iconPath": "icons/attack/ash.png" }}]"#
        )
        .unwrap();

        let roster = read_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Ash");
    }

    #[test]
    fn read_roster_reports_missing_file() {
        let err = read_roster("does/not/exist.json").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn read_roster_reports_malformed_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = read_roster(file.path()).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn load_roster_degrades_to_empty_on_missing_file() {
        let roster = load_roster("does/not/exist.json");
        assert!(roster.is_empty());
    }

    #[test]
    fn load_roster_degrades_to_empty_on_malformed_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"not\": \"an array\" }}").unwrap();

        let roster = load_roster(file.path());
        assert!(roster.is_empty());
    }
}
