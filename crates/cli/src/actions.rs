//! Doctor dashboard actions, parsed from arguments or stdin lines

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorAction {
    /// Call the next waiting patient
    Call,
    /// Complete the current consultation
    Complete,
    /// Show waiting/completed/total counts
    Stats,
    /// Show the roster table
    List,
    /// Update the consultation time setting
    Minutes(u32),
    /// Stop reading actions
    Quit,
}

impl FromStr for DoctorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(value) = s.strip_prefix("minutes=") {
            return value
                .parse()
                .map(DoctorAction::Minutes)
                .map_err(|_| format!("invalid minutes value: {}", value));
        }
        match s.as_str() {
            "call" | "next" => Ok(DoctorAction::Call),
            "complete" | "done" => Ok(DoctorAction::Complete),
            "stats" => Ok(DoctorAction::Stats),
            "list" | "ls" => Ok(DoctorAction::List),
            "quit" | "exit" => Ok(DoctorAction::Quit),
            other => Err(format!(
                "unknown action '{}' (expected call, complete, stats, list, minutes=N, quit)",
                other
            )),
        }
    }
}
