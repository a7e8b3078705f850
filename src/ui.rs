//! Progress reporting for the seeding run
//!
//! A small trait seam so the binary prints to the console while tests run
//! silently (or capture what was reported).

/// Phases shown while a run progresses
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    SeedingDistricts,
    FetchingLocalBodies,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::SeedingDistricts => write!(f, "Seeding districts"),
            Phase::FetchingLocalBodies => write!(f, "Fetching local bodies"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for progress reporting - console for the binary, silent for tests
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn log(&mut self, message: impl Into<String>);
}

/// Prints each phase and log line to stdout
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        println!("\n=== {} ===", phase);
    }

    fn log(&mut self, message: impl Into<String>) {
        println!("{}", message.into());
    }
}

/// Discards phases, keeps log lines for assertions
#[derive(Debug, Default)]
pub struct SilentUi {
    pub messages: Vec<String>,
}

impl SilentUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}

    fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_ui_collects_messages() {
        let mut ui = SilentUi::new();
        ui.set_phase(Phase::FetchingLocalBodies);
        ui.log("one");
        ui.log(String::from("two"));
        assert_eq!(ui.messages, vec!["one", "two"]);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::SeedingDistricts.to_string(), "Seeding districts");
        assert_eq!(Phase::Complete.to_string(), "Complete");
    }
}
