//! In-memory command recorder

use serde::{Deserialize, Serialize};

use super::{Command, ModelingApi};
use crate::error::SectionResult;

/// Records every command it receives, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a log that already holds `commands`
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Count recorded patches
    pub fn patch_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Patch(_)))
            .count()
    }

    /// Count recorded layers
    pub fn layer_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Layer(_)))
            .count()
    }
}

impl ModelingApi for CommandLog {
    fn execute(&mut self, command: &Command) -> SectionResult<()> {
        self.commands.push(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());
        log.execute(&Command::Wipe).unwrap();
        log.execute(&Command::Model { ndm: 2, ndf: 3 }).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.commands()[0], Command::Wipe);
        assert_eq!(log.patch_count(), 0);

        log.clear();
        assert!(log.into_commands().is_empty());
    }

    #[test]
    fn test_from_commands_keeps_order() {
        let mut log = CommandLog::from_commands(vec![Command::Wipe, Command::Model { ndm: 2, ndf: 3 }]);
        log.execute(&Command::FiberSection { tag: 1, gj: 1.0 }).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log.commands()[1], Command::Model { ndm: 2, ndf: 3 });
        assert!(matches!(log.commands()[2], Command::FiberSection { tag: 1, .. }));
    }
}
