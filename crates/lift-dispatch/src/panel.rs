//! Hallway call panels.

use lift_core::{Floor, PanelId};

use crate::CallDirection;

/// What pressing a bound hall button does: request a car at a floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CallCommand {
    Up(Floor),
    Down(Floor),
}

impl CallCommand {
    pub fn direction(self) -> CallDirection {
        match self {
            CallCommand::Up(_)   => CallDirection::Up,
            CallCommand::Down(_) => CallDirection::Down,
        }
    }

    pub fn floor(self) -> Floor {
        match self {
            CallCommand::Up(floor) | CallCommand::Down(floor) => floor,
        }
    }
}

/// Anything that accepts hall call commands.  Implemented by
/// [`ElevatorController`][crate::ElevatorController].
pub trait CallSink {
    fn submit(&mut self, command: CallCommand);
}

/// A panel with an up and a down button.
///
/// Holds no state beyond the commands bound to its buttons.  Pressing an
/// unbound button does nothing.
#[derive(Clone, Debug)]
pub struct CallPanel {
    id:   PanelId,
    up:   Option<CallCommand>,
    down: Option<CallCommand>,
}

impl CallPanel {
    pub fn new(id: PanelId) -> Self {
        Self { id, up: None, down: None }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn set_click_up_command(&mut self, command: CallCommand) {
        self.up = Some(command);
    }

    pub fn set_click_down_command(&mut self, command: CallCommand) {
        self.down = Some(command);
    }

    pub fn click_up<S: CallSink + ?Sized>(&self, sink: &mut S) {
        if let Some(command) = self.up {
            sink.submit(command);
        }
    }

    pub fn click_down<S: CallSink + ?Sized>(&self, sink: &mut S) {
        if let Some(command) = self.down {
            sink.submit(command);
        }
    }
}
