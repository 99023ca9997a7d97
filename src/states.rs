use bevy::prelude::*;

/// Whether the fixed-rate tick loop is advancing the star system.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Running,
    Paused,
}

impl AppState {
    pub fn initial(start_paused: bool) -> Self {
        if start_paused {
            Self::Paused
        } else {
            Self::Running
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}
