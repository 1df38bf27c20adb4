//! Remote data status and its mapping to component status

/// Loading state of data owned by the platform API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoteDataState {
    #[default]
    NotStarted,
    Loading,
    Done,
    Error,
}

/// Visual status of an input or dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentStatus {
    #[default]
    Default,
    Loading,
    Error,
    Disabled,
    Valid,
}

impl ComponentStatus {
    /// Whether the component accepts input in this status
    pub fn is_interactive(self) -> bool {
        matches!(self, ComponentStatus::Default | ComponentStatus::Valid)
    }
}

pub fn to_component_status(status: RemoteDataState) -> ComponentStatus {
    match status {
        RemoteDataState::NotStarted => ComponentStatus::Disabled,
        RemoteDataState::Loading => ComponentStatus::Loading,
        RemoteDataState::Error => ComponentStatus::Error,
        RemoteDataState::Done => ComponentStatus::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_component_status() {
        assert_eq!(to_component_status(RemoteDataState::NotStarted), ComponentStatus::Disabled);
        assert_eq!(to_component_status(RemoteDataState::Loading), ComponentStatus::Loading);
        assert_eq!(to_component_status(RemoteDataState::Error), ComponentStatus::Error);
        assert_eq!(to_component_status(RemoteDataState::Done), ComponentStatus::Default);
    }
}
