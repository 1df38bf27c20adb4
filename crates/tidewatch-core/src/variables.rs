//! Query variables created from the variables overlay

use crate::store::Action;

pub const FLUX: &str = "flux";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableArguments {
    Query { query: String, language: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub id: Option<String>,
    pub org_id: String,
    pub name: String,
    pub arguments: VariableArguments,
}

/// Form state of the create-variable overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableDraft {
    pub name: String,
    pub script: String,
}

impl VariableDraft {
    pub fn new(initial_script: Option<&str>) -> Self {
        Self {
            name: String::new(),
            script: initial_script.unwrap_or_default().to_string(),
        }
    }

    /// Inline error, if the draft cannot be submitted
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Variable name is required")
        } else if self.script.trim().is_empty() {
            Some("Variable query is required")
        } else {
            None
        }
    }

    pub fn into_variable(self, org_id: &str) -> Variable {
        Variable {
            id: None,
            org_id: org_id.to_string(),
            name: self.name.trim().to_string(),
            arguments: VariableArguments::Query {
                query: self.script,
                language: FLUX.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableAction {
    AddVariable(Variable),
}

pub fn add_variable(variable: Variable) -> Action {
    Action::Variables(VariableAction::AddVariable(variable))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariablesState {
    pub list: Vec<Variable>,
}

impl VariablesState {
    pub fn reduce(&mut self, action: VariableAction) {
        match action {
            VariableAction::AddVariable(variable) => self.list.push(variable),
        }
    }
}
