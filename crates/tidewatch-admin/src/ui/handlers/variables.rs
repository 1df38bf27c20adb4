//! Variable message handlers
//!
//! Handles: ShowCreateVariable, DismissCreateVariable, name/script edits,
//! SubmitVariable

use iced::Task;
use tidewatch_core::variables::add_variable;

use super::super::app::AdminApp;
use super::super::message::Message;
use super::super::query_builder::script_for;

impl AdminApp {
    /// Open the form, prefilled with the builder's current query
    pub fn handle_show_create_variable(&mut self) -> Task<Message> {
        let script = script_for(self.store.query_builder.selected_bucket());
        self.variable_form.open(script.as_deref());
        Task::none()
    }

    pub fn handle_dismiss_create_variable(&mut self) -> Task<Message> {
        self.variable_form.close();
        Task::none()
    }

    pub fn handle_variable_name(&mut self, name: String) -> Task<Message> {
        self.variable_form.draft.name = name;
        self.variable_form.error = None;
        Task::none()
    }

    pub fn handle_variable_script(&mut self, script: String) -> Task<Message> {
        self.variable_form.draft.script = script;
        self.variable_form.error = None;
        Task::none()
    }

    pub fn handle_submit_variable(&mut self) -> Task<Message> {
        if let Some(error) = self.variable_form.draft.validate() {
            self.variable_form.error = Some(error);
            return Task::none();
        }

        let variable = self
            .variable_form
            .draft
            .clone()
            .into_variable(&self.config.api.org_id);
        log::info!("Created variable '{}'", variable.name);
        self.store.reduce(add_variable(variable));
        self.variable_form.close();
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, Config};
    use std::time::Instant;
    use tidewatch_core::query_builder::select_bucket;
    use tidewatch_core::variables::{VariableArguments, FLUX};

    fn app() -> AdminApp {
        let mut config = Config::default();
        config.api.backend = Backend::Memory;
        config.api.org_id = "org-1".into();
        AdminApp::with_config(config, Instant::now())
    }

    #[test]
    fn test_form_prefilled_from_selected_bucket() {
        let mut app = app();
        app.store.reduce(select_bucket("telegraf", true));
        let _ = app.handle_show_create_variable();

        assert!(app.variable_form.is_open());
        assert!(app.variable_form.draft.script.contains(r#"from(bucket: "telegraf")"#));
    }

    #[test]
    fn test_blank_name_keeps_form_open() {
        let mut app = app();
        let _ = app.handle_show_create_variable();
        let _ = app.handle_variable_script("buckets()".into());
        let _ = app.handle_submit_variable();

        assert!(app.variable_form.is_open());
        assert_eq!(app.variable_form.error, Some("Variable name is required"));
        assert!(app.store.variables.list.is_empty());
    }

    #[test]
    fn test_submit_adds_flux_variable() {
        let mut app = app();
        let _ = app.handle_show_create_variable();
        let _ = app.handle_variable_name(" hosts ".into());
        let _ = app.handle_variable_script("buckets()".into());
        let _ = app.handle_submit_variable();

        assert!(!app.variable_form.is_open());
        let variable = &app.store.variables.list[0];
        assert_eq!(variable.name, "hosts");
        assert_eq!(variable.org_id, "org-1");
        assert_eq!(
            variable.arguments,
            VariableArguments::Query {
                query: "buckets()".into(),
                language: FLUX.into()
            }
        );
    }
}
