use crate::core::toast::ToastCenter;
use crate::core::upload::{selection_label, FileRejection, UploadRule};
use crate::domain::model::{
    FieldKind, FieldSpec, FileMeta, FormPayload, Notice, Placement, SubmissionAck,
    SubmissionState,
};
use crate::domain::ports::{FormView, Submitter};
use crate::utils::error::UiError;
use crate::utils::format::{format_phone_input, format_zip_input};
use crate::utils::validation::check_field;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Duration;

/// Whole-form checks that are not tied to a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRule {
    /// At least one checkbox of `group` must be ticked.
    AtLeastOne { group: String, message: String },
    /// The single checkbox `checkbox` must be ticked.
    Accepted { checkbox: String, message: String },
}

impl FormRule {
    pub fn at_least_one(group: &str, message: &str) -> Self {
        FormRule::AtLeastOne {
            group: group.to_string(),
            message: message.to_string(),
        }
    }

    pub fn accepted(checkbox: &str, message: &str) -> Self {
        FormRule::Accepted {
            checkbox: checkbox.to_string(),
            message: message.to_string(),
        }
    }
}

/// What the page does after the backend accepted a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnSuccess {
    /// Success message in `placement`, then the form is cleared.
    ResetWithMessage { placement: Placement, message: String },
    /// The form section is replaced by a confirmation view.
    Confirmation { html: String },
    /// Success alert, form cleared; the owning modal closes itself.
    CloseModal { message: String },
    /// Success alert, then navigation away.
    Redirect { message: String, location: String },
}

#[derive(Debug, Clone)]
pub struct FormSpec {
    pub id: String,
    /// Backend resource the payload is posted to.
    pub resource: String,
    pub fields: Vec<FieldSpec>,
    pub uploads: Vec<UploadRule>,
    pub rules: Vec<FormRule>,
    /// Checkbox groups always serialised as arrays.
    pub list_fields: Vec<String>,
    pub busy_label: String,
    /// Toast shown after any failed whole-form validation.
    pub invalid_summary: Option<String>,
    /// Where form-level validation problems are reported.
    pub issue_placement: Placement,
    pub error_message: String,
    pub error_placement: Placement,
    pub on_success: OnSuccess,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid {
        field_errors: Vec<String>,
        issues: Vec<String>,
    },
    Submitted(SubmissionAck),
    Failed(UiError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

pub struct FormManager<V: FormView> {
    spec: FormSpec,
    view: V,
    submitter: Arc<dyn Submitter>,
    toasts: ToastCenter,
    values: BTreeMap<String, String>,
    checked: BTreeMap<String, Vec<String>>,
    files: BTreeMap<String, Vec<FileMeta>>,
    errors: BTreeSet<String>,
    state: SubmissionState,
}

impl<V: FormView> FormManager<V> {
    pub fn new(spec: FormSpec, view: V, submitter: Arc<dyn Submitter>, toast_lifetime: Duration) -> Self {
        tracing::debug!(
            "📝 Form {} mounted ({} fields, {} uploads)",
            spec.id,
            spec.fields.len(),
            spec.uploads.len()
        );
        Self {
            spec,
            view,
            submitter,
            toasts: ToastCenter::new(toast_lifetime),
            values: BTreeMap::new(),
            checked: BTreeMap::new(),
            files: BTreeMap::new(),
            errors: BTreeSet::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeSet<String> {
        &self.errors
    }

    pub fn checked(&self, group: &str) -> &[String] {
        self.checked.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.spec.fields.iter().find(|f| f.name == name)
    }

    /// Input event: applies live formatting, stores the value and clears any
    /// inline error on the field. Returns the value now shown in the control.
    pub fn input(&mut self, name: &str, raw: &str) -> String {
        let formatted = match self.field(name).map(|f| f.kind) {
            Some(FieldKind::Tel) => format_phone_input(raw),
            Some(FieldKind::Zip) => format_zip_input(raw),
            _ => raw.to_string(),
        };

        if formatted != raw {
            self.view.set_value(name, &formatted);
        }
        self.values.insert(name.to_string(), formatted.clone());
        self.clear_error(name);
        formatted
    }

    /// Blur event: validates the single field. Unknown fields pass.
    pub fn blur(&mut self, name: &str) -> bool {
        match self.field(name).cloned() {
            Some(spec) => self.validate_field(&spec),
            None => true,
        }
    }

    pub fn set_checked(&mut self, group: &str, value: &str, checked: bool) {
        let values = self.checked.entry(group.to_string()).or_default();
        let present = values.iter().position(|v| v == value);
        match (checked, present) {
            (true, None) => values.push(value.to_string()),
            (false, Some(index)) => {
                values.remove(index);
            }
            _ => {}
        }
    }

    /// File input change. A rejected selection is cleared entirely.
    pub fn select_files(&mut self, field: &str, files: Vec<FileMeta>) -> Result<(), FileRejection> {
        let Some(rule) = self.spec.uploads.iter().find(|u| u.field == field).cloned() else {
            tracing::warn!("Ignoring files for undeclared upload field {}", field);
            return Ok(());
        };

        if let Err(rejection) = rule.check(&files) {
            tracing::warn!("⚠️ {}: {}", field, rejection);
            self.files.remove(field);
            self.view.clear_file_input(field);
            self.view.set_file_display(&rule.display, "");
            self.notify(Notice::error(Placement::Toast, rejection.to_string()));
            return Err(rejection);
        }

        self.view.set_file_display(&rule.display, &selection_label(&files));
        if files.is_empty() {
            self.files.remove(field);
        } else {
            self.files.insert(field.to_string(), files);
        }
        Ok(())
    }

    fn validate_field(&mut self, spec: &FieldSpec) -> bool {
        let value = self.values.get(&spec.name).cloned().unwrap_or_default();
        self.clear_error(&spec.name);

        match check_field(spec, &value) {
            Some(message) => {
                self.view.show_field_error(&spec.name, &message);
                self.errors.insert(spec.name.clone());
                false
            }
            None => true,
        }
    }

    fn clear_error(&mut self, name: &str) {
        if self.errors.remove(name) {
            self.view.clear_field_error(name);
        }
    }

    /// Validates every field and form rule, surfacing all problems.
    /// Returns the failing field names and the form-level issues.
    pub fn validate(&mut self) -> (Vec<String>, Vec<String>) {
        let fields = self.spec.fields.clone();
        let field_errors: Vec<String> = fields
            .iter()
            .filter(|spec| !self.validate_field(spec))
            .map(|spec| spec.name.clone())
            .collect();

        let issues: Vec<String> = self
            .spec
            .rules
            .iter()
            .filter_map(|rule| match rule {
                FormRule::AtLeastOne { group, message } if self.checked(group).is_empty() => {
                    Some(message.clone())
                }
                FormRule::Accepted { checkbox, message } if self.checked(checkbox).is_empty() => {
                    Some(message.clone())
                }
                _ => None,
            })
            .collect();

        let placement = self.spec.issue_placement;
        for issue in &issues {
            self.notify(Notice::error(placement, issue.clone()));
        }
        if !field_errors.is_empty() || !issues.is_empty() {
            if let Some(summary) = self.spec.invalid_summary.clone() {
                self.notify(Notice::error(Placement::Toast, summary));
            }
        }

        (field_errors, issues)
    }

    /// Collected field map, FormData style: repeated checkbox values become
    /// arrays, list fields are always arrays, uploads list their file names.
    pub fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();

        for (name, value) in &self.values {
            payload.insert(name.clone(), Value::String(value.clone()));
        }

        for (group, values) in &self.checked {
            let always_list = self.spec.list_fields.iter().any(|f| f == group);
            match values.as_slice() {
                [] if !always_list => {}
                [single] if !always_list => {
                    payload.insert(group.clone(), Value::String(single.clone()));
                }
                many => {
                    payload.insert(
                        group.clone(),
                        Value::Array(many.iter().cloned().map(Value::String).collect()),
                    );
                }
            }
        }

        for field in &self.spec.list_fields {
            payload
                .entry(field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
        }

        for (field, files) in &self.files {
            payload.insert(
                field.clone(),
                Value::Array(files.iter().map(|f| Value::String(f.name.clone())).collect()),
            );
        }

        payload
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_with(FormPayload::new()).await
    }

    /// Full submission lifecycle. `extra` entries are merged over the
    /// collected fields (selected plan and the like).
    ///
    /// The `&mut self` borrow is held until the request settles, so two
    /// submissions of one form never overlap. A submission whose future is
    /// dropped leaves the state at `Pending`; the next call starts over.
    pub async fn submit_with(&mut self, extra: FormPayload) -> SubmitOutcome {
        let (field_errors, issues) = self.validate();
        if !field_errors.is_empty() || !issues.is_empty() {
            tracing::info!(
                "🚫 Form {} blocked: {} field errors, {} form issues",
                self.spec.id,
                field_errors.len(),
                issues.len()
            );
            return SubmitOutcome::Invalid {
                field_errors,
                issues,
            };
        }

        self.state = SubmissionState::Pending;
        self.view.set_submit_busy(&self.spec.busy_label);

        let mut payload = self.payload();
        payload.extend(extra);

        tracing::info!(
            "📨 Submitting {} to '{}' ({} entries)",
            self.spec.id,
            self.spec.resource,
            payload.len()
        );

        let result = self.submitter.submit(&self.spec.resource, &payload).await;
        let outcome = match result {
            Ok(ack) => {
                tracing::info!("✅ {} accepted (id: {:?})", self.spec.id, ack.id);
                self.state = SubmissionState::Succeeded;
                self.finish_success();
                SubmitOutcome::Submitted(ack)
            }
            Err(e) => {
                tracing::error!("❌ {} submission failed: {}", self.spec.id, e);
                self.state = SubmissionState::Failed;
                let notice = Notice::error(self.spec.error_placement, self.spec.error_message.clone());
                self.notify(notice);
                SubmitOutcome::Failed(e)
            }
        };

        self.view.restore_submit();
        outcome
    }

    fn finish_success(&mut self) {
        match self.spec.on_success.clone() {
            OnSuccess::ResetWithMessage { placement, message } => {
                self.notify(Notice::success(placement, message));
                self.reset();
            }
            OnSuccess::Confirmation { html } => {
                self.toasts.remove(Placement::Inline);
                self.view.show_confirmation(&html);
            }
            OnSuccess::CloseModal { message } => {
                self.notify(Notice::success(Placement::Alert, message));
                self.reset();
            }
            OnSuccess::Redirect { message, location } => {
                self.notify(Notice::success(Placement::Alert, message));
                self.view.redirect(&location);
            }
        }
    }

    /// Clears every control, selection and inline error.
    pub fn reset(&mut self) {
        self.values.clear();
        self.checked.clear();
        self.files.clear();
        for name in std::mem::take(&mut self.errors) {
            self.view.clear_field_error(&name);
        }
        self.view.reset_form();
    }

    fn notify(&mut self, notice: Notice) {
        self.toasts.show(notice.placement);
        self.view.show_notice(&notice);
    }

    /// Dismisses notices whose display time ran out.
    pub fn tick(&mut self) {
        for placement in self.toasts.take_expired() {
            self.view.dismiss_notice(placement);
        }
    }

    pub fn has_active_notice(&self, placement: Placement) -> bool {
        self.toasts.is_showing(placement)
    }
}
