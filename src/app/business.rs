use crate::app::forms::business_form;
use crate::app::render::{pricing_card, service_checkboxes};
use crate::core::form::{FormManager, SubmitOutcome};
use crate::core::plan::{PlanSelector, ServiceSelection};
use crate::domain::model::{FormPayload, PricingPlan};
use crate::domain::ports::{FormView, PlanView, Submitter};
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const SERVICES_GROUP: &str = "selectedServices";

/// 商家刊登頁：方案選擇 + 服務項目 + 申請表單
///
/// The pricing grid works on its own; the application form is optional.
pub struct BusinessPage<V: PlanView + FormView> {
    plans: PlanSelector<V>,
    services: ServiceSelection,
    form: Option<FormManager<V>>,
}

impl<V: PlanView + FormView> BusinessPage<V> {
    pub fn new(
        plans: Vec<PricingPlan>,
        default_plan: &str,
        service_options: &[String],
        plan_view: V,
        form_view: Option<V>,
        submitter: Arc<dyn Submitter>,
        toast_lifetime: Duration,
    ) -> Result<Self> {
        let mut selector = PlanSelector::new(plans, default_plan, pricing_card, plan_view)?;
        selector
            .view_mut()
            .render_services(&service_checkboxes(service_options));

        Ok(Self {
            plans: selector,
            services: ServiceSelection::new(),
            form: form_view
                .map(|view| FormManager::new(business_form(), view, submitter, toast_lifetime)),
        })
    }

    pub fn select_plan(&mut self, name: &str) -> Result<()> {
        self.plans.select(name)
    }

    pub fn selected_plan(&self) -> &PricingPlan {
        self.plans.selected()
    }

    /// Checkbox change in the services grid. Returns whether it is now selected.
    pub fn toggle_service(&mut self, service: &str) -> bool {
        let selected = self.services.toggle(service);
        if let Some(form) = self.form.as_mut() {
            form.set_checked(SERVICES_GROUP, service, selected);
        }
        selected
    }

    pub fn services(&self) -> &ServiceSelection {
        &self.services
    }

    pub fn plans(&self) -> &PlanSelector<V> {
        &self.plans
    }

    pub fn form(&self) -> Option<&FormManager<V>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormManager<V>> {
        self.form.as_mut()
    }

    /// Submits the application with the chosen plan and services attached.
    /// `None` when the page has no application form.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let mut extra = FormPayload::new();
        extra.insert(
            "selectedPlan".to_string(),
            Value::String(self.plans.selected().name.clone()),
        );
        extra.insert(
            SERVICES_GROUP.to_string(),
            Value::Array(
                self.services
                    .as_slice()
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        Some(form.submit_with(extra).await)
    }
}
