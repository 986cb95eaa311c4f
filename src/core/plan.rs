use crate::domain::model::PricingPlan;
use crate::domain::ports::PlanView;
use crate::utils::error::{Result, UiError};

/// Single selection over the pricing tiers.
pub struct PlanSelector<V: PlanView> {
    plans: Vec<PricingPlan>,
    selected: usize,
    render_card: fn(&PricingPlan, bool) -> String,
    view: V,
}

impl<V: PlanView> PlanSelector<V> {
    pub fn new(
        plans: Vec<PricingPlan>,
        default_plan: &str,
        render_card: fn(&PricingPlan, bool) -> String,
        view: V,
    ) -> Result<Self> {
        let selected = plans
            .iter()
            .position(|p| p.name == default_plan)
            .ok_or_else(|| UiError::UnknownPlan(default_plan.to_string()))?;

        let mut selector = Self {
            plans,
            selected,
            render_card,
            view,
        };
        selector.render();
        Ok(selector)
    }

    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    pub fn selected(&self) -> &PricingPlan {
        &self.plans[self.selected]
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected().name == name
    }

    /// Moves the selection; an unknown name leaves it untouched.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let index = self
            .plans
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| UiError::UnknownPlan(name.to_string()))?;

        self.selected = index;
        tracing::debug!("💳 Plan selected: {}", name);
        self.render();
        Ok(())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn render(&mut self) {
        let html: String = self
            .plans
            .iter()
            .enumerate()
            .map(|(i, plan)| (self.render_card)(plan, i == self.selected))
            .collect();
        self.view.render_plans(&html);

        let plan = &self.plans[self.selected];
        self.view.set_summary(&plan.name, &monthly_price(plan));
    }
}

pub fn monthly_price(plan: &PricingPlan) -> String {
    format!("${}/month", plan.price)
}

/// Multi-select of offered services. Only membership is meaningful.
#[derive(Debug, Clone, Default)]
pub struct ServiceSelection {
    selected: Vec<String>,
}

impl ServiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the service is selected afterwards.
    pub fn toggle(&mut self, service: &str) -> bool {
        match self.selected.iter().position(|s| s == service) {
            Some(index) => {
                self.selected.swap_remove(index);
                false
            }
            None => {
                self.selected.push(service.to_string());
                true
            }
        }
    }

    pub fn contains(&self, service: &str) -> bool {
        self.selected.iter().any(|s| s == service)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }
}
