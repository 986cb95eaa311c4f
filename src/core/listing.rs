use crate::core::debounce::Debouncer;
use crate::core::filter::{filter, FacetSpec, FilterState};
use crate::domain::model::{Listing, Notice, Placement};
use crate::domain::ports::ListingView;
use std::time::Duration;

/// Buttons rendered on a listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ViewDetails,
    Contact,
    ViewProfile,
    InstallerQuote,
    PartnerQuote,
    LearnMore,
}

impl CardAction {
    pub fn prompt(&self, name: &str) -> String {
        match self {
            CardAction::ViewDetails => format!(
                "Viewing details for {}\n\nThis would open a detailed provider profile page.",
                name
            ),
            CardAction::Contact => format!(
                "Contacting {}\n\nThis would open a contact form or messaging interface.",
                name
            ),
            CardAction::ViewProfile => format!(
                "Viewing profile for {}\n\nThis would open a detailed installer profile page with portfolio, reviews, and more information.",
                name
            ),
            CardAction::InstallerQuote => format!(
                "Getting quote from {}\n\nThis would open a quote form specifically for this installer.",
                name
            ),
            CardAction::PartnerQuote => format!(
                "Getting quote from {}\n\nThis would redirect to their application process or open a quote form.",
                name
            ),
            CardAction::LearnMore => format!(
                "Learning more about {}\n\nThis would show detailed information about their financing options.",
                name
            ),
        }
    }
}

/// Everything that distinguishes one grid from another.
pub struct ListingSpec<T> {
    pub catalog: &'static str,
    pub items: Vec<T>,
    pub facets: Vec<FacetSpec>,
    pub render_card: fn(&T) -> String,
}

/// Generic filter-and-render controller behind every listing grid.
pub struct ListingController<T: Listing, V: ListingView> {
    catalog: &'static str,
    items: Vec<T>,
    facets: Vec<FacetSpec>,
    render_card: fn(&T) -> String,
    view: V,
    state: FilterState,
    debounce: Debouncer,
    visible_ids: Vec<u32>,
}

impl<T: Listing, V: ListingView> ListingController<T, V> {
    /// Mounts the grid and renders the unfiltered catalog.
    pub fn new(spec: ListingSpec<T>, view: V, debounce: Duration) -> Self {
        let mut controller = Self {
            catalog: spec.catalog,
            items: spec.items,
            facets: spec.facets,
            render_card: spec.render_card,
            view,
            state: FilterState::new(),
            debounce: Debouncer::new(debounce),
            visible_ids: Vec::new(),
        };
        controller.refresh();
        tracing::info!(
            "🗂️ {} grid mounted with {} listings",
            controller.catalog,
            controller.items.len()
        );
        controller
    }

    /// Records the search box value; filtering waits for the debounce.
    pub fn on_search_input(&mut self, text: &str) {
        self.state.search = text.to_string();
        self.debounce.trigger();
    }

    /// Dropdown change: filters immediately.
    pub fn on_facet_change(&mut self, key: &str, value: &str) {
        self.state.set_facet(key, value);
        self.apply();
    }

    /// Explicit "apply filters" click, also used when the debounce fires.
    pub fn apply(&mut self) {
        self.debounce.cancel();
        self.refresh();
    }

    /// Runs a pending debounced filter if its quiet period is over.
    pub fn tick(&mut self) -> bool {
        if self.debounce.fire_if_due() {
            self.refresh();
            true
        } else {
            false
        }
    }

    /// Waits for the search box to go quiet, then filters.
    pub async fn settle(&mut self) -> bool {
        if self.debounce.settled().await {
            self.refresh();
            true
        } else {
            false
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> Vec<&T> {
        self.visible_ids
            .iter()
            .filter_map(|id| self.find(*id))
            .collect()
    }

    pub fn find(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Card button click; unknown ids are ignored.
    pub fn on_card_action(&mut self, id: u32, action: CardAction) -> Option<Notice> {
        let notice = Notice::success(Placement::Alert, action.prompt(self.find(id)?.name()));
        self.view.show_notice(&notice);
        Some(notice)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn refresh(&mut self) {
        let matched = filter(&self.items, &self.state, &self.facets);
        self.visible_ids = matched.iter().map(|item| item.id()).collect();

        tracing::debug!(
            "🔎 {} filter {:?}: {} of {} listings",
            self.catalog,
            self.state,
            matched.len(),
            self.items.len()
        );

        if matched.is_empty() {
            self.view.set_grid_visible(false);
            self.view.set_empty_state_visible(true);
            return;
        }

        let html: String = matched.iter().map(|item| (self.render_card)(*item)).collect();
        self.view.set_grid_visible(true);
        self.view.set_empty_state_visible(false);
        self.view.render_cards(&html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FinancingPartner;

    #[derive(Default)]
    struct MockView {
        renders: Vec<String>,
        grid_visible: Option<bool>,
        empty_visible: Option<bool>,
        notices: Vec<Notice>,
    }

    impl ListingView for MockView {
        fn render_cards(&mut self, html: &str) {
            self.renders.push(html.to_string());
        }

        fn set_grid_visible(&mut self, visible: bool) {
            self.grid_visible = Some(visible);
        }

        fn set_empty_state_visible(&mut self, visible: bool) {
            self.empty_visible = Some(visible);
        }

        fn show_notice(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    fn partner(id: u32, name: &str, kind: &str) -> FinancingPartner {
        FinancingPartner {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            description: "Solar loans".to_string(),
            features: vec!["Up to $50,000".to_string()],
            rating: 4.0,
            contact: "+1 (555) 000-0000".to_string(),
            email: "loans@example.com".to_string(),
            featured: false,
        }
    }

    fn card(p: &FinancingPartner) -> String {
        format!("[{}]", p.name)
    }

    fn controller() -> ListingController<FinancingPartner, MockView> {
        let spec = ListingSpec {
            catalog: "partners",
            items: vec![partner(1, "SolarBank", "Bank"), partner(2, "EcoCredit", "Credit Union")],
            facets: vec![FacetSpec::case_insensitive("type")],
            render_card: card,
        };
        ListingController::new(spec, MockView::default(), Duration::from_millis(300))
    }

    #[test]
    fn test_initial_render_shows_everything() {
        let c = controller();
        assert_eq!(c.view().renders.last().unwrap(), "[SolarBank][EcoCredit]");
        assert_eq!(c.view().grid_visible, Some(true));
        assert_eq!(c.view().empty_visible, Some(false));
    }

    #[test]
    fn test_facet_change_filters_immediately() {
        let mut c = controller();
        c.on_facet_change("type", "bank");
        assert_eq!(c.view().renders.last().unwrap(), "[SolarBank]");
    }

    #[test]
    fn test_no_results_toggles_empty_state() {
        let mut c = controller();
        let renders_before = c.view().renders.len();
        c.on_facet_change("type", "online lender");
        assert_eq!(c.view().grid_visible, Some(false));
        assert_eq!(c.view().empty_visible, Some(true));
        assert_eq!(c.view().renders.len(), renders_before);
        assert!(c.visible().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_waits_for_debounce() {
        let mut c = controller();
        c.on_search_input("eco");
        assert!(!c.tick());
        assert_eq!(c.visible().len(), 2);

        tokio::time::advance(Duration::from_millis(300)).await;
        assert!(c.tick());
        assert_eq!(c.visible().iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_card_action_for_unknown_id_is_noop() {
        let mut c = controller();
        assert!(c.on_card_action(99, CardAction::LearnMore).is_none());
        let notice = c.on_card_action(1, CardAction::PartnerQuote).unwrap();
        assert!(notice.text.starts_with("Getting quote from SolarBank"));
        assert_eq!(c.view().notices.len(), 1);
    }
}
