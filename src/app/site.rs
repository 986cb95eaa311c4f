use crate::adapters::submit::{FailurePolicy, HttpSubmitter, SimulatedSubmitter};
use crate::app::business::BusinessPage;
use crate::app::catalog::{Catalog, DEFAULT_PLAN};
use crate::app::forms::{
    self, APPLICATION_FORM, BUSINESS_FORM, CONSULTATION_FORM, CONTACT_FORM, QUOTE_FORM,
};
use crate::app::installers::InstallersPage;
use crate::app::render::{installer_card, partner_card, provider_card};
use crate::config::UiConfig;
use crate::core::chrome::{
    anchor_target, Accordion, HeaderScroll, MenuEvent, MobileMenu, Modal, RevealTracker,
    StatsCounter, ThemeManager,
};
use crate::core::filter::FacetSpec;
use crate::core::form::{FormManager, FormSpec};
use crate::core::listing::{ListingController, ListingSpec};
use crate::domain::model::{FinancingPartner, Provider, Theme};
use crate::domain::ports::{Document, KeyValueStore, PageView, Submitter};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;
use std::time::Duration;

pub const PROVIDERS_GRID: &str = "providersGrid";
pub const INSTALLERS_GRID: &str = "installersGrid";
pub const PARTNERS_GRID: &str = "partnersGrid";
pub const PRICING_GRID: &str = "pricingGrid";
pub const QUOTE_MODAL: &str = "quoteModal";
pub const MOBILE_MENU: &str = "mobileMenu";
pub const HEADER: &str = "header";
pub const FAQ: &str = "faq";
pub const ROOT: &str = "html";

pub const FAQ_ITEM_CLASS: &str = "faq-item";
pub const STAT_CLASS: &str = "stat-number";
pub const ANIMATED_CLASSES: &[&str] = &[
    "card",
    "stat-item",
    "provider-card",
    "installer-card",
    "financing-card",
    "partner-card",
];

/// Picks the HTTP backend when an API is configured, the simulator otherwise.
///
/// The simulator reproduces the demo pages: two seconds per request, three
/// for applications, and random failures on the contact and application forms.
pub fn submitter_from_config(config: &UiConfig) -> Arc<dyn Submitter> {
    if let Some(base_url) = &config.submission.api_base_url {
        tracing::info!("🌐 Submitting forms to {}", base_url);
        let mut submitter = HttpSubmitter::new(base_url);
        if let Some(timeout) = config.submission.timeout_seconds {
            submitter = submitter.with_timeout(Duration::from_secs(timeout));
        }
        return Arc::new(submitter);
    }

    let rate = config.submission.failure_rate;
    let application = forms::application_form(config.forms.max_upload_bytes).resource;
    let business = forms::business_form().resource;
    let contact = forms::contact_form().resource;

    Arc::new(
        SimulatedSubmitter::new(config.submit_delay(), FailurePolicy::Never)
            .with_resource_delay(&application, config.application_delay())
            .with_resource_delay(&business, config.application_delay())
            .with_resource_policy(&contact, FailurePolicy::Rate(rate))
            .with_resource_policy(&application, FailurePolicy::Rate(rate))
            .with_generated_id(&application),
    )
}

/// Every component of the site, mounted against whatever markup the page has.
pub struct Site<D: Document, S: KeyValueStore> {
    doc: D,
    config: UiConfig,
    page: D::View,
    theme: ThemeManager<S, D::View>,
    menu: Option<MobileMenu<D::View>>,
    faq: Option<Accordion<D::View>>,
    header: Option<HeaderScroll>,
    reveal: RevealTracker,
    counters: StatsCounter,
    providers: Option<ListingController<Provider, D::View>>,
    installers: Option<InstallersPage<D::View>>,
    partners: Option<ListingController<FinancingPartner, D::View>>,
    contact: Option<FormManager<D::View>>,
    consultation: Option<FormManager<D::View>>,
    business: Option<BusinessPage<D::View>>,
    application: Option<FormManager<D::View>>,
}

impl<D: Document, S: KeyValueStore> Site<D, S> {
    /// Page load: every component whose container exists is initialised.
    /// An invalid `config` is rejected before anything is rendered.
    pub fn mount(
        doc: D,
        store: S,
        config: UiConfig,
        catalog: Catalog,
        submitter: Arc<dyn Submitter>,
    ) -> Result<Self> {
        config.validate()?;

        let Catalog {
            providers,
            installers,
            partners,
            plans,
            services,
        } = catalog;
        let debounce = config.debounce();
        let toast = config.toast_lifetime();

        let form = |spec: FormSpec| -> Option<FormManager<D::View>> {
            doc.has_element(&spec.id).then(|| {
                let view = doc.view(&spec.id);
                FormManager::new(spec, view, Arc::clone(&submitter), toast)
            })
        };

        let contact = form(forms::contact_form());
        let consultation = form(forms::consultation_form());
        let application = form(forms::application_form(config.forms.max_upload_bytes));
        let quote = form(forms::quote_form());

        let providers = doc.has_element(PROVIDERS_GRID).then(|| {
            ListingController::new(
                ListingSpec {
                    catalog: "providers",
                    items: providers,
                    facets: vec![FacetSpec::exact("location"), FacetSpec::case_insensitive("tier")],
                    render_card: provider_card,
                },
                doc.view(PROVIDERS_GRID),
                debounce,
            )
        });

        let installers = doc.has_element(INSTALLERS_GRID).then(|| {
            let listing = ListingController::new(
                ListingSpec {
                    catalog: "installers",
                    items: installers,
                    facets: vec![FacetSpec::exact("region"), FacetSpec::case_insensitive("tier")],
                    render_card: installer_card,
                },
                doc.view(INSTALLERS_GRID),
                debounce,
            );
            let modal = doc
                .has_element(QUOTE_MODAL)
                .then(|| Modal::new(doc.view(QUOTE_MODAL)));
            InstallersPage::new(listing, modal, quote)
        });

        let partners = doc.has_element(PARTNERS_GRID).then(|| {
            ListingController::new(
                ListingSpec {
                    catalog: "partners",
                    items: partners,
                    facets: vec![
                        FacetSpec::case_insensitive("type"),
                        FacetSpec::exact("featured"),
                    ],
                    render_card: partner_card,
                },
                doc.view(PARTNERS_GRID),
                debounce,
            )
        });

        let business = if doc.has_element(PRICING_GRID) {
            Some(BusinessPage::new(
                plans,
                DEFAULT_PLAN,
                &services,
                doc.view(PRICING_GRID),
                doc.has_element(BUSINESS_FORM).then(|| doc.view(BUSINESS_FORM)),
                Arc::clone(&submitter),
                toast,
            )?)
        } else {
            None
        };

        let menu = doc
            .has_element(MOBILE_MENU)
            .then(|| MobileMenu::new(doc.view(MOBILE_MENU), config.chrome.menu_breakpoint_px));

        let faq_items = doc.elements_with_class(FAQ_ITEM_CLASS);
        let faq = (!faq_items.is_empty()).then(|| Accordion::new(faq_items.len(), doc.view(FAQ)));

        let header = doc
            .has_element(HEADER)
            .then(|| HeaderScroll::new(config.chrome.header_scroll_threshold));

        let theme = ThemeManager::new(store, doc.view(ROOT));
        let counters = StatsCounter::new(config.chrome.counter_steps, config.counter_interval());
        let page = doc.view(ROOT);

        let site = Self {
            doc,
            config,
            page,
            theme,
            menu,
            faq,
            header,
            reveal: RevealTracker::new(),
            counters,
            providers,
            installers,
            partners,
            contact,
            consultation,
            business,
            application,
        };

        tracing::info!("🌞 MONTELO site mounted: {}", site.mounted().join(", "));
        Ok(site)
    }

    /// Names of the mounted page components.
    pub fn mounted(&self) -> Vec<&'static str> {
        let mut names = vec!["theme"];
        let optional = [
            ("menu", self.menu.is_some()),
            ("faq", self.faq.is_some()),
            ("header", self.header.is_some()),
            (PROVIDERS_GRID, self.providers.is_some()),
            (INSTALLERS_GRID, self.installers.is_some()),
            (PARTNERS_GRID, self.partners.is_some()),
            (CONTACT_FORM, self.contact.is_some()),
            (CONSULTATION_FORM, self.consultation.is_some()),
            (
                QUOTE_FORM,
                self.installers
                    .as_ref()
                    .map(|p| p.quote().is_some())
                    .unwrap_or(false),
            ),
            (PRICING_GRID, self.business.is_some()),
            (
                BUSINESS_FORM,
                self.business
                    .as_ref()
                    .map(|p| p.form().is_some())
                    .unwrap_or(false),
            ),
            (APPLICATION_FORM, self.application.is_some()),
        ];
        names.extend(optional.iter().filter(|(_, on)| *on).map(|(name, _)| *name));
        names
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle()
    }

    pub fn menu_event(&mut self, event: MenuEvent) {
        if let Some(menu) = self.menu.as_mut() {
            menu.handle(event);
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        if let Some(faq) = self.faq.as_mut() {
            faq.toggle(index);
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if let Some(header) = self.header.as_mut() {
            header.on_scroll(scroll_y, &mut self.page);
        }
    }

    /// In-page link click. Returns the scroll position when the link is an
    /// anchor to an existing element.
    pub fn on_anchor_click(&mut self, href: &str, header_height: f64) -> Option<f64> {
        let doc = &self.doc;
        let top = anchor_target(href, header_height, self.config.chrome.anchor_offset_px, |id| {
            doc.offset_top(id)
        })?;
        self.page.scroll_to(top);
        Some(top)
    }

    /// An observed element scrolled into view: entrance animation, and the
    /// count-up when it is a stat number.
    pub async fn on_visible(&mut self, element: &str) {
        let animated = ANIMATED_CLASSES
            .iter()
            .any(|class| self.doc.elements_with_class(class).iter().any(|id| id == element));
        if animated {
            self.reveal.on_visible(element, &mut self.page);
        }

        let is_stat = self
            .doc
            .elements_with_class(STAT_CLASS)
            .iter()
            .any(|id| id == element);
        if is_stat {
            if let Some(text) = self.doc.text_of(element) {
                self.counters.animate(element, &text, &mut self.page).await;
            }
        }
    }

    pub fn providers(&self) -> Option<&ListingController<Provider, D::View>> {
        self.providers.as_ref()
    }

    pub fn providers_mut(&mut self) -> Option<&mut ListingController<Provider, D::View>> {
        self.providers.as_mut()
    }

    pub fn installers(&self) -> Option<&InstallersPage<D::View>> {
        self.installers.as_ref()
    }

    pub fn installers_mut(&mut self) -> Option<&mut InstallersPage<D::View>> {
        self.installers.as_mut()
    }

    pub fn partners(&self) -> Option<&ListingController<FinancingPartner, D::View>> {
        self.partners.as_ref()
    }

    pub fn partners_mut(&mut self) -> Option<&mut ListingController<FinancingPartner, D::View>> {
        self.partners.as_mut()
    }

    pub fn contact_mut(&mut self) -> Option<&mut FormManager<D::View>> {
        self.contact.as_mut()
    }

    pub fn consultation_mut(&mut self) -> Option<&mut FormManager<D::View>> {
        self.consultation.as_mut()
    }

    pub fn business_mut(&mut self) -> Option<&mut BusinessPage<D::View>> {
        self.business.as_mut()
    }

    pub fn application_mut(&mut self) -> Option<&mut FormManager<D::View>> {
        self.application.as_mut()
    }

    /// Fires due debounced searches and expires notices.
    pub fn tick(&mut self) {
        if let Some(providers) = self.providers.as_mut() {
            providers.tick();
        }
        if let Some(installers) = self.installers.as_mut() {
            installers.tick();
        }
        if let Some(partners) = self.partners.as_mut() {
            partners.tick();
        }
        if let Some(form) = self.business.as_mut().and_then(|b| b.form_mut()) {
            form.tick();
        }
        for form in [
            self.contact.as_mut(),
            self.consultation.as_mut(),
            self.application.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            form.tick();
        }
    }
}
