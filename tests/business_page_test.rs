use montelo_ui::adapters::{FailurePolicy, HeadlessDocument, MemoryStore, SimulatedSubmitter};
use montelo_ui::app::forms::BUSINESS_FORM;
use montelo_ui::app::site::PRICING_GRID;
use montelo_ui::core::form::SubmitOutcome;
use montelo_ui::domain::model::Placement;
use montelo_ui::{Catalog, Site, UiConfig, UiError};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn mount() -> (
    HeadlessDocument,
    Site<HeadlessDocument, MemoryStore>,
    Arc<SimulatedSubmitter>,
) {
    let doc = HeadlessDocument::new().with_elements(&[PRICING_GRID, BUSINESS_FORM]);
    let submitter = Arc::new(SimulatedSubmitter::new(
        Duration::from_secs(3),
        FailurePolicy::Never,
    ));
    let site = Site::mount(
        doc.clone(),
        MemoryStore::new(),
        UiConfig::default(),
        Catalog::load().unwrap(),
        submitter.clone(),
    )
    .unwrap();
    (doc, site, submitter)
}

fn fill(site: &mut Site<HeadlessDocument, MemoryStore>) {
    let form = site.business_mut().unwrap().form_mut().unwrap();
    for (name, value) in [
        ("businessName", "Sunrise Solar"),
        ("contactPerson", "Alex Kim"),
        ("email", "alex@sunrise.example"),
        ("phone", "(555) 222-3333"),
        ("website", "https://sunrise.example"),
        ("businessType", "installer"),
        ("city", "Denver"),
        ("state", "CO"),
        ("description", "Residential and commercial installs."),
        ("yearsInBusiness", "6-10"),
        ("teamSize", "11-25"),
    ] {
        form.input(name, value);
    }
}

#[test]
fn test_default_plan_is_premium() {
    let (doc, mut site, _) = mount();
    let page = site.business_mut().unwrap();
    assert_eq!(page.selected_plan().name, "Premium");

    let state = doc.state();
    assert_eq!(
        state.summary,
        Some(("Premium".to_string(), "$99/month".to_string()))
    );
    assert!(state.services_html[PRICING_GRID].contains(r#"id="service-residential-solar-installation""#));
}

#[test]
fn test_selecting_elite_marks_one_card() {
    let (doc, mut site, _) = mount();
    let page = site.business_mut().unwrap();
    page.select_plan("Elite").unwrap();

    let err = page.select_plan("Platinum").unwrap_err();
    assert!(matches!(err, UiError::UnknownPlan(_)));
    assert_eq!(page.selected_plan().name, "Elite");

    let state = doc.state();
    assert_eq!(
        state.summary,
        Some(("Elite".to_string(), "$199/month".to_string()))
    );
    let html = &state.html[PRICING_GRID];
    assert_eq!(html.matches(" selected\"").count(), 1);
    assert!(html.contains(r#"<div class="pricing-card selected" data-plan="Elite">"#));
}

#[tokio::test(start_paused = true)]
async fn test_services_and_terms_are_required() {
    let (doc, mut site, submitter) = mount();
    fill(&mut site);

    let outcome = site.business_mut().unwrap().submit().await.unwrap();
    let SubmitOutcome::Invalid { field_errors, issues } = outcome else {
        panic!("expected invalid outcome");
    };
    assert!(field_errors.is_empty());
    assert_eq!(
        issues,
        vec![
            "Please select at least one service that you offer.",
            "Please accept the Terms and Conditions to continue."
        ]
    );
    assert_eq!(submitter.submission_count(), 0);
    assert!(doc
        .state()
        .notice_log
        .iter()
        .all(|(_, n)| n.placement == Placement::Alert));
}

#[tokio::test(start_paused = true)]
async fn test_submission_carries_plan_and_services() {
    let (doc, mut site, submitter) = mount();
    fill(&mut site);

    let page = site.business_mut().unwrap();
    page.select_plan("Elite").unwrap();
    assert!(page.toggle_service("Residential Solar Installation"));
    assert!(page.toggle_service("Battery Storage Systems"));
    assert!(page.toggle_service("Solar Panel Maintenance"));
    assert!(!page.toggle_service("Battery Storage Systems"));
    page.form_mut().unwrap().set_checked("acceptTerms", "on", true);

    let outcome = page.submit().await.unwrap();
    assert!(outcome.is_submitted());

    let (resource, payload) = submitter.submissions().remove(0);
    assert_eq!(resource, "business-listings");
    assert_eq!(payload["selectedPlan"], "Elite");
    assert_eq!(
        payload["selectedServices"],
        json!(["Residential Solar Installation", "Solar Panel Maintenance"])
    );
    assert_eq!(payload["businessName"], "Sunrise Solar");

    let state = doc.state();
    assert_eq!(state.redirect.as_deref(), Some("dashboard.html"));
    assert!(state.busy.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_pricing_grid_works_without_application_form() {
    let doc = HeadlessDocument::new().with_element(PRICING_GRID);
    let submitter = Arc::new(SimulatedSubmitter::new(
        Duration::from_secs(3),
        FailurePolicy::Never,
    ));
    let mut site = Site::mount(
        doc.clone(),
        MemoryStore::new(),
        UiConfig::default(),
        Catalog::load().unwrap(),
        submitter.clone(),
    )
    .unwrap();
    assert!(site.mounted().contains(&PRICING_GRID));
    assert!(!site.mounted().contains(&BUSINESS_FORM));

    let page = site.business_mut().unwrap();
    assert!(page.form().is_none());
    page.select_plan("Elite").unwrap();
    assert_eq!(
        doc.state().summary,
        Some(("Elite".to_string(), "$199/month".to_string()))
    );

    // 沒有表單時勾選服務仍會記錄
    assert!(page.toggle_service("Battery Storage Systems"));
    assert!(page.submit().await.is_none());
    assert_eq!(submitter.submission_count(), 0);
}
