use montelo_ui::adapters::{FailurePolicy, HeadlessDocument, MemoryStore, SimulatedSubmitter};
use montelo_ui::app::forms::{APPLICATION_FORM, CONTACT_FORM, INVALID_FORM_MESSAGE};
use montelo_ui::core::form::SubmitOutcome;
use montelo_ui::core::upload::FileRejection;
use montelo_ui::domain::model::{FileMeta, NoticeKind, Placement, SubmissionState};
use montelo_ui::{Catalog, Site, UiConfig};
use std::sync::Arc;
use std::time::Duration;

fn mount(
    doc: &HeadlessDocument,
    policy: FailurePolicy,
) -> (Site<HeadlessDocument, MemoryStore>, Arc<SimulatedSubmitter>) {
    let submitter = Arc::new(
        SimulatedSubmitter::new(Duration::from_secs(2), policy)
            .with_resource_delay("installer-applications", Duration::from_secs(3))
            .with_generated_id("installer-applications"),
    );
    let site = Site::mount(
        doc.clone(),
        MemoryStore::new(),
        UiConfig::default(),
        Catalog::load().unwrap(),
        submitter.clone(),
    )
    .unwrap();
    (site, submitter)
}

#[tokio::test(start_paused = true)]
async fn test_empty_contact_form_is_blocked_without_request() {
    let doc = HeadlessDocument::new().with_element(CONTACT_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::Never);

    let outcome = site.contact_mut().unwrap().submit().await;
    match outcome {
        SubmitOutcome::Invalid { field_errors, .. } => {
            assert_eq!(field_errors, vec!["name", "email", "message"]);
        }
        other => panic!("expected invalid, got {:?}", other),
    }
    assert_eq!(submitter.submission_count(), 0);

    let state = doc.state();
    assert_eq!(state.field_error(CONTACT_FORM, "name"), Some("Full Name is required"));
    assert_eq!(
        state.field_error(CONTACT_FORM, "email"),
        Some("Email Address is required")
    );
    assert_eq!(state.field_error(CONTACT_FORM, "phone"), None);
    assert!(state.busy.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_contact_success_resets_and_toast_expires() {
    let doc = HeadlessDocument::new().with_element(CONTACT_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::Never);

    let form = site.contact_mut().unwrap();
    form.input("name", "Jane Doe");
    form.input("email", "jane@example.com");
    assert_eq!(form.input("phone", "5551234567"), "(555) 123-4567");
    form.input("message", "Interested in rooftop solar.");

    let started = tokio::time::Instant::now();
    let outcome = form.submit().await;
    assert!(outcome.is_submitted());
    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(form.state(), SubmissionState::Succeeded);
    assert_eq!(form.value("name"), None);

    let (resource, payload) = submitter.submissions().remove(0);
    assert_eq!(resource, "contact");
    assert_eq!(payload["phone"], "(555) 123-4567");

    {
        let state = doc.state();
        let notices = state.notices_for(CONTACT_FORM);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(state.restored[CONTACT_FORM], 1);
        assert_eq!(state.resets[CONTACT_FORM], 1);
    }

    tokio::time::advance(Duration::from_secs(5)).await;
    site.tick();
    assert!(doc.state().notices_for(CONTACT_FORM).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_keeps_input_and_restores_button() {
    let doc = HeadlessDocument::new().with_element(CONTACT_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::scripted([true]));

    let form = site.contact_mut().unwrap();
    form.input("name", "Jane Doe");
    form.input("email", "jane@example.com");
    form.input("message", "Hello");

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form.state(), SubmissionState::Failed);
    assert_eq!(form.value("name"), Some("Jane Doe"));

    {
        let state = doc.state();
        assert!(state.busy.is_empty());
        assert_eq!(state.restored[CONTACT_FORM], 1);
        assert!(state.resets.get(CONTACT_FORM).is_none());
        let notices = state.notices_for(CONTACT_FORM);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    // 第二次送出成功
    assert!(form.submit().await.is_submitted());
    assert_eq!(submitter.submission_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_submission_does_not_block_resubmit() {
    let doc = HeadlessDocument::new().with_element(CONTACT_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::Never);

    let form = site.contact_mut().unwrap();
    form.input("name", "Jane Doe");
    form.input("email", "jane@example.com");
    form.input("message", "Hello");

    // 使用者離開頁面，請求被丟棄
    let abandoned = tokio::time::timeout(Duration::from_millis(500), form.submit()).await;
    assert!(abandoned.is_err());
    assert_eq!(form.state(), SubmissionState::Pending);
    assert_eq!(submitter.submission_count(), 0);
    assert!(doc.state().busy.contains_key(CONTACT_FORM));

    assert!(form.submit().await.is_submitted());
    assert_eq!(form.state(), SubmissionState::Succeeded);
    assert_eq!(submitter.submission_count(), 1);
    assert!(doc.state().busy.is_empty());
}

fn pdf(name: &str, size: u64) -> FileMeta {
    FileMeta::new(name, "application/pdf", size)
}

fn fill_application(site: &mut Site<HeadlessDocument, MemoryStore>) {
    let form = site.application_mut().unwrap();
    for (name, value) in [
        ("firstName", "Sam"),
        ("lastName", "Rivera"),
        ("businessName", "Rivera Solar"),
        ("email", "sam@riverasolar.com"),
        ("phone", "5559876543"),
        ("address", "12 Main St"),
        ("city", "Austin"),
        ("state", "TX"),
        ("zipCode", "78701"),
        ("licenseNumber", "TX123456"),
        ("yearsExperience", "5-10"),
        ("teamSize", "6-10"),
        ("serviceArea", "Central Texas"),
    ] {
        form.input(name, value);
    }
}

#[tokio::test(start_paused = true)]
async fn test_application_uploads() {
    let doc = HeadlessDocument::new().with_element(APPLICATION_FORM);
    let (mut site, _) = mount(&doc, FailurePolicy::Never);
    let form = site.application_mut().unwrap();

    let rejection = form
        .select_files("licenseUpload", vec![pdf("license.pdf", 6 * 1024 * 1024)])
        .unwrap_err();
    assert!(matches!(rejection, FileRejection::TooLarge { .. }));
    {
        let state = doc.state();
        assert_eq!(state.cleared_inputs, vec!["licenseUpload"]);
        assert_eq!(state.file_displays["licenseFileName"], "");
        assert_eq!(state.notices_for(APPLICATION_FORM)[0].placement, Placement::Toast);
    }

    form.select_files("licenseUpload", vec![pdf("license.pdf", 1024)])
        .unwrap();
    form.select_files(
        "portfolioUpload",
        vec![
            FileMeta::new("roof.jpg", "image/jpeg", 2048),
            FileMeta::new("array.png", "image/png", 4096),
            FileMeta::new("site.jpg", "image/jpeg", 1024),
        ],
    )
    .unwrap();

    let rejected = form.select_files(
        "insuranceUpload",
        vec![FileMeta::new("policy.docx", "application/msword", 10)],
    );
    assert!(matches!(rejected, Err(FileRejection::InvalidFormat { .. })));

    let state = doc.state();
    assert_eq!(state.file_displays["licenseFileName"], "license.pdf");
    assert_eq!(state.file_displays["portfolioFileName"], "3 files selected");
}

#[tokio::test(start_paused = true)]
async fn test_application_requires_certification_and_terms() {
    let doc = HeadlessDocument::new().with_element(APPLICATION_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::Never);
    fill_application(&mut site);

    let outcome = site.application_mut().unwrap().submit().await;
    match outcome {
        SubmitOutcome::Invalid {
            field_errors,
            issues,
        } => {
            assert!(field_errors.is_empty());
            assert_eq!(issues.len(), 2);
        }
        other => panic!("expected invalid, got {:?}", other),
    }
    assert_eq!(submitter.submission_count(), 0);
    assert!(doc
        .state()
        .notice_log
        .iter()
        .any(|(_, n)| n.text == INVALID_FORM_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_application_success_shows_confirmation() {
    let doc = HeadlessDocument::new().with_element(APPLICATION_FORM);
    let (mut site, submitter) = mount(&doc, FailurePolicy::Never);
    fill_application(&mut site);

    let form = site.application_mut().unwrap();
    form.set_checked("certifications", "NABCEP", true);
    form.set_checked("certifications", "OSHA 10", true);
    form.set_checked("terms", "on", true);
    form.select_files("licenseUpload", vec![pdf("license.pdf", 1024)])
        .unwrap();

    let started = tokio::time::Instant::now();
    let outcome = form.submit().await;
    assert!(started.elapsed() >= Duration::from_secs(3));

    let SubmitOutcome::Submitted(ack) = outcome else {
        panic!("expected submission");
    };
    assert!(ack.id.unwrap().starts_with("APP-"));

    let (_, payload) = submitter.submissions().remove(0);
    assert_eq!(payload["certifications"], serde_json::json!(["NABCEP", "OSHA 10"]));
    assert_eq!(payload["terms"], "on");
    assert_eq!(payload["licenseUpload"], serde_json::json!(["license.pdf"]));

    let state = doc.state();
    assert!(state.confirmations[APPLICATION_FORM].contains("Application Submitted Successfully!"));
}
