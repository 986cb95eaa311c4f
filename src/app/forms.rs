use crate::app::render::application_confirmation;
use crate::core::form::{FormRule, FormSpec, OnSuccess};
use crate::core::upload::UploadRule;
use crate::domain::model::{FieldKind, FieldSpec, Pattern, Placement};

pub const CONTACT_FORM: &str = "contactForm";
pub const CONSULTATION_FORM: &str = "consultationForm";
pub const QUOTE_FORM: &str = "quoteForm";
pub const BUSINESS_FORM: &str = "businessForm";
pub const APPLICATION_FORM: &str = "installerApplicationForm";

pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors in the form before submitting.";

const DOCUMENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];
const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

fn text(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Text).required(true)
}

fn email() -> FieldSpec {
    FieldSpec::new("email", "Email Address", FieldKind::Email)
        .required(true)
        .pattern(Pattern::Email)
}

fn phone(required: bool) -> FieldSpec {
    FieldSpec::new("phone", "Phone Number", FieldKind::Tel)
        .required(required)
        .pattern(Pattern::Phone)
}

fn select(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Select).required(true)
}

/// 首頁聯絡表單
pub fn contact_form() -> FormSpec {
    FormSpec {
        id: CONTACT_FORM.to_string(),
        resource: "contact".to_string(),
        fields: vec![
            text("name", "Full Name"),
            email(),
            phone(false),
            FieldSpec::new("message", "Message", FieldKind::TextArea).required(true),
        ],
        uploads: vec![],
        rules: vec![],
        list_fields: vec![],
        busy_label: "Sending...".to_string(),
        invalid_summary: None,
        issue_placement: Placement::Inline,
        error_message: "Sorry, there was an error sending your message. Please try again."
            .to_string(),
        error_placement: Placement::Inline,
        on_success: OnSuccess::ResetWithMessage {
            placement: Placement::Inline,
            message: "Thank you! Your message has been sent successfully.".to_string(),
        },
    }
}

/// Financing page consultation request.
pub fn consultation_form() -> FormSpec {
    FormSpec {
        id: CONSULTATION_FORM.to_string(),
        resource: "consultations".to_string(),
        fields: vec![
            text("name", "Full Name"),
            email(),
            phone(true),
            select("projectSize", "Project Size"),
            FieldSpec::new("message", "Additional Information", FieldKind::TextArea),
        ],
        uploads: vec![],
        rules: vec![],
        list_fields: vec![],
        busy_label: "Submitting...".to_string(),
        invalid_summary: None,
        issue_placement: Placement::Inline,
        error_message: "Sorry, there was an error submitting your request. Please try again."
            .to_string(),
        error_placement: Placement::Inline,
        on_success: OnSuccess::ResetWithMessage {
            placement: Placement::Inline,
            message: "Thank you! Our finance partners will contact you within 24 hours."
                .to_string(),
        },
    }
}

/// Quote request inside the installers page modal.
pub fn quote_form() -> FormSpec {
    FormSpec {
        id: QUOTE_FORM.to_string(),
        resource: "quotes".to_string(),
        fields: vec![
            text("name", "Full Name"),
            email(),
            phone(true),
            text("address", "Property Address"),
            FieldSpec::new("zipCode", "ZIP Code", FieldKind::Zip)
                .required(true)
                .pattern(Pattern::Zip),
            select("projectType", "Project Type"),
            FieldSpec::new("message", "Project Details", FieldKind::TextArea),
        ],
        uploads: vec![],
        rules: vec![],
        list_fields: vec![],
        busy_label: "Submitting...".to_string(),
        invalid_summary: None,
        issue_placement: Placement::Alert,
        error_message: "Sorry, there was an error submitting your quote request. Please try again."
            .to_string(),
        error_placement: Placement::Alert,
        on_success: OnSuccess::CloseModal {
            message: "Thank you! Your quote request has been submitted. Our certified installers will contact you within 24 hours.".to_string(),
        },
    }
}

/// Business listing application; the page adds the chosen plan and services.
pub fn business_form() -> FormSpec {
    FormSpec {
        id: BUSINESS_FORM.to_string(),
        resource: "business-listings".to_string(),
        fields: vec![
            text("businessName", "Business Name"),
            text("contactPerson", "Contact Person"),
            email(),
            phone(true),
            FieldSpec::new("website", "Website", FieldKind::Text).pattern(Pattern::Website),
            select("businessType", "Business Type"),
            text("city", "City"),
            select("state", "State"),
            FieldSpec::new("description", "Business Description", FieldKind::TextArea)
                .required(true),
            select("yearsInBusiness", "Years in Business"),
            select("teamSize", "Team Size"),
        ],
        uploads: vec![],
        rules: vec![
            FormRule::at_least_one(
                "selectedServices",
                "Please select at least one service that you offer.",
            ),
            FormRule::accepted(
                "acceptTerms",
                "Please accept the Terms and Conditions to continue.",
            ),
        ],
        list_fields: vec!["selectedServices".to_string()],
        busy_label: "Submitting Application...".to_string(),
        invalid_summary: None,
        issue_placement: Placement::Alert,
        error_message: "Sorry, there was an error submitting your application. Please try again."
            .to_string(),
        error_placement: Placement::Alert,
        on_success: OnSuccess::Redirect {
            message: "Thank you! Your business application has been submitted successfully. You will receive a confirmation email shortly and our team will review your application within 24 hours.".to_string(),
            location: "dashboard.html".to_string(),
        },
    }
}

/// Installer application with document uploads.
pub fn application_form(max_upload_bytes: u64) -> FormSpec {
    FormSpec {
        id: APPLICATION_FORM.to_string(),
        resource: "installer-applications".to_string(),
        fields: vec![
            text("firstName", "First Name"),
            text("lastName", "Last Name"),
            text("businessName", "Business Name"),
            email(),
            phone(true),
            text("address", "Business Address"),
            text("city", "City"),
            select("state", "State"),
            FieldSpec::new("zipCode", "ZIP Code", FieldKind::Zip)
                .required(true)
                .pattern(Pattern::Zip),
            text("licenseNumber", "License Number"),
            select("yearsExperience", "Years of Experience"),
            select("teamSize", "Team Size"),
            FieldSpec::new("serviceArea", "Service Area", FieldKind::TextArea).required(true),
            FieldSpec::new("additionalInfo", "Additional Information", FieldKind::TextArea),
        ],
        uploads: vec![
            UploadRule::new("licenseUpload", "licenseFileName", DOCUMENT_TYPES)
                .max_bytes(max_upload_bytes),
            UploadRule::new("insuranceUpload", "insuranceFileName", DOCUMENT_TYPES)
                .max_bytes(max_upload_bytes),
            UploadRule::new("portfolioUpload", "portfolioFileName", IMAGE_TYPES)
                .max_bytes(max_upload_bytes),
        ],
        rules: vec![
            FormRule::at_least_one("certifications", "Please select at least one certification."),
            FormRule::accepted("terms", "Please accept the Terms of Service and Privacy Policy."),
        ],
        list_fields: vec![],
        busy_label: "Submitting Application...".to_string(),
        invalid_summary: Some(INVALID_FORM_MESSAGE.to_string()),
        issue_placement: Placement::Toast,
        error_message: "There was an error submitting your application. Please try again."
            .to_string(),
        error_placement: Placement::Toast,
        on_success: OnSuccess::Confirmation {
            html: application_confirmation(),
        },
    }
}

pub fn all_forms(max_upload_bytes: u64) -> Vec<FormSpec> {
    vec![
        contact_form(),
        consultation_form(),
        quote_form(),
        business_form(),
        application_form(max_upload_bytes),
    ]
}
