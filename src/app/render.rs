//! HTML fragments for the card grids and the business listing page.
//!
//! 所有插入的文字都先經過 `escape_html`。

use crate::domain::model::{FinancingPartner, Installer, PricingPlan, Provider};
use crate::utils::format::{escape_html, slugify};

const MAX_TAGS: usize = 3;

/// `floor(rating)` full stars, one half star for any fraction, empty stars up to five.
pub fn stars(rating: f32) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() != 0.0);
    let empty = 5usize.saturating_sub(full + half);

    let mut html = String::new();
    html.push_str(&r#"<i class="fas fa-star star"></i>"#.repeat(full));
    html.push_str(&r#"<i class="fas fa-star-half-alt star"></i>"#.repeat(half));
    html.push_str(&r#"<i class="far fa-star star empty"></i>"#.repeat(empty));
    html
}

fn tag_list(values: &[String], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(values.len()).min(values.len());
    let mut html: String = values[..shown]
        .iter()
        .map(|v| format!(r#"<span class="service-tag">{}</span>"#, escape_html(v)))
        .collect();
    if values.len() > shown {
        html.push_str(&format!(
            r#"<span class="service-tag">+{} more</span>"#,
            values.len() - shown
        ));
    }
    html
}

fn contact_block(phone: &str, email: &str) -> String {
    format!(
        concat!(
            r#"<div class="contact-info">"#,
            r#"<div class="contact-item"><i class="fas fa-phone"></i><span>{}</span></div>"#,
            r#"<div class="contact-item"><i class="fas fa-envelope"></i><span>{}</span></div>"#,
            "</div>"
        ),
        escape_html(phone),
        escape_html(email)
    )
}

fn tier_badge(tier: &str) -> String {
    format!(
        r#"<div class="tier-badge {}">{}</div>"#,
        escape_html(&tier.to_lowercase()),
        escape_html(tier)
    )
}

pub fn provider_card(p: &Provider) -> String {
    format!(
        concat!(
            r#"<div class="provider-card" data-id="{id}">"#,
            r#"<div class="provider-header"><div class="provider-info">"#,
            r#"<div class="provider-logo"><i class="{logo}"></i></div>"#,
            r#"<div class="provider-details"><h3>{name}</h3>"#,
            r#"<div class="provider-location"><i class="fas fa-map-marker-alt"></i><span>{location}</span></div>"#,
            "</div></div>{tier}</div>",
            r#"<div class="rating"><div class="stars">{stars}</div>"#,
            r#"<span class="rating-text">{rating}</span>"#,
            r#"<span class="rating-count">({reviews} reviews)</span></div>"#,
            r#"<p class="provider-description">{description}</p>"#,
            r#"<div class="services-section"><h4>Services:</h4><div class="services-tags">{services}</div></div>"#,
            "{contact}",
            r#"<div class="provider-actions">"#,
            r#"<button class="btn btn-primary" data-action="view-details" data-id="{id}">View Details</button>"#,
            r#"<button class="btn btn-outline" data-action="contact" data-id="{id}">Contact</button>"#,
            "</div></div>"
        ),
        id = p.id,
        logo = escape_html(&p.logo),
        name = escape_html(&p.name),
        location = escape_html(&p.location),
        tier = tier_badge(&p.tier),
        stars = stars(p.rating),
        rating = p.rating,
        reviews = p.reviews,
        description = escape_html(&p.description),
        services = tag_list(&p.services, None),
        contact = contact_block(&p.phone, &p.email),
    )
}

pub fn installer_card(i: &Installer) -> String {
    let certifications: String = i
        .certifications
        .iter()
        .map(|c| {
            format!(
                r#"<div class="certification-item"><i class="fas fa-award"></i>{}</div>"#,
                escape_html(c)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="installer-card" data-id="{id}">"#,
            r#"<div class="installer-header"><div class="installer-info">"#,
            r#"<div class="installer-logo"><i class="{logo}"></i></div>"#,
            r#"<div class="installer-details"><h3>{name}</h3>"#,
            r#"<div class="installer-location"><i class="fas fa-map-marker-alt"></i><span>{region}</span></div>"#,
            "</div></div>{tier}</div>",
            r#"<div class="rating"><div class="stars">{stars}</div>"#,
            r#"<span class="rating-text">{rating}</span>"#,
            r#"<span class="rating-count">({reviews})</span>"#,
            r#"<div class="experience"><i class="fas fa-calendar"></i><span>{experience}</span></div></div>"#,
            r#"<p class="installer-description">{description}</p>"#,
            r#"<div class="services-section"><h4>Service Areas:</h4><div class="services-tags">{cities}</div></div>"#,
            r#"<div class="services-section"><h4>Services:</h4><div class="services-tags">{services}</div></div>"#,
            r#"<div class="certifications-section"><h4>Certifications:</h4><div class="certifications-list">{certifications}</div></div>"#,
            r#"<div class="projects-info"><span>Completed Projects: <strong>{projects}+</strong></span></div>"#,
            "{contact}",
            r#"<div class="installer-actions">"#,
            r#"<button class="btn btn-primary" data-action="view-profile" data-id="{id}">View Profile</button>"#,
            r#"<button class="btn btn-outline" data-action="get-quote" data-id="{id}">Get Quote</button>"#,
            "</div></div>"
        ),
        id = i.id,
        logo = escape_html(&i.logo),
        name = escape_html(&i.name),
        region = escape_html(&i.region),
        tier = tier_badge(&i.tier),
        stars = stars(i.rating),
        rating = i.rating,
        reviews = i.reviews,
        experience = escape_html(&i.experience),
        description = escape_html(&i.description),
        cities = tag_list(&i.cities, Some(MAX_TAGS)),
        services = tag_list(&i.services, Some(MAX_TAGS)),
        certifications = certifications,
        projects = i.completed_projects,
        contact = contact_block(&i.phone, &i.email),
    )
}

pub fn partner_card(p: &FinancingPartner) -> String {
    let features: String = p
        .features
        .iter()
        .map(|f| format!(r#"<li><i class="fas fa-check"></i>{}</li>"#, escape_html(f)))
        .collect();
    let badge = if p.featured {
        r#"<span class="tier-badge featured">Featured</span>"#
    } else {
        ""
    };

    format!(
        concat!(
            r#"<div class="partner-card{featured}" data-id="{id}">"#,
            r#"<div class="partner-header"><div class="partner-info">"#,
            "<h3>{name}{badge}</h3>",
            r#"<div class="partner-type">{kind}</div></div>"#,
            r#"<div class="partner-rating"><i class="fas fa-star"></i><span>{rating}</span></div></div>"#,
            r#"<p class="partner-description">{description}</p>"#,
            r#"<div class="partner-features"><h4>Key Features:</h4><ul>{features}</ul></div>"#,
            "{contact}",
            r#"<div class="partner-actions">"#,
            r#"<button class="btn btn-primary" data-action="get-quote" data-id="{id}">Get Quote</button>"#,
            r#"<button class="btn btn-outline" data-action="learn-more" data-id="{id}">Learn More</button>"#,
            "</div></div>"
        ),
        featured = if p.featured { " featured" } else { "" },
        id = p.id,
        name = escape_html(&p.name),
        badge = badge,
        kind = escape_html(&p.kind),
        rating = p.rating,
        description = escape_html(&p.description),
        features = features,
        contact = contact_block(&p.contact, &p.email),
    )
}

pub fn pricing_card(plan: &PricingPlan, selected: bool) -> String {
    let mut classes = String::from("pricing-card");
    if plan.popular {
        classes.push_str(" popular");
    }
    if selected {
        classes.push_str(" selected");
    }
    let features: String = plan
        .features
        .iter()
        .map(|f| format!(r#"<li><i class="fas fa-check"></i>{}</li>"#, escape_html(f)))
        .collect();
    let (button_class, button_label) = if selected {
        ("btn-primary", "Selected")
    } else {
        ("btn-outline", "Select Plan")
    };

    format!(
        concat!(
            r#"<div class="{classes}" data-plan="{name}">"#,
            "<h3>{name}</h3>",
            r#"<div class="pricing-price"><span class="price-amount">${price}</span>"#,
            r#"<span class="price-period">{period}</span></div>"#,
            r#"<p class="pricing-description">{description}</p>"#,
            r#"<ul class="pricing-features">{features}</ul>"#,
            r#"<button class="btn select-plan-btn {button_class}">{button_label}</button>"#,
            "</div>"
        ),
        classes = classes,
        name = escape_html(&plan.name),
        price = plan.price,
        period = escape_html(&plan.period),
        description = escape_html(&plan.description),
        features = features,
        button_class = button_class,
        button_label = button_label,
    )
}

pub fn service_checkboxes(services: &[String]) -> String {
    services
        .iter()
        .map(|service| {
            let id = format!("service-{}", slugify(service));
            format!(
                concat!(
                    r#"<div class="service-checkbox">"#,
                    r#"<input type="checkbox" id="{id}" value="{value}">"#,
                    r#"<label for="{id}">{value}</label>"#,
                    "</div>"
                ),
                id = escape_html(&id),
                value = escape_html(service),
            )
        })
        .collect()
}

pub fn application_confirmation() -> String {
    concat!(
        r#"<div class="success-container">"#,
        r#"<div class="success-icon"><i class="fas fa-check-circle"></i></div>"#,
        "<h2>Application Submitted Successfully!</h2>",
        "<p>Thank you for your interest in becoming a MONTELO certified installer.</p>",
        r#"<div class="success-details">"#,
        r#"<div class="detail-item"><i class="fas fa-clock"></i><span>We'll review your application within 2-3 business days</span></div>"#,
        r#"<div class="detail-item"><i class="fas fa-envelope"></i><span>You'll receive an email confirmation shortly</span></div>"#,
        r#"<div class="detail-item"><i class="fas fa-phone"></i><span>Our team may contact you for additional information</span></div>"#,
        "</div>",
        r#"<div class="success-actions">"#,
        r#"<a href="index.html" class="btn btn-primary">Return to Home</a>"#,
        r#"<a href="installers.html" class="btn btn-outline">Browse Installers</a>"#,
        "</div></div>"
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::Catalog;

    #[test]
    fn test_stars() {
        let html = stars(4.5);
        assert_eq!(html.matches("fa-star star\"").count(), 4);
        assert_eq!(html.matches("fa-star-half-alt").count(), 1);
        assert_eq!(html.matches("empty").count(), 0);

        let html = stars(4.0);
        assert_eq!(html.matches("fa-star-half-alt").count(), 0);
        assert_eq!(html.matches("empty").count(), 1);

        assert_eq!(stars(0.0).matches("empty").count(), 5);
    }

    #[test]
    fn test_installer_card_truncates_tags() {
        let catalog = Catalog::load().unwrap();
        let elite = &catalog.installers[0];
        let html = installer_card(elite);
        assert!(html.contains("+1 more"));
        assert!(html.contains("Completed Projects: <strong>500+</strong>"));
        assert_eq!(html.matches("certification-item").count(), 3);
    }

    #[test]
    fn test_partner_card_featured_badge() {
        let catalog = Catalog::load().unwrap();
        let featured = catalog.partners.iter().find(|p| p.featured).unwrap();
        assert!(partner_card(featured).contains("tier-badge featured"));

        let plain = catalog.partners.iter().find(|p| !p.featured).unwrap();
        assert!(!partner_card(plain).contains("Featured"));
    }

    #[test]
    fn test_provider_card_escapes_text() {
        let mut provider = Catalog::load().unwrap().providers[0].clone();
        provider.name = "Sun & <Co>".to_string();
        let html = provider_card(&provider);
        assert!(html.contains("Sun &amp; &lt;Co&gt;"));
        assert!(html.contains("(124 reviews)"));
    }

    #[test]
    fn test_pricing_card_selection_markup() {
        let plans = Catalog::load().unwrap().plans;
        let selected = pricing_card(&plans[2], true);
        assert!(selected.contains("pricing-card selected"));
        assert!(selected.contains(">Selected</button>"));
        assert!(selected.contains("$199"));

        let popular = pricing_card(&plans[1], false);
        assert!(popular.contains("pricing-card popular"));
        assert!(popular.contains("btn-outline\">Select Plan"));
    }

    #[test]
    fn test_service_checkbox_ids() {
        let html = service_checkboxes(&["Grid-Tie Systems".to_string()]);
        assert!(html.contains(r#"id="service-grid-tie-systems""#));
    }
}
