use crate::domain::model::{FinancingPartner, Installer, Listing, PricingPlan, Provider};
use crate::utils::error::{Result, UiError};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const PROVIDERS_JSON: &str = include_str!("../../data/providers.json");
const INSTALLERS_JSON: &str = include_str!("../../data/installers.json");
const PARTNERS_JSON: &str = include_str!("../../data/partners.json");
const PLANS_JSON: &str = include_str!("../../data/plans.json");
const SERVICES_JSON: &str = include_str!("../../data/services.json");

pub const DEFAULT_PLAN: &str = "Premium";

/// 所有頁面共用的靜態目錄資料
#[derive(Debug, Clone)]
pub struct Catalog {
    pub providers: Vec<Provider>,
    pub installers: Vec<Installer>,
    pub partners: Vec<FinancingPartner>,
    pub plans: Vec<PricingPlan>,
    pub services: Vec<String>,
}

impl Catalog {
    /// Parses and checks the embedded datasets.
    pub fn load() -> Result<Self> {
        let catalog = Self {
            providers: parse_listings("providers", PROVIDERS_JSON)?,
            installers: parse_listings("installers", INSTALLERS_JSON)?,
            partners: parse_listings("partners", PARTNERS_JSON)?,
            plans: parse_plans(PLANS_JSON)?,
            services: serde_json::from_str(SERVICES_JSON)?,
        };

        tracing::info!(
            "📚 Catalog loaded: {} providers, {} installers, {} partners, {} plans, {} services",
            catalog.providers.len(),
            catalog.installers.len(),
            catalog.partners.len(),
            catalog.plans.len(),
            catalog.services.len()
        );
        Ok(catalog)
    }
}

pub fn parse_listings<T>(catalog: &str, json: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Listing,
{
    let items: Vec<T> = serde_json::from_str(json)?;
    validate_listings(catalog, &items)?;
    Ok(items)
}

/// Ids must be unique and ratings within 0..=5.
pub fn validate_listings<T: Listing>(catalog: &str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(catalog_error(catalog, format!("duplicate id {}", item.id())));
        }
        if !(0.0..=5.0).contains(&item.rating()) {
            return Err(catalog_error(
                catalog,
                format!("{} has rating {} outside 0-5", item.name(), item.rating()),
            ));
        }
    }
    Ok(())
}

pub fn parse_plans(json: &str) -> Result<Vec<PricingPlan>> {
    let plans: Vec<PricingPlan> = serde_json::from_str(json)?;

    let mut names = HashSet::new();
    for plan in &plans {
        if !names.insert(plan.name.as_str()) {
            return Err(catalog_error("plans", format!("duplicate plan {}", plan.name)));
        }
    }
    if !names.contains(DEFAULT_PLAN) {
        return Err(catalog_error("plans", format!("default plan {} missing", DEFAULT_PLAN)));
    }
    Ok(plans)
}

fn catalog_error(catalog: &str, message: String) -> UiError {
    UiError::CatalogError {
        catalog: catalog.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.providers.len(), 6);
        assert_eq!(catalog.installers.len(), 6);
        assert_eq!(catalog.services.len(), 13);

        let prices: Vec<(&str, u32)> = catalog
            .plans
            .iter()
            .map(|p| (p.name.as_str(), p.price))
            .collect();
        assert_eq!(prices, vec![("Standard", 49), ("Premium", 99), ("Elite", 199)]);
        assert!(catalog.plans.iter().any(|p| p.name == DEFAULT_PLAN && p.popular));
    }

    #[test]
    fn test_installer_fields_are_camel_case() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.installers[0].completed_projects, 500);
        assert_eq!(catalog.partners[0].kind, "Bank");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "type": "Bank", "description": "", "features": [],
             "rating": 4.0, "contact": "", "email": "", "featured": false},
            {"id": 1, "name": "B", "type": "Bank", "description": "", "features": [],
             "rating": 4.0, "contact": "", "email": "", "featured": false}
        ]"#;
        let err = parse_listings::<FinancingPartner>("partners", json).unwrap_err();
        assert!(matches!(err, UiError::CatalogError { .. }));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "type": "Bank", "description": "", "features": [],
             "rating": 5.5, "contact": "", "email": "", "featured": false}
        ]"#;
        assert!(parse_listings::<FinancingPartner>("partners", json).is_err());
    }

    #[test]
    fn test_plans_require_default() {
        let json = r#"[{"name": "Solo", "price": 10, "period": "/month",
                        "description": "", "features": [], "popular": false}]"#;
        assert!(parse_plans(json).is_err());
    }
}
