use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewPage {
    Home,
    Providers,
    Installers,
    Financing,
    ListBusiness,
    BecomeInstaller,
}

impl PreviewPage {
    /// Container ids present in the page's markup.
    pub fn elements(&self) -> &'static [&'static str] {
        match self {
            PreviewPage::Home => &["header", "mobileMenu", "contactForm"],
            PreviewPage::Providers => &["header", "mobileMenu", "providersGrid"],
            PreviewPage::Installers => &[
                "header",
                "mobileMenu",
                "installersGrid",
                "quoteModal",
                "quoteForm",
            ],
            PreviewPage::Financing => &["header", "mobileMenu", "partnersGrid", "consultationForm"],
            PreviewPage::ListBusiness => &["header", "mobileMenu", "pricingGrid", "businessForm"],
            PreviewPage::BecomeInstaller => &["header", "mobileMenu", "installerApplicationForm"],
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "montelo-preview")]
#[command(about = "Render MONTELO pages headlessly and exercise their controllers")]
pub struct PreviewArgs {
    #[arg(long, value_enum, default_value = "providers")]
    pub page: PreviewPage,

    #[arg(long, help = "TOML file with UI settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Search text applied to the page's listing grid")]
    pub search: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Facet filters as key=value")]
    pub facet: Vec<String>,

    #[arg(long, help = "Pricing plan to select on the business page")]
    pub plan: Option<String>,

    #[arg(long, help = "JSON file persisting the theme preference")]
    pub store: Option<PathBuf>,

    #[arg(long, help = "Toggle the theme before rendering")]
    pub toggle_theme: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PreviewArgs {
    /// `key=value` pairs from `--facet`; malformed entries are skipped.
    pub fn facets(&self) -> Vec<(String, String)> {
        self.facet
            .iter()
            .filter_map(|f| f.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = PreviewArgs::parse_from([
            "montelo-preview",
            "--page",
            "installers",
            "--facet",
            "region=west,tier=verified,broken",
        ]);
        assert_eq!(args.page, PreviewPage::Installers);
        assert_eq!(
            args.facets(),
            vec![
                ("region".to_string(), "west".to_string()),
                ("tier".to_string(), "verified".to_string())
            ]
        );
    }

    #[test]
    fn test_default_page() {
        let args = PreviewArgs::parse_from(["montelo-preview"]);
        assert_eq!(args.page, PreviewPage::Providers);
        assert!(args.page.elements().contains(&"providersGrid"));
    }
}
