use anyhow::Context;
use clap::Parser;
use montelo_ui::app::site::{submitter_from_config, Site};
use montelo_ui::config::cli::{PreviewArgs, PreviewPage};
use montelo_ui::domain::ports::KeyValueStore;
use montelo_ui::utils::{logger, validation::Validate};
use montelo_ui::{Catalog, HeadlessDocument, JsonFileStore, MemoryStore, UiConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = PreviewArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting montelo-preview ({:?})", args.page);

    let config = match &args.config {
        Some(path) => UiConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => UiConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match &args.store {
        Some(path) => run(&args, config, JsonFileStore::open(path)?).await,
        None => run(&args, config, MemoryStore::new()).await,
    }
}

async fn run<S: KeyValueStore>(args: &PreviewArgs, config: UiConfig, store: S) -> anyhow::Result<()> {
    let doc = HeadlessDocument::new().with_elements(args.page.elements());
    let catalog = Catalog::load()?;
    let submitter = submitter_from_config(&config);

    let mut site = Site::mount(doc.clone(), store, config, catalog, submitter)?;

    if args.toggle_theme {
        if let Err(e) = site.toggle_theme() {
            eprintln!("⚠️ {}", e.user_friendly_message());
        }
    }

    let facets = args.facets();
    match args.page {
        PreviewPage::Providers => {
            if let Some(grid) = site.providers_mut() {
                for (key, value) in &facets {
                    grid.on_facet_change(key, value);
                }
                if let Some(search) = &args.search {
                    grid.on_search_input(search);
                    grid.settle().await;
                }
            }
        }
        PreviewPage::Installers => {
            if let Some(page) = site.installers_mut() {
                let grid = page.listing_mut();
                for (key, value) in &facets {
                    grid.on_facet_change(key, value);
                }
                if let Some(search) = &args.search {
                    grid.on_search_input(search);
                    grid.settle().await;
                }
            }
        }
        PreviewPage::Financing => {
            if let Some(grid) = site.partners_mut() {
                for (key, value) in &facets {
                    grid.on_facet_change(key, value);
                }
                if let Some(search) = &args.search {
                    grid.on_search_input(search);
                    grid.settle().await;
                }
            }
        }
        PreviewPage::ListBusiness => {
            if let (Some(plan), Some(page)) = (&args.plan, site.business_mut()) {
                page.select_plan(plan)?;
            }
        }
        PreviewPage::Home | PreviewPage::BecomeInstaller => {}
    }

    let state = doc.state();
    println!("✅ Mounted: {}", site.mounted().join(", "));
    println!("🎨 Theme: {}", site.theme().as_str());
    if let Some((name, price)) = &state.summary {
        println!("💳 Selected plan: {} ({})", name, price);
    }
    for (root, html) in &state.html {
        let visible = state.grid_visible.get(root).copied().unwrap_or(true);
        if visible {
            println!("\n<!-- {} -->\n{}", root, html);
        } else {
            println!("\n<!-- {}: no results -->", root);
        }
    }

    Ok(())
}
