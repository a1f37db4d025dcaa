//! Veyra selection-state sandbox.
//!
//! Drives the stack end to end: mounts the URL synchronizer on a scripted
//! history, walks through setter and navigation scenarios, and prints the
//! derived values after each step.
//!
//! Usage: cargo run --bin veyra

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use veyra_core::fx::FxConfig;
use veyra_core::reference::AVAILABLE_CURRENCIES;
use veyra_urlstate::{History, UrlState};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veyra=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The session opens on a shared deep link
    let history = History::with_query("chargeType=destination&platformCountry=US");
    let config = Rc::new(RefCell::new(FxConfig::new()));
    let state = UrlState::mount(Rc::clone(&config), &history);
    info!("Opened on: {}", state.config().borrow().selection_summary());

    // Manual selections through the setters
    config.borrow_mut().set_connected_country("JP");
    config.borrow_mut().set_presentment_currency("EUR");
    info!("After selections: {}", config.borrow().selection_summary());

    // A later deep link arrives as a push; pushes are silent until reloaded
    history.push("platformCountry=AU&feePayer=platform");
    state.reload();
    info!("After reload: {}", config.borrow().selection_summary());

    // Back to the opening entry; the traversal resynchronizes on its own
    history.back();
    info!("After back: {}", config.borrow().selection_summary());

    print_rate_sheet(&config.borrow());

    let snapshot = serde_json::to_string_pretty(&*config.borrow())?;
    println!("{snapshot}");

    Ok(())
}

/// Prints the cross-rate matrix over the reference currencies.
fn print_rate_sheet(config: &FxConfig) {
    println!("Cross rates ({} currencies):", AVAILABLE_CURRENCIES.len());
    for from in AVAILABLE_CURRENCIES {
        for to in AVAILABLE_CURRENCIES {
            print!("  {:>10.4}", config.rate(from.code, to.code));
        }
        println!("  {}", from.code);
    }
}
