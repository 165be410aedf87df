use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::time::Duration;

use foodie_config::{AppConfig, LatencyConfig, Session, SessionStatus};
use foodie_hub::actions::{
    wishlist, Action, CartAction, CheckoutAction, TrackingAction, UserAction, WishlistAction,
};
use foodie_hub::catalog::{Catalog, MenuQuery, SortBy};
use foodie_hub::checkout::{place_order, OrderConfirmation};
use foodie_hub::domain_models::{compute_totals, saved_addresses, PaymentMethod, User};
use foodie_hub::middleware::{CheckoutMiddleware, LoggingMiddleware};
use foodie_hub::order_registry::OrderRegistry;
use foodie_hub::state::{AppState, TrackingState};
use foodie_hub::store::Store;

mod logger;

/// Order id looked up when `--track` is not given
const DEMO_ORDER_ID: &str = "FH123456";

/// Scripted FoodieHub ordering session
#[derive(Debug, Parser)]
#[command(name = "foodie-hub", version, about)]
struct Args {
    /// Continue as guest instead of signing in
    #[arg(long)]
    guest: bool,

    /// Order id to look up on the tracking screen
    #[arg(long, value_name = "ORDER_ID")]
    track: Option<String>,

    /// Skip the simulated network delays
    #[arg(long)]
    no_delay: bool,

    /// Print the order confirmation as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = logger::init()?;
    log::info!("Starting foodie-hub (log: {})", log_file.display());

    let config = AppConfig::load();
    let latency = if args.no_delay {
        LatencyConfig::none()
    } else {
        config.latency
    };

    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(CheckoutMiddleware::new()));

    let mut session = Session::load();
    sign_in(&mut store, &mut session, &config, &latency, args.guest).await;

    let catalog = Catalog::builtin()?;
    browse(&mut store, &catalog, &config)?;

    let confirmation = checkout(&mut store, &config, &latency).await?;
    if args.json {
        let json = serde_json::to_string_pretty(&confirmation)
            .context("Failed to serialize order confirmation")?;
        println!("{}", json);
    } else {
        print_confirmation(&confirmation, &config);
    }

    let order_id = args.track.as_deref().unwrap_or(DEMO_ORDER_ID);
    track(&mut store, &OrderRegistry::mock(), order_id, &latency).await;

    log::info!("Exiting foodie-hub");
    Ok(())
}

async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

async fn sign_in(
    store: &mut Store,
    session: &mut Session,
    config: &AppConfig,
    latency: &LatencyConfig,
    guest: bool,
) {
    let user = if guest {
        session.continue_as_guest();
        User::guest()
    } else {
        if session.status() == SessionStatus::Authenticated {
            log::info!("Restoring signed-in session");
        } else {
            simulate_latency(latency.login_ms).await;
            session.login();
        }
        User::demo(config.demo_email.clone())
    };

    if let Err(e) = session.save() {
        log::warn!("Failed to save session: {:#}", e);
    }

    println!("Signed in as {} <{}>", user.name, user.email);
    store.dispatch(Action::User(UserAction::Set(user)));
}

fn browse(store: &mut Store, catalog: &Catalog, config: &AppConfig) -> Result<()> {
    println!("Categories: {}", catalog.categories().join(", "));

    let pizzas = catalog.query(
        &MenuQuery::default()
            .category("Pizza")
            .sort(SortBy::Rating),
    );
    let favourite = pizzas
        .first()
        .map(|item| (*item).clone())
        .context("No pizza on the menu")?;

    for item in &pizzas {
        println!(
            "  {:<28} {:>9}  ★ {:.1}",
            item.name,
            config.format_amount(item.price),
            item.rating
        );
    }

    store.dispatch(Action::Cart(CartAction::Add(favourite.clone())));
    store.dispatch(Action::Cart(CartAction::Add(favourite.clone())));
    store.dispatch(Action::Cart(CartAction::UpdateQuantity {
        id: favourite.id.clone(),
        quantity: 1,
    }));

    let saved = catalog
        .query(&MenuQuery::default().search("chicken").sort(SortBy::Price))
        .into_iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>();
    for item in &saved {
        store.dispatch(Action::Wishlist(WishlistAction::Add(item.clone())));
    }

    let wishlist_items = store.state().wishlist_items.clone();
    store.dispatch_all(wishlist::add_all_to_cart(&wishlist_items));
    store.dispatch_all(wishlist::clear_all(&wishlist_items));

    let state = store.state();
    println!("Cart ({} items):", state.cart_count());
    for line in &state.cart_items {
        println!(
            "  {} x {:<24} {:>9}",
            line.quantity,
            line.item.name,
            config.format_amount(line.line_total())
        );
    }

    let totals = compute_totals(&state.cart_items, &config.pricing);
    println!("  Subtotal {:>9}", config.format_amount(totals.subtotal));
    if totals.free_delivery() {
        println!("  Delivery      FREE");
    } else {
        println!("  Delivery {:>9}", config.format_amount(totals.delivery_fee));
    }
    if let Some(missing) = totals.amount_to_free_delivery(&config.pricing) {
        println!(
            "  Add {} more for free delivery!",
            config.format_amount(missing)
        );
    }
    println!("  Tax      {:>9}", config.format_amount(totals.tax));
    println!("  Total    {:>9}", config.format_amount(totals.total));

    Ok(())
}

async fn checkout(
    store: &mut Store,
    config: &AppConfig,
    latency: &LatencyConfig,
) -> Result<OrderConfirmation> {
    let address = saved_addresses()
        .into_iter()
        .next()
        .context("No saved delivery address")?;

    store.dispatch_all([
        Action::Checkout(CheckoutAction::SelectAddress(address)),
        Action::Checkout(CheckoutAction::Next),
        Action::Checkout(CheckoutAction::SelectPayment(PaymentMethod::Upi)),
        Action::Checkout(CheckoutAction::Next),
    ]);

    for step in store.state().checkout.progress() {
        let marker = if step.active {
            ">"
        } else if step.completed {
            "x"
        } else {
            " "
        };
        println!("[{}] {}. {}", marker, step.stage.number(), step.stage.title());
    }

    simulate_latency(latency.place_order_ms).await;
    let confirmation = place_order(store.state(), &config.pricing, Utc::now())
        .context("Failed to place order")?;
    store.dispatch(Action::Checkout(CheckoutAction::OrderPlaced(
        confirmation.clone(),
    )));

    Ok(confirmation)
}

fn print_confirmation(confirmation: &OrderConfirmation, config: &AppConfig) {
    println!("Order placed: {}", confirmation.order_number);
    println!("  Deliver to: {}", confirmation.address.full_address);
    println!(
        "  Payment:    {} ({})",
        confirmation.payment.label(),
        confirmation.payment.details()
    );
    println!(
        "  Total:      {} for {} items",
        config.format_amount(confirmation.totals.total),
        confirmation.item_count
    );
    println!("  Arriving in {}", confirmation.estimated_time);
}

async fn track(
    store: &mut Store,
    registry: &OrderRegistry,
    input: &str,
    latency: &LatencyConfig,
) {
    store.dispatch(Action::Tracking(TrackingAction::Submit(input.to_string())));

    let (order_id, record) = match &store.state().tracking {
        TrackingState::Loading { order_id } => (order_id.clone(), registry.get(order_id).cloned()),
        _ => {
            println!("Enter an order id to track");
            return;
        }
    };

    simulate_latency(latency.tracking_ms).await;
    store.dispatch(Action::Tracking(TrackingAction::Resolved { order_id, record }));

    match &store.state().tracking {
        TrackingState::Found(order) => {
            println!(
                "Order {} from {} ({:.0}% there)",
                order.id,
                order.restaurant,
                order.progress() * 100.0
            );
            for step in order.timeline() {
                let marker = if step.completed { "x" } else { " " };
                let suffix = if step.active { " (current)" } else { "" };
                println!("  [{}] {}{}", marker, step.stage.label(), suffix);
            }
            println!("  ETA: {}  Total: {}", order.estimated_time, order.order_total);
        }
        TrackingState::NotFound { order_id } => {
            println!("Order {} not found", order_id);
        }
        _ => {}
    }
}
