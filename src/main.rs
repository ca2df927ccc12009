//! Demo: one customer visit, from menu to placed order.
//!
//! Runs against the remote store when `STOREFRONT_STORE_URL` is set, and
//! otherwise against the in-memory actors seeded with a sample menu.

use kitchen_storefront::checkout::DeliveryDetails;
use kitchen_storefront::config::StorefrontConfig;
use kitchen_storefront::lifecycle::{setup_tracing, StorefrontSystem};
use kitchen_storefront::model::SizeVariant;
use kitchen_storefront::session::Storefront;
use kitchen_storefront::store::{RestStore, TableStore};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(remote = config.store.is_some(), "Starting storefront");

    let (store, system): (Arc<dyn TableStore>, Option<StorefrontSystem>) = match &config.store {
        Some(store_config) => {
            let store = RestStore::new(store_config).map_err(|e| e.to_string())?;
            (Arc::new(store) as Arc<dyn TableStore>, None)
        }
        None => {
            let system = StorefrontSystem::new();
            system
                .seed_menu(StorefrontSystem::sample_menu())
                .await
                .map_err(|e| e.to_string())?;
            (Arc::new(system.store()) as Arc<dyn TableStore>, Some(system))
        }
    };

    let mut storefront = Storefront::open(store, &config).await;
    for category in storefront.menu().categories() {
        info!(category = %category.name, items = category.items.len(), "Menu category");
    }

    // Fill the cart: first flat item twice, first variant item as a half.
    let picks: Vec<_> = storefront
        .menu()
        .categories()
        .iter()
        .flat_map(|c| c.items.iter())
        .cloned()
        .collect();
    if let Some(flat) = picks.iter().find(|item| !item.has_variants()) {
        for _ in 0..2 {
            storefront
                .cart_mut()
                .add_item(flat, None)
                .map_err(|e| e.to_string())?;
        }
    }
    if let Some(variant) = picks.iter().find(|item| item.has_variants()) {
        storefront
            .cart_mut()
            .add_item(variant, Some(SizeVariant::Half))
            .map_err(|e| e.to_string())?;
    }

    let summary = storefront.summary();
    info!(
        items = storefront.cart().item_count(),
        subtotal = summary.subtotal,
        delivery = summary.delivery_charge,
        total = summary.total,
        "Cart ready"
    );
    if let Some(gap) = summary.free_delivery_gap {
        info!("Add {gap} more to your cart for FREE delivery!");
    }

    let span = tracing::info_span!("checkout");
    let result = async {
        let mut flow = storefront.begin_checkout();
        *flow.details_mut() = DeliveryDetails::new("Asha", "9800000000", "12 Lake Road");
        flow.continue_to_payment().map_err(|e| e.user_message())?;

        let links = storefront.payment_links().map_err(|e| {
            error!(error = %e, "Could not build payment links");
            "Could not build payment links"
        })?;
        info!(phonepe = %links.phonepe, paytm = %links.paytm, "Pay with a UPI app");
        flow.initiate_payment().map_err(|e| e.user_message())?;
        flow.enter_reference("4021 5566 7788");

        storefront
            .place_order(&mut flow)
            .await
            .map_err(|e| e.user_message())?;
        Ok::<_, &'static str>(flow.finish())
    }
    .instrument(span)
    .await;

    match result {
        Ok(Some(order_id)) => info!(%order_id, "Order placed successfully"),
        Ok(None) => error!("Checkout ended without an order"),
        Err(reason) => error!(reason, "Checkout failed"),
    }

    drop(storefront);
    if let Some(system) = system {
        system.shutdown().await?;
    }

    info!("Storefront demo completed");
    Ok(())
}
