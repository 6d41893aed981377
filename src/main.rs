use dari_market::billing::{self, SpendOutcome};
use dari_market::catalog::{display_order, mock_catalog};
use dari_market::describe::{describe_or_keep, CannedGenerator, DescriptionGenerator, HttpGenerator};
use dari_market::inbox::Inbox;
use dari_market::locale;
use dari_market::models::{
    AccountKind, AlertDraft, BoostAnalytics, ListingDraft, PropertyType, SignupProfile,
    SubscriptionTier, TransactionType,
};
use dari_market::search::{filter_listings, FilterCriteria};
use dari_market::store::{FileStorage, SessionStore};
use dari_market::MarketConfig;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Dari Market - Marketplace Demo");
    info!("==================================");
    info!("");

    let storage = FileStorage::new("market_data")?;
    let config = MarketConfig::default();
    let mut store = SessionStore::new(storage.clone(), config);

    let locale = locale::load_preferred(&storage)?;
    info!("Locale: {} (routes under /{}/...)", locale.code(), locale.code());
    locale::store_preferred(&storage, locale)?;

    // Sign up a demo user, or pick up the persisted session
    let restored = store.restore()?.cloned();
    let user = match restored {
        Some(user) => user,
        None => {
            store
                .register(SignupProfile {
                    display_name: "Amine Benali".to_string(),
                    email: "amine@example.com".to_string(),
                    phone: Some("+213 555 12 34 56".to_string()),
                    kind: AccountKind::Individual,
                })
                .await?
        }
    };
    info!("Signed in as {} (balance: {} DZD)", user.display_name, user.balance);
    info!("");

    // Browse rentals in Alger
    let catalog = mock_catalog();
    let criteria = FilterCriteria {
        wilaya: Some("Alger".to_string()),
        transaction: Some(TransactionType::Rent),
        ..Default::default()
    };
    let results = filter_listings(&catalog, &criteria);
    info!("🔎 {} rental(s) in Alger:", results.len());
    for (i, listing) in results.iter().enumerate() {
        println!("{}. {} ({} DZD)", i + 1, listing.title, listing.price);
        println!("   {} m², {}", listing.surface, listing.location.city);
        println!("   Seller: {}", listing.seller.name);
        println!();
    }

    // Favorite the first result and save a matching alert
    if let Some(first) = results.first() {
        store.toggle_favorite(&first.id)?;
        info!("❤️ Added {} to favorites", first.id);
    }
    let alert = store.add_alert(AlertDraft {
        property_type: Some(PropertyType::Apartment),
        transaction: TransactionType::Rent,
        wilaya: "Alger".to_string(),
        max_price: Some(80_000),
    })?;
    let matching = catalog.iter().filter(|l| alert.matches(l)).count();
    info!("🔔 Saved alert {} matches {} current listing(s)", alert.id, matching);
    info!("");

    // Wallet: recharge, go premium, boost a listing
    billing::recharge(&mut store, 2000).await?;
    if let Err(e) = billing::change_subscription(&mut store, SubscriptionTier::Premium).await {
        info!("⚠️ Premium upgrade declined: {e}");
    }
    match billing::purchase_boost(&mut store, "lst-004").await? {
        SpendOutcome::Included => info!("🚀 Boost covered by the premium plan"),
        SpendOutcome::BalanceCharged(cost) => info!("🚀 Boost charged: {cost} DZD"),
    }
    match billing::unlock_phone(&mut store, "lst-004")? {
        SpendOutcome::Included => info!("📞 Phone number revealed (included)"),
        SpendOutcome::BalanceCharged(cost) => info!("📞 Phone number revealed for {cost} DZD"),
    }

    if let Some(boosted) = catalog.iter().find(|l| l.is_boosted) {
        let report = BoostAnalytics::for_listing(boosted, store.config().boost_price);
        info!(
            "📈 Boost report for {}: {} impressions, {} clicks, status {:?}",
            report.listing_id, report.impressions, report.clicks, report.status
        );
    }
    info!("");

    // Compose a listing with a generated description
    let draft = ListingDraft {
        title: "F2 rénové à El Biar".to_string(),
        description: "F2 rénové, cuisine équipée.".to_string(),
        price: 48_000,
        surface: 58,
        property_type: Some(PropertyType::Apartment),
        transaction: Some(TransactionType::Rent),
        city: "El Biar".to_string(),
        wilaya: "Alger".to_string(),
        rooms: Some(2),
        amenities: vec!["Cuisine équipée".to_string(), "Chauffage".to_string()],
    };
    let generator: Box<dyn DescriptionGenerator> = match std::env::var("DESCRIBE_ENDPOINT") {
        Ok(endpoint) => Box::new(HttpGenerator::new(endpoint, std::env::var("DESCRIBE_API_KEY").ok())?),
        Err(_) => Box::new(CannedGenerator::new(
            "F2 entièrement rénové à El Biar, lumineux et proche de toutes commodités.",
        )),
    };
    let description = describe_or_keep(generator.as_ref(), &draft).await;
    let mut draft = draft;
    draft.description = description;
    let published = draft.publish(store.current_user().ok_or_else(|| anyhow::anyhow!("no session"))?)?;
    info!("📝 Draft published locally: {}: {}", published.title, published.description);
    info!("");

    // Inbox
    let mut inbox = Inbox::seeded();
    info!("💬 Inbox: {} unread message(s)", inbox.unread_total());
    inbox.send_message("conv-001", "Parfait, samedi matin me convient.")?;
    inbox.mark_read("conv-001")?;
    info!("💬 After replying: {} unread message(s)", inbox.unread_total());
    info!("");

    // Front page ordering: boosted first
    let ordered = display_order(&catalog);
    info!("⭐ Front page order:");
    for listing in &ordered {
        println!(
            "   {} {} - {}",
            if listing.is_boosted { "🚀" } else { "  " },
            listing.id,
            listing.title
        );
    }

    // Save a session snapshot
    if let Some(user) = store.current_user() {
        let json = serde_json::to_string_pretty(user)?;
        tokio::fs::write("session_snapshot.json", json).await?;
        info!("💾 Saved session snapshot to session_snapshot.json");
    }

    Ok(())
}
