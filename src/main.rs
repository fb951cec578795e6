use tracing::{error, info, Instrument};

use cart_store::notification::notify;
use cart_store::{setup_tracing, Cart, CartConfig, CatalogProduct, ShopSystem, UpdateProductAmount};

fn catalog() -> Vec<(CatalogProduct, u32)> {
    let shoe = |id: u64, title: &str, price: f64, stock: u32| {
        let product = CatalogProduct::new(id)
            .with_field("title", title)
            .with_field("price", price)
            .with_field("image", format!("https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis{id}.jpg"));
        (product, stock)
    };
    vec![
        shoe(1, "Tênis de Caminhada Leve Confortável", 179.9, 5),
        shoe(2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9, 3),
        shoe(3, "Tênis Adidas Duramo Lite 2.0", 219.9, 2),
    ]
}

fn log_cart(cart: &Cart) {
    for item in cart.items() {
        info!(product_id = item.id, amount = item.amount, title = item.title().unwrap_or("-"), "Line item");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    let storage = config.open_storage().map_err(|e| e.to_string())?;
    info!(storage_key = %config.storage_key, storage_dir = ?config.storage_dir, "Starting cart demo");

    let system = ShopSystem::new(&config, storage);
    system.seed_catalog(catalog()).await.map_err(|e| e.to_string())?;

    let mut updates = system.cart.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let cart = updates.borrow_and_update().clone();
            info!(items = cart.len(), total_amount = cart.total_amount(), "Cart re-rendered");
        }
    });

    let span = tracing::info_span!("shopping_session");
    async {
        let attempts = [
            system.cart.add_product(1).await,
            system.cart.add_product(1).await,
            system.cart.update_product_amount(UpdateProductAmount { product_id: 1, amount: 10 }).await,
            system.cart.add_product(3).await,
            system.cart.remove_product(2).await,
            system.cart.remove_product(1).await,
        ];
        for attempt in attempts {
            match attempt {
                Ok(cart) => log_cart(&cart),
                Err(e) => {
                    let toast = notify(&e);
                    error!(toast = toast.message, "Shown to shopper");
                }
            }
        }
    }
    .instrument(span)
    .await;

    log_cart(&system.cart.read());
    system.shutdown().await?;
    let _ = watcher.await;

    info!("Cart demo completed");
    Ok(())
}
