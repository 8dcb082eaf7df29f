use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use foodie_client::FoodieClient;
use shared::{AuthSession, OrderType};
use storefront::{
    CategoryFilter, FilterCriteria, SelectOutcome, SortKey, Storefront, StorefrontConfig,
    TracingNotifier, logger,
};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse the FoodieHub menu and place orders", version, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "FOODIE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show categories and the filtered menu
    Menu {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value = "name", value_parser = clap::value_parser!(SortKey))]
        sort: SortKey,
        #[arg(long)]
        available_only: bool,
    },
    /// Order one menu item
    #[command(arg_required_else_help = true)]
    Order {
        #[arg(long, value_name = "MENU_ITEM_ID")]
        item: i64,
        #[arg(long = "type", value_name = "ORDER_TYPE", value_parser = clap::value_parser!(OrderType))]
        order_type: OrderType,
        #[command(flatten)]
        login: LoginArgs,
    },
    /// List the signed-in customer's orders
    #[command(arg_required_else_help = true)]
    Orders {
        #[command(flatten)]
        login: LoginArgs,
    },
    /// Cancel an order
    #[command(arg_required_else_help = true)]
    Cancel {
        #[arg(long, value_name = "ORDER_ID")]
        order: i64,
        #[command(flatten)]
        login: LoginArgs,
    },
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[arg(long, env = "FOODIE_EMAIL")]
    email: String,
    #[arg(long, env = "FOODIE_PASSWORD", hide_env_values = true)]
    password: String,
}

type CliStorefront = Storefront<Arc<FoodieClient>, Arc<FoodieClient>, TracingNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    logger::init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    tracing::debug!(api_url = %config.api_url, environment = %config.environment, "storefront starting");

    let mut client = FoodieClient::from_config(&config.client_config())
        .context("failed to build API client")?;

    match cli.command {
        Commands::Menu {
            search,
            category,
            sort,
            available_only,
        } => {
            let mut storefront = open(client, &config);
            storefront
                .enter()
                .await
                .context("failed to load the menu")?;
            storefront.catalog_mut().set_criteria(FilterCriteria {
                search_text: search,
                category: CategoryFilter::from(category),
                available_only,
                sort_key: sort,
            });

            let catalog = storefront.catalog();
            println!("Categories: {}", catalog.categories().join(", "));
            for item in catalog.visible() {
                let stock = match (item.is_orderable(), item.quantity) {
                    (false, _) => "unavailable".to_string(),
                    (true, Some(q)) => format!("{q} left"),
                    (true, None) => "available".to_string(),
                };
                println!(
                    "{:>5}  {:<32} {:>8}  {:<14} {}",
                    item.id,
                    item.name,
                    item.price,
                    item.category().unwrap_or("-"),
                    stock
                );
            }
        }
        Commands::Order {
            item,
            order_type,
            login,
        } => {
            let session = sign_in(&mut client, &login).await?;
            let mut storefront = open(client, &config);
            storefront.sign_in(session);
            storefront
                .enter()
                .await
                .context("failed to load the menu")?;

            match storefront.select(item) {
                None => bail!("menu item {item} not found"),
                Some(SelectOutcome::Rejected(reason)) => bail!(reason.message()),
                Some(SelectOutcome::Accepted) => {}
            }
            let confirmation = storefront.place_order(order_type).await?;
            println!("{}", confirmation.message);
        }
        Commands::Orders { login } => {
            let session = sign_in(&mut client, &login).await?;
            let customer_id = session
                .customer_id()
                .context("login did not return a customer id")?;
            let orders = client.get_orders_by_customer(customer_id).await?;
            if orders.is_empty() {
                println!("No orders yet");
            }
            for order in orders {
                println!(
                    "{:>5}  {:<32} {:>8}  {:<9} {:<10} {}",
                    order.order_id,
                    order.menu_item_name.as_deref().unwrap_or("-"),
                    order.total_amount,
                    order.order_type.as_str(),
                    order.status.as_str(),
                    order.created_at
                );
            }
        }
        Commands::Cancel { order, login } => {
            let session = sign_in(&mut client, &login).await?;
            let mut storefront = open(client, &config);
            storefront.sign_in(session);
            let confirmation = storefront.cancel_order(order).await?;
            println!("{}", confirmation.message);
        }
    }

    Ok(())
}

fn open(client: FoodieClient, config: &StorefrontConfig) -> CliStorefront {
    let client = Arc::new(client);
    Storefront::new(client.clone(), client, TracingNotifier)
        .with_default_restaurant(config.default_restaurant_id)
}

async fn sign_in(client: &mut FoodieClient, login: &LoginArgs) -> anyhow::Result<AuthSession> {
    let response = client
        .login(&login.email, &login.password)
        .await
        .context("login failed")?;
    tracing::info!(user_id = response.user_info.user_id, "signed in");
    Ok(AuthSession::from(&response))
}
