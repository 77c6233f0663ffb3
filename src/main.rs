//! Taskboard admin console driver.
//!
//! Thin CLI over the client library: loads configuration, resolves the
//! current role, and runs one management command per invocation.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskboard_admin_client::auth::StaticTokenProvider;
use taskboard_admin_client::client::ApiClient;
use taskboard_admin_client::config::Config;
use taskboard_admin_client::controllers::{
    CollaboratorsController, Notice, NoticeKind, ProductsController, RoleFilter,
};
use taskboard_admin_client::models::{AuthIdentity, Role};
use taskboard_admin_client::session::RoleResolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Taskboard admin console");
    tracing::info!("API base URL: {}", config.api_url);

    // Warn if no token is configured
    if config.api_token.is_none() {
        tracing::warn!(
            "No API token configured (TASKBOARD_API_TOKEN). The backend will reject requests!"
        );
    }

    let authenticated = config.api_token.is_some();
    let tokens = Arc::new(StaticTokenProvider::new(
        config.api_token.clone().unwrap_or_default(),
    ));
    let client = ApiClient::new(&config, tokens);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("users") => run_users(client, &args[1..]).await,
        Some("products") => run_products(client, &args[1..]).await,
        Some("assignable") => run_assignable(client).await,
        Some("whoami") => run_whoami(client, authenticated).await,
        _ => {
            eprintln!("Usage: taskboard-admin-client <command>");
            eprintln!();
            eprintln!("Commands:");
            eprintln!("  users [search] [--role <role>]   list collaborators");
            eprintln!("  products [search]                list products");
            eprintln!("  assignable                       list assignable principals");
            eprintln!("  whoami                           resolve the current role");
        }
    }

    Ok(())
}

async fn run_users(client: ApiClient, args: &[String]) {
    let controller = CollaboratorsController::new(client);

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--role" {
            if let Some(role) = args.next() {
                controller.set_role_filter(RoleFilter::Only(Role::from_wire(role)));
            }
        } else {
            controller.set_search(arg.clone());
        }
    }

    controller.list().await;
    let state = controller.state();
    print_notice(state.notice.as_ref());

    for collaborator in &state.items {
        println!(
            "{:<28} {:<28} {:<14} {}",
            collaborator.listing_name(),
            collaborator.email.as_deref().unwrap_or("-"),
            collaborator.role.label(),
            if collaborator.active { "active" } else { "inactive" }
        );
    }
    println!("{} collaborator(s)", state.items.len());
}

async fn run_products(client: ApiClient, args: &[String]) {
    let controller = ProductsController::new(client);

    if let Some(search) = args.first() {
        controller.set_search(search.clone());
    }

    controller.list().await;
    let state = controller.state();
    print_notice(state.notice.as_ref());

    for product in &state.items {
        println!(
            "{:<28} {:<12} {:<28} {}",
            product.name,
            product.status.label(),
            product.responsible.listing_name(),
            product.end_date.as_deref().unwrap_or("-")
        );
    }
    println!("{} product(s)", state.items.len());
}

async fn run_assignable(client: ApiClient) {
    let controller = ProductsController::new(client);
    controller.load_assignable().await;
    print_notice(controller.state().notice.as_ref());

    for principal in controller.assignable() {
        println!(
            "{:<28} {}",
            principal.listing_name(),
            principal.email.as_deref().unwrap_or("-")
        );
    }
}

async fn run_whoami(client: ApiClient, authenticated: bool) {
    let identity = authenticated.then(|| AuthIdentity::new("cli"));
    let resolver = RoleResolver::new(client, identity);
    resolver.resolve().await;

    let session = resolver.current();
    match session.role {
        Some(role) => println!("{} (source: {:?})", role.label(), session.source),
        None => println!("not signed in"),
    }
}

fn print_notice(notice: Option<&Notice>) {
    if let Some(notice) = notice {
        match notice.kind {
            NoticeKind::Success => println!("ok: {}", notice.message),
            NoticeKind::Info => println!("note: {}", notice.message),
            NoticeKind::Error => eprintln!("error: {}", notice.message),
        }
    }
}
