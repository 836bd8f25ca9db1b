//! Subcommands

use anyhow::{Result, bail};
use chrono::Utc;
use kernel::error::app_error::{AppError, OptionExt};
use kernel::error::kind::ErrorKind;
use kernel::id::{CategoryId, RequestId};

use auth::models::{SignInCredentials, UserProfile, UserType};
use auth::navigation::RootRoute;
use marketplace::application::{BidsUseCase, CatalogueUseCase, RequestsUseCase};
use marketplace::models::ServiceRequest;

use crate::App;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Show the restored session and the view it selects
    Status,

    /// Sign in with email and password
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Sign out and forget the stored token
    Logout,

    /// Reload the signed-in user from the backend
    Me,

    /// List enabled categories
    Categories {
        /// Only the categories the signed-in supplier works in
        #[arg(long)]
        mine: bool,
    },

    /// List services in a category
    Services {
        #[arg(short, long, value_name = "ID")]
        category: CategoryId,
    },

    /// Open requests (clients) or requests with an active offer (suppliers)
    Requests,

    /// List the offers made on a request
    Bids {
        #[arg(short, long, value_name = "ID")]
        request: RequestId,
    },
}

pub async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Status => status(app),
        Command::Login { email, password } => login(app, email, password).await,
        Command::Logout => {
            app.session.sign_out().await.map_err(report)?;
            println!("Signed out");
            Ok(())
        }
        Command::Me => {
            signed_in(app)?;
            let user = app.session.update_user().await.map_err(report)?;
            print_user(&user);
            Ok(())
        }
        Command::Categories { mine } => categories(app, mine).await,
        Command::Services { category } => {
            signed_in(app)?;
            let services = CatalogueUseCase::new(app.resources.clone())
                .services_in_category(category)
                .await
                .map_err(report)?;
            for service in services {
                println!("{:>5}  {}", service.id, service.name);
            }
            Ok(())
        }
        Command::Requests => requests(app).await,
        Command::Bids { request } => {
            signed_in(app)?;
            let bids = BidsUseCase::new(app.resources.clone())
                .bids_for_request(request)
                .await
                .map_err(report)?;
            if bids.is_empty() {
                println!("No offers yet");
            }
            for bid in bids {
                let supplier = bid
                    .user
                    .as_ref()
                    .map(|u| u.display_name())
                    .unwrap_or_else(|| format!("user {}", bid.user_id));
                println!("{:>5}  {:>10}  {:<9}  {}", bid.id, bid.offer, bid.status, supplier);
            }
            Ok(())
        }
    }
}

fn status(app: &App) -> Result<()> {
    let session = app.session.snapshot();
    println!("route: {}", RootRoute::for_session(&session));
    match session.user() {
        Some(user) => print_user(user),
        None => println!("not signed in"),
    }
    Ok(())
}

async fn login(app: &App, email: String, password: String) -> Result<()> {
    let credentials = SignInCredentials::new(email, password);
    match app.session.sign_in(&credentials).await {
        Ok(user) => {
            println!("Signed in as {}", user.display_name());
            println!("route: {}", app.session.route());
            Ok(())
        }
        Err(err) => {
            if let Some(validation) = err.validation() {
                for (field, messages) in &validation.errors {
                    for message in messages {
                        eprintln!("{field}: {message}");
                    }
                }
            }
            Err(report(err))
        }
    }
}

async fn categories(app: &App, mine: bool) -> Result<()> {
    let user = signed_in(app)?;
    let catalogue = CatalogueUseCase::new(app.resources.clone());
    let categories = if mine {
        if !user.is_supplier() {
            bail!("--mine is only available to suppliers");
        }
        catalogue.supplier_categories(user.id).await
    } else {
        catalogue.active_categories().await
    }
    .map_err(report)?;

    for category in categories {
        println!("{:>5}  {:<24}  {} services", category.id, category.name, category.services_count);
    }
    Ok(())
}

async fn requests(app: &App) -> Result<()> {
    let user = signed_in(app)?;
    let requests = RequestsUseCase::new(app.resources.clone());
    let found = match user.user_type {
        UserType::Client => requests.open_requests_for_client(user.id, Utc::now()).await,
        UserType::Supplier => requests.requests_with_active_offer(user.id).await,
    }
    .map_err(report)?;

    if found.is_empty() {
        println!("Nothing pending");
    }
    for request in &found {
        print_request(request);
    }
    Ok(())
}

fn signed_in(app: &App) -> Result<UserProfile> {
    app.session
        .snapshot()
        .user()
        .cloned()
        .ok_or_app_err(ErrorKind::Unauthorized, "Not signed in")
        .map_err(report)
}

fn print_user(user: &UserProfile) {
    println!("user: {} <{}>", user.display_name(), user.email);
    println!("type: {}", user.user_type);
    if user.is_supplier() {
        println!(
            "rating: {:.1} ({} opinions)",
            user.average_rating, user.total_opinions
        );
    }
}

fn print_request(request: &ServiceRequest) {
    let date = request
        .date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!(
        "{:>5}  {:<16}  {:<20}  {} offers  {}",
        request.id,
        date,
        request.title().unwrap_or("-"),
        request.bids_count,
        request.address
    );
}

/// Log through the library's error conversion and keep the user-facing text
fn report<E: Into<AppError>>(err: E) -> anyhow::Error {
    let mut err: AppError = err.into();
    if err.kind() == ErrorKind::Unauthorized && err.action().is_none() {
        err = err.with_action("sign in with `lapinta login`");
    }
    match err.action() {
        Some(action) => anyhow::anyhow!("{} ({action})", err.message()),
        None => anyhow::anyhow!("{}", err.message()),
    }
}
