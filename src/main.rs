use std::env;

use dotenvy::dotenv;
use pesquera_admin::app::App;
use pesquera_admin::models::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match AppConfig::load(&app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let app = match App::new(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    match app.restore_session() {
        Ok(true) => log::info!("Session restored"),
        Ok(false) => log::warn!("No persisted session, requests go out without a token"),
        Err(err) => {
            log::error!("Failed to read persisted session: {err}");
            std::process::exit(1);
        }
    }

    let mut bell = app.notification_bell();
    bell.mount().await;

    let mut updates = app.notifications().subscribe();
    let mut last_count = updates.borrow().unread_count;
    log::info!("Unread notifications: {last_count}");

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let count = updates.borrow_and_update().unread_count;
                if count != last_count {
                    log::info!("Unread notifications: {count}");
                    last_count = count;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down");
                break;
            }
        }
    }

    bell.unmount();
}
