use anyhow::{Context, Result};
use clap::Parser;
use pkg_client::ServiceAccountsClient;
use pkg_params::{
    SearchParams, clear_filters_params_updater, filters_params_updater, list_query_from_params,
    pagination_params_updater, sort_params_updater,
};
use pkg_types::page::PageWindow;
use pkg_types::query::{FilterKey, Filters, ListQuery};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;
mod settings;

use cli::{Cli, Commands, FilterArgs, ListArgs, UrlAction};
use settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    match cli.command {
        Commands::List(args) => {
            let client = build_client(&settings)?;
            let query = list_query(&args, settings.per_page);
            info!("Listing service accounts from {}", client.base_url());
            let page = client
                .fetch_service_accounts(&query)
                .await
                .context("Failed to list service accounts")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                output::print_page(&page, &query);
            }
        }
        Commands::Get { id, json } => {
            let client = build_client(&settings)?;
            let sa = client.fetch_service_account(&id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sa)?);
            } else {
                output::print_account(&sa);
            }
        }
        Commands::Create { name, description } => {
            let client = build_client(&settings)?;
            let created = client
                .create_service_account(&name, &description)
                .await
                .context("Failed to create service account")?;
            output::print_credentials(&created);
        }
        Commands::Delete { id } => {
            let client = build_client(&settings)?;
            client
                .delete_service_account(&id)
                .await
                .with_context(|| format!("Failed to delete service account {}", id))?;
            println!("Service account {} deleted", id);
        }
        Commands::ResetSecret { id } => {
            let client = build_client(&settings)?;
            let reset = client
                .reset_service_account_secret(&id)
                .await
                .with_context(|| format!("Failed to reset secret of service account {}", id))?;
            output::print_credentials(&reset);
        }
        Commands::Url { action } => println!("{}", rewrite_url(action)),
    }

    Ok(())
}

fn build_client(settings: &Settings) -> Result<ServiceAccountsClient> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;
    Ok(ServiceAccountsClient::with_http_client(
        http,
        &settings.sso,
        settings.token()?,
    ))
}

/// URL state first, then explicit flags on top.
fn list_query(args: &ListArgs, default_per_page: u64) -> ListQuery {
    let params = args.from_url.clone().unwrap_or_default();
    let mut query = list_query_from_params(&params);
    if args.from_url.is_none() || !params.has(pkg_params::keys::PER_PAGE) {
        query.window = PageWindow::new(query.window.page(), default_per_page);
    }

    if args.page.is_some() || args.per_page.is_some() {
        query.window = PageWindow::new(
            args.page.unwrap_or(query.window.page()),
            args.per_page.unwrap_or(query.window.per_page()),
        );
    }
    if args.order_by.is_some() {
        query.order_by = args.order_by;
    }
    if args.sort_order.is_some() {
        query.sort_order = args.sort_order;
    }
    for (key, value) in filter_args(&args.filters) {
        if value.is_some() {
            query.filters.set(key, value);
        }
    }
    query
}

fn filter_args(args: &FilterArgs) -> [(FilterKey, Option<String>); 3] {
    [
        (FilterKey::Name, args.name.clone()),
        (FilterKey::ClientId, args.client_id.clone()),
        (FilterKey::Creator, args.creator.clone()),
    ]
}

fn rewrite_url(action: UrlAction) -> SearchParams {
    match action {
        UrlAction::Sort {
            column,
            direction,
            query,
        } => sort_params_updater(column, direction)(&query),
        UrlAction::Filter { filters, query } => {
            let mut new_filters = Filters::default();
            for (key, value) in filter_args(&filters) {
                new_filters.set(key, value);
            }
            filters_params_updater(new_filters)(&query)
        }
        UrlAction::Clear { query } => clear_filters_params_updater()(&query),
        UrlAction::Page {
            page,
            per_page,
            query,
        } => pagination_params_updater(page, per_page)(&query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::query::{SortByField, SortOrder};

    #[test]
    fn list_query_uses_configured_page_size() {
        let query = list_query(&ListArgs::default(), 20);
        assert_eq!(query.window, PageWindow::new(1, 20));
    }

    #[test]
    fn list_query_flags_override_url_state() {
        let args = ListArgs {
            from_url: Some(SearchParams::parse("?page=3&perPage=10&orderBy=name&name=old")),
            page: Some(5),
            sort_order: Some(SortOrder::Desc),
            filters: FilterArgs {
                name: Some("new".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = list_query(&args, 50);

        assert_eq!(query.window, PageWindow::new(5, 10));
        assert_eq!(query.order_by, Some(SortByField::Name));
        assert_eq!(query.sort_order, Some(SortOrder::Desc));
        assert_eq!(query.filters.get(FilterKey::Name), Some("new"));
    }

    #[test]
    fn url_sort_resets_page() {
        let result = rewrite_url(UrlAction::Sort {
            column: 4,
            direction: SortOrder::Desc,
            query: "page=3&perPage=20".parse().unwrap(),
        });
        assert_eq!(
            result.to_string(),
            "page=1&perPage=20&orderBy=createdAt&sortOrder=desc"
        );
    }

    #[test]
    fn url_filter_replaces_filters() {
        let result = rewrite_url(UrlAction::Filter {
            filters: FilterArgs {
                creator: Some("a@b.com".to_string()),
                ..Default::default()
            },
            query: "page=2&name=old".parse().unwrap(),
        });
        assert_eq!(result.to_string(), "page=1&creator=a%40b.com");
    }

    #[test]
    fn url_query_argument_is_parsed() {
        let cli = Cli::try_parse_from(["sactl", "url", "clear", "?page=3&name=a&perPage=20"])
            .unwrap();
        let Commands::Url { action } = cli.command else {
            panic!("expected url command");
        };
        assert_eq!(rewrite_url(action).to_string(), "page=1&perPage=20");
    }
}
