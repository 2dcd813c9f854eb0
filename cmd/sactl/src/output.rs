use pkg_params::{list_query_to_params, pagination_params_updater};
use pkg_types::page::{PageState, ServiceAccountPage};
use pkg_types::query::{ListQuery, SortOrder};
use pkg_types::service_account::{NewServiceAccount, ServiceAccount};

/// Header labels in table column order: name, description, client ID,
/// owner, created.
const COLUMNS: [&str; 5] = ["NAME", "DESCRIPTION", "CLIENT ID", "OWNER", "CREATED"];

fn created(sa: &ServiceAccount) -> String {
    sa.created_at_utc()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Header labels with the active sort column marked.
fn header(query: &ListQuery) -> [String; 5] {
    let active = query.order_by.map(|field| field.column_index());
    let arrow = match query.sort_order.unwrap_or_default() {
        SortOrder::Asc => "↑",
        SortOrder::Desc => "↓",
    };
    let mut labels = COLUMNS.map(str::to_string);
    if let Some(label) = active.and_then(|idx| labels.get_mut(idx)) {
        label.push(' ');
        label.push_str(arrow);
    }
    labels
}

fn row(cells: [&str; 5]) -> String {
    let [name, description, client_id, owner, created] = cells;
    format!(
        "{:<24} {:<38} {:<20} {:<20} {}",
        name, client_id, owner, created, description
    )
}

pub fn format_page(page: &ServiceAccountPage, query: &ListQuery) -> Vec<String> {
    let window = &query.window;
    let state = page.state(window);
    if state == PageState::NoData {
        return vec!["(no service accounts)".to_string()];
    }
    if page.is_empty() {
        return vec![format!("(page {} is empty)", window.page())];
    }

    let labels = header(query);
    let mut lines = vec![row(labels.each_ref().map(String::as_str))];
    for sa in &page.service_accounts {
        let created = created(sa);
        lines.push(row([
            &sa.name,
            &sa.description,
            &sa.client_id,
            &sa.created_by,
            &created,
        ]));
    }

    lines.push(String::new());
    let mut footer = page.range_label(window);
    if state == PageState::Results {
        let next = pagination_params_updater(window.page() + 1, window.per_page())(
            &list_query_to_params(query),
        );
        footer.push_str(&format!(" (next: --from-url \"{}\")", next));
    }
    lines.push(footer);
    lines
}

pub fn print_page(page: &ServiceAccountPage, query: &ListQuery) {
    for line in format_page(page, query) {
        println!("{}", line);
    }
}

pub fn print_account(sa: &ServiceAccount) {
    println!("Name:         {}", sa.name);
    println!("Description:  {}", sa.description);
    println!("ID:           {}", sa.id);
    println!("Client ID:    {}", sa.client_id);
    println!("Owner:        {}", sa.created_by);
    println!("Created:      {}", created(sa));
}

pub fn print_credentials(new_sa: &NewServiceAccount) {
    println!("Name:           {}", new_sa.account.name);
    println!("Client ID:      {}", new_sa.account.client_id);
    println!("Client secret:  {}", new_sa.secret);
    println!();
    println!("Copy the client secret now. It will not be shown again.");
}
