use axum::response::Html;
use std::fmt::Write;

use super::{admin_nav, escape, escape_attr, layout, public_nav};
use crate::constants::routes;
use crate::models::enquiry::{
    DashboardSummary, Enquiry, EnquiryFilter, EnquiryListing, EnquiryStatus, StatusCount,
    StatusFilter,
};

pub fn login(error: Option<&str>) -> Html<String> {
    let error = error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Admin login</h1>
{error}<form method="post" action="{action}">
<p><label>Username <input name="username" autocomplete="username" required></label></p>
<p><label>Password <input name="password" type="password" autocomplete="current-password" required></label></p>
<p><button type="submit">Log in</button></p>
</form>"#,
        action = routes::LOGIN,
    );

    layout("Admin login", public_nav(), &body)
}

pub fn dashboard(summary: &DashboardSummary) -> Html<String> {
    let mut body = format!(
        "<h1>Dashboard</h1>\n<p>{} enquiries in total, {} active subscribers ({} ever signed up).</p>\n",
        summary.total_enquiries, summary.active_subscribers, summary.total_subscribers
    );
    body.push_str(&status_summary(&summary.status_counts, &StatusFilter::All));
    let _ = write!(
        body,
        "<p><a href=\"{}?status=new\">Review new enquiries</a></p>",
        routes::ENQUIRIES
    );

    layout("Dashboard", admin_nav(), &body)
}

pub fn enquiries(listing: &EnquiryListing, filter: &EnquiryFilter) -> Html<String> {
    let search = filter.search.as_deref().unwrap_or_default();

    let mut status_options = String::new();
    let mut statuses: Vec<&str> = vec![StatusFilter::ALL_KEYWORD];
    statuses.extend(EnquiryStatus::ALL.iter().map(|s| s.as_str()));
    if let StatusFilter::Only(custom) = &filter.status
        && !statuses.contains(&custom.as_str())
    {
        statuses.push(custom.as_str());
    }
    for status in statuses {
        let selected = if status == filter.status.as_str() {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            status_options,
            "<option value=\"{}\"{selected}>{}</option>",
            escape_attr(status),
            escape(status)
        );
    }

    let mut body = format!(
        r#"<h1>Enquiries</h1>
<form method="get" action="{action}">
<label>Status <select name="status">{status_options}</select></label>
<label>Search <input name="search" value="{search}" placeholder="Name, email or phone"></label>
<button type="submit">Filter</button>
</form>
"#,
        action = routes::ENQUIRIES,
        search = escape_attr(search),
    );

    body.push_str(&status_summary(&listing.status_counts, &filter.status));
    let _ = writeln!(
        body,
        "<p>Showing {} of {} enquiries.</p>",
        listing.enquiries.len(),
        listing.total()
    );

    if listing.enquiries.is_empty() {
        body.push_str("<p>No enquiries match the current filter.</p>");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Received</th><th>Name</th><th>Email</th><th>Phone</th>\
             <th>Service</th><th>Status</th></tr></thead>\n<tbody>\n",
        );
        for enquiry in &listing.enquiries {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td><a href=\"{}/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&enquiry.created_at),
                routes::ENQUIRIES,
                enquiry.id,
                escape(&enquiry.name),
                escape(&enquiry.email),
                escape(&enquiry.phone),
                escape(&enquiry.service),
                escape(&enquiry.status),
            );
        }
        body.push_str("</tbody>\n</table>");
    }

    layout("Enquiries", admin_nav(), &body)
}

pub fn enquiry_detail(enquiry: &Enquiry) -> Html<String> {
    let mut options = String::new();
    for status in EnquiryStatus::ALL {
        let selected = if status.as_str() == enquiry.status {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<option value=\"{}\"{selected}>{}</option>",
            status.as_str(),
            status.label()
        );
    }

    let body = format!(
        r#"<h1>Enquiry #{id}</h1>
<dl>
<dt>Name</dt><dd>{name}</dd>
<dt>Email</dt><dd>{email}</dd>
<dt>Phone</dt><dd>{phone}</dd>
<dt>Service</dt><dd>{service}</dd>
<dt>Received</dt><dd>{created_at}</dd>
<dt>Status</dt><dd>{status}</dd>
</dl>
<h2>Message</h2>
<p style="white-space: pre-wrap">{message}</p>
<form method="post" action="{list}/{id}/status">
<label>Change status <select name="status">{options}</select></label>
<button type="submit">Update</button>
</form>
<p><a href="{list}">Back to enquiries</a></p>"#,
        id = enquiry.id,
        name = escape(&enquiry.name),
        email = escape(&enquiry.email),
        phone = escape(&enquiry.phone),
        service = escape(&enquiry.service),
        created_at = escape(&enquiry.created_at),
        status = escape(&enquiry.status),
        message = escape(&enquiry.message),
        list = routes::ENQUIRIES,
    );

    layout(&format!("Enquiry #{}", enquiry.id), admin_nav(), &body)
}

pub fn error(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"{}\">Back to dashboard</a></p>",
        escape(message),
        routes::DASHBOARD
    );

    layout("Error", admin_nav(), &body)
}

fn status_summary(counts: &[StatusCount], current: &StatusFilter) -> String {
    if counts.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"status-counts\">\n");
    for count in counts {
        let marker = if current.as_str() == count.status {
            " (showing)"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}?status={}\">{}</a>: {}{marker}</li>",
            routes::ENQUIRIES,
            escape_attr(&urlencoding::encode(&count.status)),
            escape(&count.status),
            count.count
        );
    }
    html.push_str("</ul>\n");
    html
}
