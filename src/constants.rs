pub const SITE_NAME: &str = "Harbourline Services";

/// Services offered on the site. The slug is what the contact form submits.
pub const SERVICES: &[(&str, &str, &str)] = &[
    (
        "web-design",
        "Web Design",
        "Responsive websites built around your brand and your customers.",
    ),
    (
        "app-development",
        "App Development",
        "Mobile and web applications from first prototype to launch.",
    ),
    (
        "digital-marketing",
        "Digital Marketing",
        "Search, social and email campaigns that bring in qualified leads.",
    ),
    (
        "consulting",
        "IT Consulting",
        "Practical advice on systems, security and tooling for small teams.",
    ),
];

pub mod routes {
    pub const LOGIN: &str = "/admin/login";

    pub const DASHBOARD: &str = "/admin/dashboard";

    pub const ENQUIRIES: &str = "/admin/enquiries";
}

pub mod session {
    use std::time::Duration;

    /// How often expired session records are purged from the store.
    pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

    pub const ADMIN_LOGGED_IN: &str = "admin_logged_in";

    pub const ADMIN_USERNAME: &str = "admin_username";
}
