//! List enquiries command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::enquiry::{EnquiryFilter, StatusFilter};

pub async fn cmd_list_enquiries(
    config: &Config,
    status: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let filter = EnquiryFilter::from_params(status, search);

    let (enquiries, counts) =
        tokio::try_join!(store.list_enquiries(&filter), store.enquiry_status_counts())?;

    if enquiries.is_empty() {
        match (&filter.status, &filter.search) {
            (StatusFilter::All, None) => println!("No enquiries received yet."),
            _ => println!("No enquiries match the current filter."),
        }
        return Ok(());
    }

    println!(
        "Enquiries ({} shown, status: {})",
        enquiries.len(),
        filter.status.as_str()
    );
    println!("{:-<70}", "");

    for enquiry in &enquiries {
        println!(
            "#{} {} <{}> [{}]",
            enquiry.id, enquiry.name, enquiry.email, enquiry.status
        );
        println!(
            "  Phone: {} | Service: {} | Received: {}",
            enquiry.phone, enquiry.service, enquiry.created_at
        );
    }

    println!();
    let summary: Vec<String> = counts
        .iter()
        .map(|c| format!("{}: {}", c.status, c.count))
        .collect();
    println!("By status: {}", summary.join(", "));

    Ok(())
}
