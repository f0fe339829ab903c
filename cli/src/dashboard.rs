use affidash_core::{format_eur, Overview};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Referrals")]
    referrals: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
}

pub fn show_overview(overview: &Overview) {
    let stats = &overview.stats;

    println!("\x1b[1;36m{}\x1b[0m", overview.username);
    println!("Referral link: {}", overview.referral_link);
    println!();
    println!("Total referrals:  {}", stats.total_referrals);
    println!("This month:       {}", stats.monthly_referrals);
    println!("Earnings (month): {}", format_eur(stats.monthly_earnings));
    println!("Earnings (total): {}", format_eur(stats.total_earnings));
    println!();

    if stats.series.is_empty() {
        println!("No monthly figures yet.");
        return;
    }

    // Newest month on top, like the web table.
    let rows: Vec<MonthRow> = stats
        .series
        .iter()
        .rev()
        .map(|point| MonthRow {
            month: point.label.clone(),
            referrals: point.referrals.to_string(),
            earnings: format_eur(point.earnings),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}
