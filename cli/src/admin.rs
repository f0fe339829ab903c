use affidash_core::AccountRow;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Referrals")]
    referrals: String,
    #[tabled(rename = "Temp password")]
    temp_password: String,
}

pub fn show_users(accounts: Vec<AccountRow>) {
    if accounts.is_empty() {
        println!("No accounts found.");
        return;
    }

    let rows: Vec<UserRow> = accounts
        .into_iter()
        .map(|row| UserRow {
            username: row.profile.username,
            role: row.profile.role.to_string(),
            referrals: row.total_referrals.to_string(),
            temp_password: if row.profile.must_change_password {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}
