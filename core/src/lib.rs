pub mod format;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use format::{format_eur, month_label};
pub use model::month::MonthKey;
pub use model::profile::{Profile, Role};
pub use model::referral::ReferralRecord;
pub use repository::{
    FileProfileRepository, FileReferralRepository, FileSessionStore, ProfileRepository,
    ReferralRepository, Session, SessionProvider,
};
pub use service::account::{generate_temp_password, login_email, normalize_username};
pub use service::aggregate::{aggregate, AggregateResult, SeriesPoint, COMMISSION_PER_REFERRAL};
pub use usecase::admin::{AccountRow, AdminUseCase, CreatedAccount};
pub use usecase::overview::{Overview, OverviewUseCase, DEFAULT_REF_BASE_URL};
