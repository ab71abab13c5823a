pub mod improvement_card;
pub mod stat_counter;
pub mod summary_banner;
pub mod toast;
