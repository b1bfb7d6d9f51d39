mod balance_card;
mod core;
mod details_page;
mod selector;
mod statement;

pub use balance_card::balance_card;
pub use core::{Account, Bank};
pub use details_page::get_account_details_page;
pub use selector::account_selector;
pub use statement::get_account_statement;
