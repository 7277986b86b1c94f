pub mod filter_bar;
pub mod nav;
pub mod startup_card;
