pub mod card;
pub mod detail_panel;
pub mod filter_chips;
pub mod filter_list;
pub mod remote_image;
pub mod type_badge;
