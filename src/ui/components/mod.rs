//! Reusable UI components

// Component architecture
pub mod campaign_table_component;
pub mod detail_modal_component;
pub mod dialog_component;
pub mod dialogs;
pub mod filter_bar_component;
pub mod pagination_component;
pub mod scrollbar_helper;

// Component exports
pub use campaign_table_component::CampaignTableComponent;
pub use detail_modal_component::DetailModalComponent;
pub use dialog_component::DialogComponent;
pub use filter_bar_component::FilterBarComponent;
pub use pagination_component::PaginationComponent;
