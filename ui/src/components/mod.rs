pub mod field_input;
pub mod form_panel;
pub mod layout;
pub mod notices;
pub mod pagination_controls;
pub mod record_table;
pub mod search_box;

pub use field_input::FieldInput;
pub use form_panel::FormPanel;
pub use layout::MainLayout;
pub use notices::NoticeList;
pub use pagination_controls::PaginationControls;
pub use record_table::RecordTable;
pub use search_box::SearchBox;
