pub mod use_add_edit;
pub mod use_collection;
pub mod use_table;
pub mod use_table_search;
pub mod use_title;

pub use use_add_edit::{AddEditHandle, use_add_edit};
pub use use_collection::{CollectionHandle, use_collection};
pub use use_table::{TableHandle, use_table};
pub use use_table_search::{TableSearchHandle, use_table_search};
pub use use_title::use_title;
