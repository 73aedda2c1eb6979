pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod error_banner;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use error_banner::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use skeleton::*;
