// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod textarea;

// Primitive wrappers
pub mod accordion;
pub mod alert_dialog;
pub mod dialog;
pub mod label;
pub mod separator;
pub mod toast;

// Charts, drawn over `crate::chart`
pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;

pub use accordion::*;
pub use alert_dialog::*;
pub use badge::*;
pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use donut_chart::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use line_chart::*;
pub use page_header::*;
pub use separator::*;
pub use textarea::*;
pub use toast::*;
