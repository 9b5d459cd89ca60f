//! Pure mappings from filtered rows to what the screen and the
//! spreadsheet show. Nothing here touches egui.

pub mod chart;
pub mod table;
