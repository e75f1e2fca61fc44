pub mod detail_row;
pub mod line_item_table;
pub mod toast;
