pub mod card_highlight;
pub mod column_drop;
