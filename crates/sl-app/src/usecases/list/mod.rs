mod create_item;
mod fetch_items;

pub use create_item::CreateItem;
pub use fetch_items::FetchItems;
