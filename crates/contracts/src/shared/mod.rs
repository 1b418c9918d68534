pub mod navigation;
pub mod page_hero;
pub mod slug;
