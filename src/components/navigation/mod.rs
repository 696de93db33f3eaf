pub mod link_item;
pub mod link_list;

pub use link_item::LinkItem;
pub use link_list::LinkList;
