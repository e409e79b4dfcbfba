//! View composition for the to-do screen: top bar, task cards, action button and drawer.

mod drawer;
mod layout;
mod overlay;
mod styles;
mod task_list;
mod top_bar;

pub(crate) use layout::compose as compose_root;
