// Component-based architecture for the barcarte TUI

pub mod component;

pub mod footer;
pub mod header;
pub mod menu_board;

pub use component::{Component, ComponentAction};
pub use footer::Footer;
pub use header::Header;
pub use menu_board::MenuBoardComponent;
