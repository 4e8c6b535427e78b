// Reusable UI widgets

pub mod toast;

pub use toast::{toast_area, ToastWidget, CELL_POINTS};
