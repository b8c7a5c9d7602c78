pub mod grid;
pub mod io;
pub mod page;
pub mod traits;

pub use self::grid::Grid;
pub use self::page::PageView;
pub use self::traits::{ImageView, ImageViewMut, Rows};
