mod core;
mod cursor;
mod iterators;
mod node;

pub use self::core::{DList, Visit};
pub use self::cursor::CursorMut;
pub use self::iterators::{IntoIter, Iter, IterMut};
