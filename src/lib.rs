//! Cyclic lists traversed one cycle at a time, and two-sided lists with a movable index origin.

pub use self::cyclic_iterator::*;
pub use self::cyclic_list::*;
pub use self::direction::*;
pub use self::errors::*;
pub use self::two_sided_list::*;

mod cyclic_iterator;
mod cyclic_list;
mod direction;
mod errors;
mod index;
mod two_sided_list;
