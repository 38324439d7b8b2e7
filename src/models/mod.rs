mod cart;
mod category;
mod event;
mod location;
mod order;
mod payment;
mod product;
mod user;

pub use cart::*;
pub use category::*;
pub use event::*;
pub use location::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use user::*;
