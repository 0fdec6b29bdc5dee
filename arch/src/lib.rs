pub mod comp;
pub mod dest;
pub mod error;
pub mod inst;
pub mod jump;
pub mod symbol;

pub use comp::Comp;
pub use dest::Dest;
pub use error::Error;
pub use inst::{Inst, Value};
pub use jump::Jump;
