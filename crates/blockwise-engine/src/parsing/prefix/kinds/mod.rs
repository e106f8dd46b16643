pub mod block_quote;
pub mod bullet;
pub mod checkbox;
pub mod code_fence;
pub mod heading;
pub mod number;

pub use block_quote::BlockQuote;
pub use bullet::Bullet;
pub use checkbox::Checkbox;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use number::Number;
