mod bundle;
mod pool;
mod reference;
mod token;

pub use bundle::{Bundle, BUNDLE_ID};
pub use pool::{PairedSide, Pool};
pub use reference::ReferenceTokens;
pub use token::Token;
