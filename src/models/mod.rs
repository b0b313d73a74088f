pub mod declaration;
pub mod template;

pub use declaration::{Declaration, DeclarationList, Scope};
pub use template::{DependencyEntry, GroupBlock, Template};
