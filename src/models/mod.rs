pub mod enums;
pub mod evaluation;
pub mod flagged;
pub mod food;
pub mod product;
pub mod profile;
pub mod symptom;

pub use evaluation::*;
pub use flagged::*;
pub use food::*;
pub use product::*;
pub use profile::*;
pub use symptom::*;
