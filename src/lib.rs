//! gazetteer-rs: umbrella crate re-exporting [`gazetteer_core`].
//!
//! Front ends depend on this crate and `use gazetteer_rs::prelude::*;`.

pub use gazetteer_core::*;

pub mod prelude {
    pub use gazetteer_core::prelude::*;
}
