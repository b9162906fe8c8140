//! Dart source rendering modules.

pub mod classes;
pub mod fields;
pub mod header;

pub use classes::{render_declaration, render_unit};
pub use fields::render_field;
pub use header::unit_header;
