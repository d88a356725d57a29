//! TypeScript code generation modules.

pub mod discriminator;
pub mod interfaces;
pub mod mapping;
pub mod simple;

pub use discriminator::DiscriminatorGenerator;
pub use interfaces::{InterfaceGenerator, render_complex_type};
pub use mapping::{XsdPrimitive, map_type};
pub use simple::{SimpleTypeGenerator, render_simple_type};
