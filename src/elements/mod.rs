//! Typed element handles
//!
//! Each wrapper is a thin newtype over [`ElementBase`] that picks up the
//! shared behaviour from [`Element`] and adds the actions that make sense
//! for its kind.

/// Declare an element wrapper type
macro_rules! element_type {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            base: $crate::elements::ElementBase,
        }

        impl $crate::elements::Element for $name {
            const KIND: &'static str = $kind;

            fn base(&self) -> &$crate::elements::ElementBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::elements::ElementBase {
                &mut self.base
            }

            fn from_base(base: $crate::elements::ElementBase) -> Self {
                Self { base }
            }
        }
    };
}

pub mod base;
pub mod button;
pub mod checkbox;
pub mod container;
pub mod input;
pub mod link;
pub mod tab;
pub mod text;

pub use base::{Element, ElementBase};
pub use button::Button;
pub use checkbox::Checkbox;
pub use container::Container;
pub use input::Input;
pub use link::Link;
pub use tab::Tab;
pub use text::{Icon, Label, Text};
