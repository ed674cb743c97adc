//! `define_port_error!` builds the error enums returned by driven ports.
//!
//! Each variant is tagged `transient` or `permanent`. The tag drives the
//! generated `is_transient` method, which callers use to decide between
//! retrying later and reporting a hard failure.
//!
//! ```ignore
//! define_port_error! {
//!     /// Failures raised by the widget source.
//!     pub enum WidgetSourceError {
//!         /// Provider did not answer in time.
//!         transient Timeout { message: String } => "timed out: {message}",
//!         /// Payload did not decode.
//!         permanent Decode { message: String } => "bad payload: {message}",
//!     }
//! }
//!
//! let err = WidgetSourceError::timeout("5s");
//! assert!(err.is_transient());
//! ```

macro_rules! define_port_error {
    (@class transient) => { true };
    (@class permanent) => { false };

    (@pattern $variant:ident) => { Self::$variant };
    (@pattern $variant:ident { $($field:ident : $ty:ty),* }) => { Self::$variant { .. } };

    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };
    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = concat!("Build the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $class:ident $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Whether the failure may clear up on its own, so a later
            /// attempt could succeed.
            #[must_use]
            pub const fn is_transient(&self) -> bool {
                match self {
                    $(
                        define_port_error!(@pattern $variant $( { $($field : $ty),* } )?) =>
                            define_port_error!(@class $class),
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
