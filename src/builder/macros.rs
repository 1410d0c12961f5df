//! Macros for declaring states and events with little boilerplate.

/// Define an enum and implement `State` for it.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Broken,
///     }
///     final: [Broken]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Implement `Event` for a type.
///
/// The kind defaults to the type's name; pass `=> "Kind"` to override it.
///
/// # Example
///
/// ```
/// use switchyard::core::Event;
/// use switchyard::impl_event;
///
/// struct StartEvent;
/// impl_event!(StartEvent);
///
/// struct Legacy;
/// impl_event!(Legacy => "legacy.start");
///
/// assert_eq!(StartEvent.kind(), "StartEvent");
/// assert_eq!(Legacy.kind(), "legacy.start");
/// ```
#[macro_export]
macro_rules! impl_event {
    ($ty:ident) => {
        $crate::impl_event!($ty => stringify!($ty));
    };
    ($ty:ident => $kind:expr) => {
        impl $crate::core::Event for $ty {
            fn kind(&self) -> &str {
                $kind
            }
        }
    };
}
