//! Macros for declaring `State` enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Besides the trait impl, the enum gets an `ALL` constant listing every
/// variant in declaration order.
///
/// # Example
///
/// ```
/// use berthguard::state_enum;
/// use berthguard::core::State;
///
/// state_enum! {
///     pub enum BerthState {
///         Approaching,
///         Moored,
///         Departed,
///         Refused,
///     }
///     final: [Departed, Refused]
///     error: [Refused]
/// }
///
/// assert_eq!(BerthState::ALL.len(), 4);
/// assert!(BerthState::Refused.is_error());
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
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
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

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Berth {
            Approaching,
            Moored,
            Departed,
            Refused,
        }
        final: [Departed, Refused]
        error: [Refused]
    }

    #[test]
    fn generates_state_impl() {
        assert_eq!(Berth::Moored.name(), "Moored");
        assert!(!Berth::Approaching.is_final());
        assert!(Berth::Departed.is_final());
        assert!(!Berth::Departed.is_error());
        assert!(Berth::Refused.is_error());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            Berth::ALL,
            &[
                Berth::Approaching,
                Berth::Moored,
                Berth::Departed,
                Berth::Refused
            ]
        );
    }

    #[test]
    fn extra_derives_are_accepted() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Tide {
                Flood,
                Ebb,
            }
        }

        let tide = Tide::Ebb;
        let copy = tide;
        assert_eq!(tide, copy);
        assert!(!copy.is_final());
        assert!(!copy.is_error());
    }
}
