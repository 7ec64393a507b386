//! Macro for declaring the closed set of hook phases in each scope.

/// Generate a phase enum together with its string keys, `Display` and
/// `FromStr` implementations.
///
/// Parsing an unknown key yields an [`UnknownPhase`](crate::core::UnknownPhase)
/// naming the scope and the keys that would have been accepted.
macro_rules! phase_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $scope:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every phase in this scope, in pipeline order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The string keys accepted by `FromStr`, in pipeline order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// The string key for this phase.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = UnknownPhase;

            fn from_str(key: &str) -> Result<Self, Self::Err> {
                match key {
                    $($key => Ok(Self::$variant),)*
                    _ => Err(UnknownPhase {
                        scope: HookScope::$scope,
                        key: key.to_string(),
                        valid: Self::KEYS,
                    }),
                }
            }
        }
    };
}

pub(crate) use phase_enum;
