macro_rules! nutype_string {
    ($ident:ident($($args:tt)*)) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Display,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(String);
    };
}

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum whose
/// variants map to fixed keywords.
macro_rules! keyword_enum {
    ($ident:ident($kind:literal) { $($variant:ident => $keyword:literal),* $(,)? }) => {
        impl $ident {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword),*
                }
            }
        }

        impl ::core::fmt::Display for $ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $ident {
            type Err = $crate::ParseKeywordError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok(Self::$variant),)*
                    _ => Err($crate::ParseKeywordError {
                        kind: $kind,
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

pub(crate) use id;
pub(crate) use keyword_enum;
pub(crate) use nutype_string;
