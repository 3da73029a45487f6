#![allow(unused_macros)]

/// Defines one versioned `PropertyKey` enumeration together with its [`crate::tables::KeyTable`]
/// implementation.
///
/// Each variant is written without the `kProperty` prefix; the full name is rebuilt with
/// `concat!`, so the variant list is the only place a name is spelled out. Codes are checked
/// at compile time against [`crate::keyset::CAPACITY`].
///
/// ```rust, ignore
/// property_keys! {
///     version: TableVersion::Current;
///     ScrollDirection = 0,
///     AccessibilityActions = 1,
/// }
/// ```
macro_rules! property_keys {
    (
        $(#[$meta:meta])*
        version: $version:expr;
        $( $variant:ident = $code:literal ),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Debug,
            strum::EnumIter,
            strum::EnumCount,
            strum::FromRepr,
        )]
        #[repr(u16)]
        pub enum PropertyKey {
            $(
                #[doc = concat!("`kProperty", stringify!($variant), "` (", stringify!($code), ")")]
                $variant = $code,
            )+
        }

        const _: () = {
            $( assert!(($code as usize) < $crate::keyset::CAPACITY); )+
        };

        impl $crate::tables::KeyTable for PropertyKey {
            const VERSION: $crate::TableVersion = $version;

            fn code(self) -> u16 {
                self as u16
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => concat!("kProperty", stringify!($variant)), )+
                }
            }

            fn from_code(code: u16) -> Option<Self> {
                Self::from_repr(code)
            }

            fn from_name(name: &str) -> Option<Self> {
                static INDEX: std::sync::OnceLock<
                    std::collections::HashMap<&'static str, PropertyKey>,
                > = std::sync::OnceLock::new();

                INDEX
                    .get_or_init(|| {
                        <Self as strum::IntoEnumIterator>::iter()
                            .map(|key| ($crate::tables::KeyTable::name(key), key))
                            .collect()
                    })
                    .get(name)
                    .copied()
            }
        }

        impl std::fmt::Display for PropertyKey {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::tables::KeyTable::name(*self))
            }
        }

        impl std::str::FromStr for PropertyKey {
            type Err = $crate::Error;

            /// Accepts the full name (`kPropertyScrollDirection`) only.
            fn from_str(s: &str) -> $crate::Result<Self> {
                <Self as $crate::tables::KeyTable>::from_name(s)
                    .ok_or_else(|| $crate::Error::NameNotFound {
                        name: s.to_string(),
                        version: $version,
                    })
            }
        }

        impl TryFrom<u16> for PropertyKey {
            type Error = $crate::Error;

            fn try_from(code: u16) -> $crate::Result<Self> {
                <Self as $crate::tables::KeyTable>::lookup_code(code)
            }
        }

        impl From<PropertyKey> for u16 {
            fn from(key: PropertyKey) -> Self {
                key as u16
            }
        }

        impl serde::Serialize for PropertyKey {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::wire::serialize_key(*self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for PropertyKey {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::wire::deserialize_key(deserializer)
            }
        }
    };
}

/// Runs `$body` with `$key` bound as a type alias to the `PropertyKey` enum of `$version`.
///
/// ```rust, ignore
/// let count = for_version!(version, K => K::COUNT);
/// ```
macro_rules! for_version {
    ($version:expr, $key:ident => $body:expr) => {
        match $version {
            $crate::TableVersion::Current => {
                type $key = $crate::tables::current::PropertyKey;
                $body
            }
            $crate::TableVersion::Legacy => {
                type $key = $crate::tables::legacy::PropertyKey;
                $body
            }
        }
    };
}
