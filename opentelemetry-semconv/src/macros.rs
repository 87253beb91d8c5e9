/// Declares a typed enum over the documented values of a string attribute.
///
/// ```ignore
/// semconv_enum! {
///     /// Values of [`NETWORK_TRANSPORT`].
///     NetworkTransport for NETWORK_TRANSPORT {
///         /// TCP
///         Tcp = "tcp",
///         /// UDP
///         Udp = "udp",
///     }
/// }
/// ```
///
/// Variants carry their literal rather than referring to the value constants,
/// so the enum compiles whatever subset of those constants is enabled.
macro_rules! semconv_enum {
    (
        $(#[$meta:meta])*
        $name:ident for $attr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every documented value, in model order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The value as it is recorded on telemetry.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Pairs this value with its attribute key.
            #[cfg(feature = "opentelemetry")]
            #[cfg_attr(docsrs, doc(cfg(feature = "opentelemetry")))]
            pub fn key_value(self) -> ::opentelemetry::KeyValue {
                ::opentelemetry::KeyValue::new($attr, self.as_str())
            }
        }

        impl $crate::value::EnumValue for $name {
            const ATTRIBUTE: &'static str = $attr;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::value::UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::value::parse(s)
            }
        }

        #[cfg(feature = "opentelemetry")]
        #[cfg_attr(docsrs, doc(cfg(feature = "opentelemetry")))]
        impl From<$name> for ::opentelemetry::Value {
            fn from(value: $name) -> Self {
                ::opentelemetry::Value::from(value.as_str())
            }
        }
    };
}
