//! Helper macro generating port error enums with snake_case constructors.
//!
//! Each variant gets a `thiserror` message and a constructor whose string
//! fields accept anything `Into<String>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
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
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    define_port_error! {
        pub enum SamplePortError {
            Offline => "store offline",
            Query { message: String } => "query failed: {message}",
            Limit { max: u32 } => "limit exceeded: {max}",
            Mixed { message: String, max: u32 } => "mixed: {message} ({max})",
        }
    }

    #[rstest]
    #[case(SamplePortError::offline(), "store offline")]
    #[case(SamplePortError::query("timeout"), "query failed: timeout")]
    #[case(SamplePortError::limit(3_u32), "limit exceeded: 3")]
    #[case(SamplePortError::mixed("name", 9_u32), "mixed: name (9)")]
    fn constructors_render_messages(#[case] error: SamplePortError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn string_fields_accept_owned_and_borrowed_values() {
        let borrowed = SamplePortError::query("x");
        let owned = SamplePortError::query(String::from("x"));
        assert_eq!(borrowed, owned);
    }
}
