// Macros to emit `tracing` events, compiled out without the `tracing` feature.

#[doc(hidden)]
#[macro_export]
macro_rules! __kinds_trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$trace_type!($($element)*);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kinds_trace {
    ($($element:tt)*) => {{
        $crate::__kinds_trace_internal!(trace; $($element)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __kinds_trace_debug {
    ($($element:tt)*) => {{
        $crate::__kinds_trace_internal!(debug; $($element)*)
    }};
}
