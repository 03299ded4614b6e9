//! Macros for declaring calculation kinds.

/// Declare a set of calculation kinds together with a function registering them.
///
/// Every entry `Kind => "name", operation;` generates a struct `Kind` holding two
/// operands, implements [`Calculation`](trait.Calculation.html) for it by applying
/// `operation`, and adds it to the generated registration function under `"name"`.
///
/// ```
/// use calculation::{define_calculations, Error, Registry};
///
/// fn pow(a: f64, b: f64) -> Result<f64, Error> {
///     Ok(a.powf(b))
/// }
///
/// define_calculations! {
///     /// Register the extra calculations.
///     pub fn register_extra;
///
///     /// Raise a number to a power.
///     Power => "power", pow;
/// }
///
/// let mut registry = Registry::with_builtins().unwrap();
/// register_extra(&mut registry).unwrap();
/// assert_eq!(registry.create("power", 2.0, 10.0).unwrap().execute(), Ok(1024.0));
/// ```
#[macro_export]
macro_rules! define_calculations {
    (
        $(#[$fn_meta:meta])*
        $vis:vis fn $register:ident;

        $(
            $(#[$meta:meta])*
            $kind:ident => $name:literal, $operation:path;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq)]
            pub struct $kind {
                a: f64,
                b: f64,
            }

            impl $kind {
                /// Bind the operands `a` and `b` to this calculation.
                #[must_use]
                pub const fn new(a: f64, b: f64) -> Self {
                    Self { a, b }
                }
            }

            impl $crate::Calculation for $kind {
                fn kind(&self) -> &'static str {
                    stringify!($kind)
                }

                fn name(&self) -> &'static str {
                    $name
                }

                fn operands(&self) -> (f64, f64) {
                    (self.a, self.b)
                }

                fn execute(&self) -> Result<f64, $crate::Error> {
                    $operation(self.a, self.b)
                }
            }
        )*

        $(#[$fn_meta])*
        $vis fn $register(registry: &mut $crate::Registry) -> Result<(), $crate::Error> {
            $(
                registry.register($name, |a, b| -> Box<dyn $crate::Calculation> {
                    Box::new($kind::new(a, b))
                })?;
            )*
            Ok(())
        }
    };
}
