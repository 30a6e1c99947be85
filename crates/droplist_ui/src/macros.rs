//! Macros for reducing builder boilerplate.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(width, f32);
/// // Generates: pub fn width(mut self, value: f32) -> Self { self.width = value; self }
///
/// // When method name differs from field name:
/// builder_field!(radius, border_radius, f32);
/// ```
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a builder-style setter method for an `Option` field.
///
/// ```ignore
/// builder_option!(max_visible_rows, usize);
/// // Generates: pub fn max_visible_rows(mut self, value: usize) -> Self { self.max_visible_rows = Some(value); self }
/// ```
#[macro_export]
macro_rules! builder_option {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = Some(value);
            self
        }
    };
}

/// Generates a setter that stores a closure in a [`Callback`](crate::Callback) field.
///
/// The surrounding type must be generic over a message type named `M`.
///
/// ```ignore
/// callback_setter!(on_select, usize);
/// // Generates: pub fn on_select<F>(mut self, f: F) -> Self where F: Fn(usize) -> M + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}
