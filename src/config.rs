/// Greeting a freshly constructed `Greeter` starts with.
pub const DEFAULT_GREETING: &str = "Hello, world!";

/// Operands the demo run passes to `Greeter::add_two_numbers`.
pub const DEMO_OPERANDS: (i32, i32) = (5, 10);
