// Common test utilities shared across test files

use siplus::{make_value, Context};

/// Build a context from raw CLI-style strings
#[allow(dead_code)]
pub fn context_with(default: &str, values: &[(&str, &str)]) -> Context {
    let mut builder = Context::builder();
    builder
        .use_default(make_value(default))
        .expect("Failed to set default");
    for (name, raw) in values {
        builder
            .with(*name, make_value(raw))
            .expect("Failed to bind value");
    }
    builder.build().expect("Failed to build context")
}

/// Global names for strict parsing, taken from the bound values
#[allow(dead_code)]
pub fn globals(values: &[(&str, &str)]) -> Vec<String> {
    values.iter().map(|(name, _)| name.to_string()).collect()
}
