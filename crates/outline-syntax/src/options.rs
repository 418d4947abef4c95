/// Options accepted by the parsing entry points.
///
/// Both default to off. Documents remember the options they were parsed with,
/// and [`Docs::sort`](crate::Docs::sort) consults them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub sort_functions: bool,
    pub sort_types: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort each document's functions by signature.
    pub fn sort_functions(mut self, on: bool) -> Self {
        self.sort_functions = on;
        self
    }

    /// Sort each document's types by name, and each type's methods by signature.
    pub fn sort_types(mut self, on: bool) -> Self {
        self.sort_types = on;
        self
    }
}
