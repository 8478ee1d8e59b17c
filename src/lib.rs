// optio library entry point
//
// optio compiles a line-oriented option schema into (a) a strongly-typed
// configuration record definition and (b) a parser that reads key/value
// config files into that record. The runtime module holds the parser
// semantics shared by the library and by generated code.

pub mod codegen;
pub mod internal;
pub mod runtime;
pub mod schema;

pub use internal::error::{Error, Result};
