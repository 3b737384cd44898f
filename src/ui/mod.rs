// Output formatting module

pub mod plugin_output;

pub use plugin_output::format_plugin_output;
