/// Render settings recognized under the `canvas` key.
pub(crate) mod settings;
/// Project YAML loading and validation.
pub(crate) mod project;
