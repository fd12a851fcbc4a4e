/// Materializing read command.
pub mod read;
/// Token stream dump command.
pub mod tokens;
