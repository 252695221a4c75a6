/// There is but one – failure 🤪.
///
/// Only the checked constructors at the boundary (key expansion, block
/// conversion) report it; the primitives themselves have preconditions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
