//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_INDENT_BLOCK: &str = "indent.block";
pub const CHECK_INDENT_SINGLE_STATEMENT: &str = "indent.single_statement";
pub const CHECK_INDENT_BASE: &str = "indent.base";

// Codes: indent.block
pub const CODE_NESTED_ELEMENT: &str = "nested_element";
pub const CODE_CLOSING_BRACE: &str = "closing_brace";

// Codes: indent.single_statement
pub const CODE_STATEMENT_BODY: &str = "statement_body";

// Codes: indent.base
pub const CODE_OFF_UNIT: &str = "off_unit";
